use crate::cli::Args;
use anyhow::Context;
use chronoscope::config::Config;
use chronoscope::{LoggingOptions, Timer, format_time, setup_logging};
use clap::Parser;
use std::process::ExitCode;
use std::thread::sleep;
use std::time::Duration;
use tracing::debug;

mod cli;

/// Reference values printed when no `SECONDS` are given on the command line.
const SAMPLE_SECONDS: &[f64] = &[
    0.001, 0.5, 65.0, 3661.0, 86400.0, 604800.0, 2629800.0, 31557600.0,
];

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::load().context("failed to load configuration")?;
    if let Some(level) = args.log_level.clone() {
        config.log_level = level;
    }
    if args.raw {
        config.use_formatter = false;
    }

    setup_logging(&LoggingOptions::from_config(&config, args.tracing.into()))
        .context("failed to set up logging")?;
    debug!(?config, "configuration loaded");

    if args.seconds.is_empty() {
        run_timer_examples(config.use_formatter, args.long);
        banner("Direct formatter usage");
        print_formatted(SAMPLE_SECONDS);
    } else {
        print_formatted(&args.seconds);
    }
    Ok(())
}

fn run_timer_examples(use_formatter: bool, include_long: bool) {
    let timer = |label: Option<&str>| Timer::new(label, use_formatter);

    banner(if use_formatter {
        "Examples with human-readable formatting"
    } else {
        "Examples with raw seconds"
    });

    {
        let _timer = timer(None);
        sleep(Duration::from_millis(500));
    }

    {
        let _timer = timer(Some("Database query"));
        sleep(Duration::from_millis(300));
    }

    {
        let _timer = timer(Some("Complex calculation"));
        let result: u64 = (0..1_000_000u64).map(|i| i * i).sum();
        println!("Result: {result}");
    }

    {
        let _timer = timer(Some("Quick operation"));
        sleep(Duration::from_millis(1));
    }

    if include_long {
        let _timer = timer(Some("Long operation"));
        sleep(Duration::from_secs(65));
    }

    {
        let _outer = timer(Some("Outer operation"));
        sleep(Duration::from_millis(200));
        {
            let _inner = timer(Some("Inner operation"));
            sleep(Duration::from_millis(100));
        }
        sleep(Duration::from_millis(200));
    }

    if use_formatter {
        banner("Examples with raw seconds");
        let _timer = Timer::raw("Raw format example");
        sleep(Duration::from_millis(123));
    }
}

fn print_formatted(values: &[f64]) {
    for &seconds in values {
        println!("{seconds} seconds = {}", format_time(seconds));
    }
}

fn banner(title: &str) {
    let rule = "=".repeat(60);
    println!("\n{rule}\n{title}\n{rule}");
}
