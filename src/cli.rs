use clap::{Parser, ValueEnum};

use chronoscope::LogFormat;

/// Time a handful of sample operations and print human-readable durations.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Log output format
    #[arg(long, value_enum, default_value_t = TracingFormat::Pretty)]
    pub tracing: TracingFormat,

    /// Log filter directive, overriding CHRONOSCOPE_LOG_LEVEL
    #[arg(long)]
    pub log_level: Option<String>,

    /// Report elapsed times as raw seconds instead of a human-readable breakdown
    #[arg(long)]
    pub raw: bool,

    /// Also run the slow (65 second) example
    #[arg(long)]
    pub long: bool,

    /// Durations in seconds to format instead of the built-in samples
    #[arg(value_name = "SECONDS", allow_negative_numbers = true)]
    pub seconds: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TracingFormat {
    Pretty,
    Json,
}

impl From<TracingFormat> for LogFormat {
    fn from(format: TracingFormat) -> Self {
        match format {
            TracingFormat::Pretty => LogFormat::Pretty,
            TracingFormat::Json => LogFormat::Json,
        }
    }
}
