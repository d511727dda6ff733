pub mod formatter;

use std::io::IsTerminal;
use std::sync::{Mutex, PoisonError};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::{Layered, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, reload};

use crate::config::Config;
use crate::error::LoggingError;
use formatter::{Template, TemplateFormatter};

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Template-based, human-readable lines.
    #[default]
    Pretty,
    /// Newline-delimited JSON.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingOptions {
    /// Filter directive such as `"info"` or `"warn,chronoscope=debug"`.
    pub level: String,
    pub format: LogFormat,
    /// Line template for [`LogFormat::Pretty`]; ignored for JSON.
    pub template: Option<String>,
    /// Emit ANSI colour escapes.
    pub ansi: bool,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Pretty,
            template: None,
            ansi: true,
        }
    }
}

impl LoggingOptions {
    /// Options for stdout, with colour only when stdout is a terminal.
    pub fn from_config(config: &Config, format: LogFormat) -> Self {
        Self {
            level: config.log_level.clone(),
            format,
            template: config.log_template.clone(),
            ansi: std::io::stdout().is_terminal(),
        }
    }
}

type FilterLayer = reload::Layer<EnvFilter, Registry>;
type Base = Layered<FilterLayer, Registry>;
type OutputLayer = Box<dyn Layer<Base> + Send + Sync>;

/// Reload handles for the process-wide subscriber installed by [`setup_logging`].
struct Handles {
    filter: reload::Handle<EnvFilter, Registry>,
    output: reload::Handle<OutputLayer, Base>,
}

/// `None` until the global subscriber is installed. Held across the install
/// so a reconfiguration can never observe a half-finished first call.
static HANDLES: Mutex<Option<Handles>> = Mutex::new(None);

/// Configure process-wide logging to stdout.
///
/// The first call installs the global subscriber. Every later call replaces
/// its filter and output layer in place, so calling this repeatedly never
/// duplicates output. `RUST_LOG` takes precedence over `options.level`.
///
/// Fails if the filter or template is invalid, or if some other global
/// subscriber was installed first.
pub fn setup_logging(options: &LoggingOptions) -> Result<(), LoggingError> {
    setup_logging_with_writer(options, std::io::stdout)
}

/// [`setup_logging`] with log lines sent to `make_writer` instead of stdout.
///
/// A reconfiguration drops the previous writer along with the previous
/// output layer.
pub fn setup_logging_with_writer<W>(
    options: &LoggingOptions,
    make_writer: W,
) -> Result<(), LoggingError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = build_filter(&options.level)?;
    let output = build_output(options, make_writer)?;

    let mut handles = HANDLES.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(handles) = handles.as_ref() {
        handles.filter.reload(filter)?;
        handles.output.reload(output)?;
        return Ok(());
    }

    let (filter_layer, filter_handle) = reload::Layer::new(filter);
    let (output_layer, output_handle) = reload::Layer::new(output);
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(output_layer)
        .try_init()?;

    *handles = Some(Handles {
        filter: filter_handle,
        output: output_handle,
    });
    Ok(())
}

fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(level)?),
    }
}

fn build_output<W>(options: &LoggingOptions, make_writer: W) -> Result<OutputLayer, LoggingError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer: OutputLayer = match options.format {
        LogFormat::Pretty => {
            let template = match &options.template {
                Some(source) => Template::parse(source)?,
                None => Template::default(),
            };
            tracing_subscriber::fmt::layer()
                .with_ansi(options.ansi)
                .with_writer(make_writer)
                .event_format(TemplateFormatter::new(template))
                .boxed()
        }
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_ansi(false)
            .with_writer(make_writer)
            .boxed(),
    };
    Ok(layer)
}
