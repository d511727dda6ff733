//! Error types for duration formatting and logging setup.

/// Returned by [`crate::format::try_format_time`] for input it refuses to render.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum FormatError {
    #[error("cannot format non-finite duration: {0} seconds")]
    NonFinite(f64),
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log filter directive")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("invalid log template at byte {position}: {reason}")]
    Template { position: usize, reason: String },
    #[error("a global tracing subscriber is already installed")]
    Install(#[from] tracing_subscriber::util::TryInitError),
    #[error("failed to reload logging configuration")]
    Reload(#[from] tracing_subscriber::reload::Error),
}
