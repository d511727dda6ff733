//! Wall-clock timing for scoped work, with human-readable durations.
//!
//! [`Timer`] logs a start line when created and a completion line with the
//! elapsed time when it goes out of scope. [`format_time`] renders seconds as
//! a breakdown such as `"1 hour 1 minute 1 second"`.

pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod timer;

pub use error::{FormatError, LoggingError};
pub use format::{format_duration, format_raw_seconds, format_time, try_format_time};
pub use logging::{LogFormat, LoggingOptions, setup_logging, setup_logging_with_writer};
pub use timer::{DEFAULT_LABEL, Timer, TimingSession, time};
