//! Scope-bound wall-clock timing.
//!
//! A [`Timer`] logs `"{label}: Starting..."` when created and
//! `" {label}: Completed in {elapsed}"` when it is finished or dropped,
//! whichever comes first. Dropping covers early returns and panics, so the
//! completion line is emitted on every exit path.

use std::time::{Duration, Instant};

use tracing::info;

use crate::format::{format_raw_seconds, format_time};

/// Label used when none (or an empty one) is given.
pub const DEFAULT_LABEL: &str = "Execution";

/// Guard that measures the time between its creation and its end of scope.
///
/// ```
/// use chronoscope::Timer;
///
/// {
///     let _timer = Timer::start("Database query");
///     // ... work ...
/// } // " Database query: Completed in ..." is logged here
/// ```
#[derive(Debug)]
#[must_use = "a timer completes as soon as it is dropped"]
pub struct Timer {
    label: String,
    use_formatter: bool,
    start: Instant,
    finished: bool,
}

impl Timer {
    /// Create a timer and log its start.
    ///
    /// `use_formatter` selects [`format_time`] output; otherwise the elapsed
    /// time is printed as seconds with six decimals.
    pub fn new(label: Option<&str>, use_formatter: bool) -> Self {
        let label = label
            .filter(|label| !label.is_empty())
            .unwrap_or(DEFAULT_LABEL)
            .to_owned();
        let start = Instant::now();
        info!("{label}: Starting...");
        Self {
            label,
            use_formatter,
            start,
            finished: false,
        }
    }

    /// Timer with human-readable output.
    pub fn start(label: &str) -> Self {
        Self::new(Some(label), true)
    }

    /// Timer with raw `0.000000 seconds` output.
    pub fn raw(label: &str) -> Self {
        Self::new(Some(label), false)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn uses_formatter(&self) -> bool {
        self.use_formatter
    }

    /// Time elapsed so far, without completing the timer.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop the timer now and return the measured session.
    ///
    /// The completion line is logged here instead of on drop.
    pub fn finish(mut self) -> TimingSession {
        self.finished = true;
        self.complete()
    }

    fn complete(&self) -> TimingSession {
        let session = TimingSession {
            label: self.label.clone(),
            start: self.start,
            end: Instant::now(),
        };
        info!(
            " {}: Completed in {}",
            session.label,
            session.render(self.use_formatter)
        );
        session
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        if !self.finished {
            self.finished = true;
            self.complete();
        }
    }
}

/// A completed measurement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingSession {
    pub label: String,
    pub start: Instant,
    pub end: Instant,
}

impl TimingSession {
    pub fn elapsed(&self) -> Duration {
        self.end.saturating_duration_since(self.start)
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    /// Render the elapsed time the way the completion line does.
    pub fn render(&self, use_formatter: bool) -> String {
        if use_formatter {
            format_time(self.elapsed_secs())
        } else {
            format_raw_seconds(self.elapsed_secs())
        }
    }
}

/// Run `f` inside a [`Timer`] and hand back its result untouched.
///
/// `Result`s are returned as-is and panics unwind through; the completion
/// line is logged either way.
pub fn time<T>(label: &str, f: impl FnOnce() -> T) -> T {
    let _timer = Timer::start(label);
    f()
}
