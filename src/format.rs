//! Human-readable rendering of elapsed seconds.
//!
//! Durations are broken down into years, months, weeks, days, hours and
//! minutes, followed by either whole/fractional seconds or milliseconds.
//! Zero-valued units are omitted:
//!
//! ```
//! use chronoscope::format_time;
//!
//! assert_eq!(format_time(3661.0), "1 hour 1 minute 1 second");
//! assert_eq!(format_time(0.001234), "1.234 milliseconds");
//! ```

use std::time::Duration;

use crate::error::FormatError;

/// A calendar-free unit with a fixed length in seconds.
struct Unit {
    seconds: f64,
    singular: &'static str,
    plural: &'static str,
}

// Lengths are multiplied out left to right; `30.44 * 86400.0` would round
// to a different MONTH than `30.44 * 24.0 * 60.0 * 60.0`.
const YEAR: f64 = 365.25 * 24.0 * 60.0 * 60.0;
const MONTH: f64 = 30.44 * 24.0 * 60.0 * 60.0;
const WEEK: f64 = 7.0 * 24.0 * 60.0 * 60.0;
const DAY: f64 = 24.0 * 60.0 * 60.0;
const HOUR: f64 = 60.0 * 60.0;
const MINUTE: f64 = 60.0;
const MILLISECOND: f64 = 0.001;

/// Coarse units, strictly descending.
const UNITS: [Unit; 6] = [
    Unit { seconds: YEAR, singular: "year", plural: "years" },
    Unit { seconds: MONTH, singular: "month", plural: "months" },
    Unit { seconds: WEEK, singular: "week", plural: "weeks" },
    Unit { seconds: DAY, singular: "day", plural: "days" },
    Unit { seconds: HOUR, singular: "hour", plural: "hours" },
    Unit { seconds: MINUTE, singular: "minute", plural: "minutes" },
];

const ZERO: &str = "0 seconds";

fn plural(count: f64, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1.0 { singular } else { plural }
}

/// Splits `remaining` into a whole number of `unit`s and the leftover.
///
/// The count is derived from the exact floating remainder rather than from
/// `(remaining / unit).floor()`, so the two always agree. It stays an
/// integer-valued `f64`; counts past `u64::MAX` are ordinary for large input.
fn div_mod(remaining: f64, unit: f64) -> (f64, f64) {
    let rem = remaining % unit;
    let count = ((remaining - rem) / unit).round();
    (count, rem)
}

/// Format a number of seconds as a human-readable breakdown.
///
/// Total over finite input, negative values included (`-90.0` renders as
/// `"-1 minute 30 seconds"`). Non-finite input is passed through as
/// `"{value} seconds"`; use [`try_format_time`] to reject it instead.
///
/// A fractional remainder of at least one second is always printed with three
/// decimals and the word "seconds", even when it displays as `1.000`.
pub fn format_time(seconds: f64) -> String {
    if seconds == 0.0 {
        return ZERO.to_owned();
    }
    if !seconds.is_finite() {
        return format!("{seconds} seconds");
    }

    let mut parts: Vec<String> = Vec::new();
    let mut remaining = seconds.abs();

    for unit in &UNITS {
        if remaining >= unit.seconds {
            let (count, rem) = div_mod(remaining, unit.seconds);
            parts.push(format!("{count:.0} {}", plural(count, unit.singular, unit.plural)));
            remaining = rem;
        }
    }

    if remaining >= 1.0 {
        if remaining.fract() != 0.0 {
            parts.push(format!("{remaining:.3} seconds"));
        } else {
            parts.push(format!(
                "{remaining:.0} {}",
                plural(remaining, "second", "seconds")
            ));
        }
    } else if remaining > 0.0 {
        let millis = remaining / MILLISECOND;
        let label = if millis == 1.0 { "millisecond" } else { "milliseconds" };
        parts.push(format!("{millis:.3} {label}"));
    }

    if parts.is_empty() {
        return ZERO.to_owned();
    }

    let joined = parts.join(" ");
    if seconds < 0.0 {
        format!("-{joined}")
    } else {
        joined
    }
}

/// Checked variant of [`format_time`] that rejects NaN and infinities.
pub fn try_format_time(seconds: f64) -> Result<String, FormatError> {
    if seconds.is_finite() {
        Ok(format_time(seconds))
    } else {
        Err(FormatError::NonFinite(seconds))
    }
}

/// Format a [`Duration`] via [`format_time`].
pub fn format_duration(duration: Duration) -> String {
    format_time(duration.as_secs_f64())
}

/// Fixed six-decimal rendering used when human formatting is disabled.
pub fn format_raw_seconds(seconds: f64) -> String {
    format!("{seconds:.6} seconds")
}
