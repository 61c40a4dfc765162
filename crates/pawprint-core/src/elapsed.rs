//! Human-readable elapsed time.
//!
//! Durations are rendered with the largest non-zero unit and, for days and
//! hours, the next unit down: `"1 day 1 hour"`, `"2 hours 0 minutes"`,
//! `"5 minutes"`, `"42 seconds"`.

use chrono::Duration;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Formats a duration in milliseconds.
///
/// Each unit is a truncating conversion of the whole duration, not of the
/// remainder left by the larger unit. Negative durations (future events)
/// fall through the cascade and come out as negative seconds; telling
/// "ago" from "upcoming" is left to the caller.
pub fn format_elapsed(ms: i64) -> String {
    let days = ms / MS_PER_DAY;
    let hours = ms / MS_PER_HOUR;
    let minutes = ms / MS_PER_MINUTE;
    let seconds = ms / MS_PER_SECOND;

    if days >= 1 {
        let rem_hours = hours - days * 24;
        format!(
            "{days} {} {rem_hours} {}",
            pluralise("day", days),
            pluralise("hour", rem_hours)
        )
    } else if hours >= 1 {
        let rem_minutes = minutes - hours * 60;
        format!(
            "{hours} {} {rem_minutes} {}",
            pluralise("hour", hours),
            pluralise("minute", rem_minutes)
        )
    } else if minutes >= 1 {
        format!("{minutes} {}", pluralise("minute", minutes))
    } else {
        format!("{seconds} {}", pluralise("second", seconds))
    }
}

/// Formats a `chrono` duration. See [`format_elapsed`].
pub fn format_duration(duration: Duration) -> String {
    format_elapsed(duration.num_milliseconds())
}

/// Appends `s` to `word` unless `value` is exactly one.
///
/// The full `i64` is compared, without narrowing to 32 bits first; the two
/// only disagree for magnitudes beyond `i32::MAX`.
pub fn pluralise(word: &str, value: i64) -> String {
    if value == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
