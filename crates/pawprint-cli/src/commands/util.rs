//! Shared utilities for CLI commands.

use std::sync::LazyLock;

use anyhow::{Context, bail};
use chrono::{DateTime, Duration, Local, NaiveDateTime, TimeZone, Utc};
use pawprint_core::Entry;
use pawprint_db::EntryRepository;
use regex::Regex;

/// Pre-compiled regex for relative time parsing.
static RELATIVE_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d+)\s+(minute|hour|day|week)s?\s+ago|in\s+(\d+)\s+(minute|hour|day|week)s?)$")
        .unwrap()
});

/// Conservative bounds for relative time parsing (~1000 years in minutes).
const MAX_RELATIVE_MINUTES: i64 = 1000 * 365 * 24 * 60;

/// Local date-time formats accepted for picked times.
const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"];

/// Number of ID characters shown in listings.
pub const SHORT_ID_LEN: usize = 8;

/// Parse a point in time relative to `now`.
///
/// Supports:
/// - "now"
/// - RFC 3339: "2026-01-15T10:30:00Z"
/// - Local wall-clock time: "2026-01-15 10:30"
/// - Past: "2 hours ago", "30 minutes ago", "1 day ago", "1 week ago"
/// - Future: "in 2 hours", "in 1 day"
pub fn parse_when(s: &str, now: DateTime<Utc>) -> anyhow::Result<DateTime<Utc>> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("now") {
        return Ok(now);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            let Some(local) = Local.from_local_datetime(&naive).earliest() else {
                bail!("{s} does not exist in the local time zone");
            };
            return Ok(local.with_timezone(&Utc));
        }
    }

    let Some(caps) = RELATIVE_TIME_RE.captures(s) else {
        bail!(
            "Invalid time: {s}. Use RFC 3339 (e.g., 2026-01-15T10:30:00Z), local time (e.g., '2026-01-15 10:30') or relative (e.g., '2 hours ago', 'in 30 minutes')"
        );
    };

    let (number, unit, sign) = match (caps.get(1), caps.get(2), caps.get(3), caps.get(4)) {
        (Some(n), Some(unit), _, _) => (n.as_str(), unit.as_str(), -1),
        (_, _, Some(n), Some(unit)) => (n.as_str(), unit.as_str(), 1),
        _ => bail!("Invalid time: {s}"),
    };

    let n: i64 = number
        .parse()
        .context("failed to parse number in relative time")?;

    let (max_for_unit, minutes_per_unit) = match unit {
        "minute" => (MAX_RELATIVE_MINUTES, 1),
        "hour" => (MAX_RELATIVE_MINUTES / 60, 60),
        "day" => (MAX_RELATIVE_MINUTES / (60 * 24), 60 * 24),
        "week" => (MAX_RELATIVE_MINUTES / (60 * 24 * 7), 60 * 24 * 7),
        unit => bail!("Unknown time unit: {unit}"),
    };

    if n > max_for_unit {
        bail!("Relative time value too large: {n} {unit}");
    }

    // Safe to create Duration now that we've validated the range
    Ok(now + Duration::minutes(sign * n * minutes_per_unit))
}

/// Find an entry by full ID or unique ID prefix.
pub fn resolve_entry(repo: &EntryRepository, needle: &str) -> anyhow::Result<Entry> {
    let needle = needle.trim();
    if needle.is_empty() {
        bail!("entry ID cannot be empty");
    }

    let entries = repo.entries();
    if let Some(exact) = entries.iter().find(|e| e.id.as_str() == needle) {
        return Ok(exact.clone());
    }

    let mut matches = entries
        .into_iter()
        .filter(|e| e.id.as_str().starts_with(needle));
    match (matches.next(), matches.next()) {
        (Some(entry), None) => Ok(entry),
        (None, _) => bail!("entry not found: {needle}"),
        (Some(_), Some(_)) => bail!("entry ID prefix is ambiguous: {needle}"),
    }
}

/// Leading characters of an ID, for display.
pub fn short_id(entry: &Entry) -> &str {
    let id = entry.id.as_str();
    id.char_indices()
        .nth(SHORT_ID_LEN)
        .map_or(id, |(end, _)| &id[..end])
}
