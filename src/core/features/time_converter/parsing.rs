//! Query normalization and parsing.
//!
//! Rewrites informal phrases into forms a date parser accepts, short-cuts
//! raw epoch input, and resolves everything else against an injected UTC
//! anchor so callers (and tests) control the clock.

use std::sync::OnceLock;

use chrono::{DateTime, Duration, Months, NaiveTime, TimeZone, Utc};
use chrono_english::{parse_date_string, Dialect};
use regex::Regex;

use super::constants::{PHRASE_SUBSTITUTIONS, RAW_EPOCH_THRESHOLD};

/// Static regex patterns using OnceLock
static OFFSET_REGEX: OnceLock<Regex> = OnceLock::new();
static CLOCK_REGEX: OnceLock<Regex> = OnceLock::new();

fn offset_regex() -> &'static Regex {
    OFFSET_REGEX.get_or_init(|| {
        Regex::new(r"^([+-])\s*(\d+)\s*(second|minute|hour|day|week|month|year)s?$").unwrap()
    })
}

fn clock_regex() -> &'static Regex {
    CLOCK_REGEX.get_or_init(|| {
        Regex::new(r"^(\d{1,2})(?::(\d{2}))?(?::(\d{2}))?\s*(am|pm)?$").unwrap()
    })
}

/// Resolve a raw query to epoch seconds (UTC).
///
/// Empty input means "now". All-digit input above the raw-epoch threshold
/// is already a timestamp and bypasses text parsing entirely. Everything
/// else is normalized through the phrase table and parsed relative to the
/// anchor. `None` means the text cannot be understood as a date; the run
/// is expected to end with no output in that case.
pub fn resolve_timestamp(query: &str, now: DateTime<Utc>) -> Option<i64> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Some(now.timestamp());
    }

    if let Some(epoch) = parse_raw_epoch(trimmed) {
        return Some(epoch);
    }

    let normalized = normalize_query(trimmed);
    parse_normalized(&normalized, now).map(|dt| dt.timestamp())
}

/// All-digit input strictly above the threshold is an epoch value.
/// Values chrono cannot represent are rejected so the formatting step
/// never sees an out-of-range timestamp.
fn parse_raw_epoch(query: &str) -> Option<i64> {
    if query.is_empty() || !query.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value = query.parse::<i64>().ok()?;
    if value <= RAW_EPOCH_THRESHOLD {
        return None;
    }
    DateTime::from_timestamp(value, 0).map(|_| value)
}

/// Apply the phrase table in order, replacing every occurrence.
/// Matching is case-sensitive literal substring replacement.
pub fn normalize_query(query: &str) -> String {
    let mut normalized = query.to_string();
    for (phrase, replacement) in PHRASE_SUBSTITUTIONS {
        normalized = normalized.replace(phrase, replacement);
    }
    normalized
}

/// Parse a normalized query against the anchor. Signed offsets and
/// day-word times are resolved exactly; the rest goes to the
/// natural-language parser.
fn parse_normalized(input: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Some(dt) = parse_signed_offset(input, now) {
        return Some(dt);
    }
    if let Some(dt) = parse_day_word(input, now) {
        return Some(dt);
    }
    if let Some(time) = parse_clock_time(input) {
        return Some(Utc.from_utc_datetime(&now.date_naive().and_time(time)));
    }

    parse_date_string(input, now, Dialect::Us).ok()
}

/// `+N unit` / `-N unit` relative offsets ("-1 week", "+3 days").
/// Month and year steps are calendar-aware; the rest are fixed-length.
fn parse_signed_offset(input: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let caps = offset_regex().captures(input)?;
    let negative = &caps[1] == "-";
    let count: u32 = caps[2].parse().ok()?;
    let unit = &caps[3];

    if unit == "month" || unit == "year" {
        let months = if unit == "year" {
            count.checked_mul(12)?
        } else {
            count
        };
        return if negative {
            now.checked_sub_months(Months::new(months))
        } else {
            now.checked_add_months(Months::new(months))
        };
    }

    let seconds_per: i64 = match unit {
        "second" => 1,
        "minute" => 60,
        "hour" => 3_600,
        "day" => 86_400,
        "week" => 604_800,
        _ => return None,
    };
    let span = Duration::seconds(i64::from(count).checked_mul(seconds_per)?);
    if negative {
        now.checked_sub_signed(span)
    } else {
        now.checked_add_signed(span)
    }
}

/// `today`/`tomorrow`/`yesterday` followed by an explicit clock time,
/// resolved on the anchor's UTC calendar day. Bare day words are left to
/// the natural-language parser.
fn parse_day_word(input: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let (day_word, rest) = input.split_once(' ')?;
    let day_offset = match day_word {
        "today" => 0,
        "tomorrow" => 1,
        "yesterday" => -1,
        _ => return None,
    };
    let time = parse_clock_time(rest.trim())?;
    let date = now
        .date_naive()
        .checked_add_signed(Duration::days(day_offset))?;
    Some(Utc.from_utc_datetime(&date.and_time(time)))
}

/// Clock times in the forms the phrase table emits: "9pm", "10:30am",
/// "21:15", "21:15:40". A bare number without a colon or meridiem is not a
/// clock time.
fn parse_clock_time(input: &str) -> Option<NaiveTime> {
    let caps = clock_regex().captures(input)?;
    if caps.get(2).is_none() && caps.get(4).is_none() {
        return None;
    }

    let mut hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    let second: u32 = match caps.get(3) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };

    match caps.get(4).map(|m| m.as_str()) {
        Some("pm") if hour < 12 => hour += 12,
        Some("am") if hour == 12 => hour = 0,
        _ => {}
    }

    NaiveTime::from_hms_opt(hour, minute, second)
}
