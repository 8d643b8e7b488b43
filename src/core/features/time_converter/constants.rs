//! Fixed tables for the time converter.

use chrono_tz::Tz;

/// Informal phrase rewrites applied before date parsing, in table order.
///
/// All occurrences of each phrase are replaced. Multi-word phrases are
/// listed before the single words they contain ("last night" before
/// "night", "tonight" before "night") so a later pass cannot degrade
/// "last night" into "last 9pm".
pub const PHRASE_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("bedtime", "10pm"),
    ("morning", "7am"),
    ("last night", "yesterday 9pm"),
    ("tonight", "today 9pm"),
    ("night", "9pm"),
    ("afternoon", "3pm"),
    ("last week", "-1 week"),
    ("next week", "+1 week"),
];

/// All-digit queries strictly above this value are taken as epoch seconds.
/// Heuristic cutoff, not a contract: anything smaller is more likely a
/// clock time or a year than a timestamp, so it falls through to the text
/// parser.
pub const RAW_EPOCH_THRESHOLD: i64 = 10_000;

/// The one non-UTC zone the converter reports.
pub const LONDON: Tz = chrono_tz::Europe::London;

/// Display format shared by both "simple date" rows.
pub const SIMPLE_DATE_FORMAT: &str = "%d-%m-%Y %H:%M:%S";
