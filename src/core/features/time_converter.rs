//! Time converter feature.
//!
//! Derives the fixed set of alternate representations from one resolved
//! timestamp. Every formatting call takes its target zone explicitly;
//! there is no process-global timezone state.

pub mod constants;
pub mod parsing;

use chrono::{DateTime, SecondsFormat};

use crate::core::feedback::Feedback;
use self::constants::{LONDON, SIMPLE_DATE_FORMAT};

/// Stable per-role row identifiers.
pub const ID_UNIX_SECONDS: &str = "time.unix-seconds";
pub const ID_EPOCH_MS: &str = "time.epoch-ms";
pub const ID_SIMPLE_UTC: &str = "time.simple-utc";
pub const ID_ISO_UTC: &str = "time.iso-utc";
pub const ID_SIMPLE_LONDON: &str = "time.simple-london";
pub const ID_ISO_LONDON: &str = "time.iso-london";

/// Append the six representations of `ts` to the feedback list, in display
/// order. Every row's title mirrors its argument payload. Timestamps
/// outside chrono's representable range record nothing.
pub fn record_representations(feedback: &mut Feedback, ts: i64) {
    let Some(utc) = DateTime::from_timestamp(ts, 0) else {
        return;
    };
    let london = utc.with_timezone(&LONDON);

    let unix = ts.to_string();
    feedback.record(ID_UNIX_SECONDS, unix.clone(), unix, "Unix timestamp (s)");

    let millis = (ts * 1000).to_string();
    feedback.record(ID_EPOCH_MS, millis.clone(), millis, "Epoch timestamp (ms)");

    let simple_utc = utc.format(SIMPLE_DATE_FORMAT).to_string();
    feedback.record(ID_SIMPLE_UTC, simple_utc.clone(), simple_utc, "Simple date (UTC)");

    // Trailing Z rather than a +00:00 suffix
    let iso_utc = utc.to_rfc3339_opts(SecondsFormat::Secs, true);
    feedback.record(ID_ISO_UTC, iso_utc.clone(), iso_utc, "ISO 8601 (UTC)");

    let simple_london = london.format(SIMPLE_DATE_FORMAT).to_string();
    feedback.record(
        ID_SIMPLE_LONDON,
        simple_london.clone(),
        simple_london,
        "Simple date (London)",
    );

    // London keeps its numeric offset, +00:00 in winter and +01:00 in BST
    let iso_london = london.to_rfc3339_opts(SecondsFormat::Secs, false);
    feedback.record(ID_ISO_LONDON, iso_london.clone(), iso_london, "ISO 8601 (London)");
}
