//! time-palette: launcher time converter.
//!
//! Takes one free-text or numeric query ("last night", "25000", "") and
//! answers with a fixed list of alternate representations of the resolved
//! instant: Unix seconds, epoch milliseconds, and simple plus ISO 8601
//! date strings for UTC and Europe/London. The list is serialized as JSON
//! for a launcher UI; an unparseable query yields no output at all and the
//! launcher shows its own "no results" state.

pub mod core;
pub mod shared;

use std::io::Write;

use chrono::{DateTime, Utc};

use crate::core::features::time_converter;
use crate::core::feedback::Feedback;
use crate::shared::error::AppResult;

/// Run one query against the given clock anchor, writing the serialized
/// result list to `out`.
///
/// Returns `Ok(false)` without writing anything when the query cannot be
/// resolved to an instant; that is the expected "no results" outcome, not
/// an error. Only I/O and serialization faults surface as `Err`.
pub fn run<W: Write>(query: Option<&str>, now: DateTime<Utc>, out: &mut W) -> AppResult<bool> {
    let query = query.unwrap_or("");
    let Some(ts) = time_converter::parsing::resolve_timestamp(query, now) else {
        return Ok(false);
    };

    let mut feedback = Feedback::new();
    time_converter::record_representations(&mut feedback, ts);
    if feedback.is_empty() {
        return Ok(false);
    }

    feedback.finalize(out)?;
    Ok(true)
}
