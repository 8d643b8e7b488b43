//! Feature modules.
//!
//! One feature today: the time converter driven by the launcher query
//! pipeline. Each feature owns its constants and parsing helpers.

pub mod time_converter;
