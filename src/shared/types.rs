use serde::{Deserialize, Serialize};

/// One row of the launcher result list.
///
/// `arg` is the payload handed back to the launcher when the row is
/// actioned; `title` and `subtitle` are display-only. Identifiers are
/// stable per row role so a consumer can address rows across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    pub id: String,
    pub arg: String,
    pub title: String,
    pub subtitle: String,
    pub valid: bool,
}
