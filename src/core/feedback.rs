//! Result list collector.
//!
//! Accumulates launcher rows in insertion order and serializes the whole
//! list once, at the end of the run. Append-only: no deduplication, no
//! mutation after a row is recorded, no removal.

use std::io::Write;

use crate::shared::error::AppResult;
use crate::shared::types::ResultItem;

#[derive(Debug, Default)]
pub struct Feedback {
    items: Vec<ResultItem>,
}

impl Feedback {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append one result row. Rows are displayed in the order recorded.
    pub fn record(&mut self, id: &str, arg: String, title: String, subtitle: &str) {
        self.items.push(ResultItem {
            id: id.to_string(),
            arg,
            title,
            subtitle: subtitle.to_string(),
            valid: true,
        });
    }

    pub fn items(&self) -> &[ResultItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Serialize the collected list as a JSON array and write it to `out`,
    /// followed by a newline. This is the run's single side-effecting step;
    /// nothing else writes to the output stream.
    pub fn finalize<W: Write>(&self, out: &mut W) -> AppResult<()> {
        serde_json::to_writer(&mut *out, &self.items)?;
        out.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_preserves_insertion_order() {
        let mut feedback = Feedback::new();
        feedback.record("a", "1".to_string(), "1".to_string(), "first");
        feedback.record("b", "2".to_string(), "2".to_string(), "second");
        feedback.record("a", "3".to_string(), "3".to_string(), "third");

        let ids: Vec<&str> = feedback.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "a"]);
    }

    #[test]
    fn test_recorded_rows_are_valid() {
        let mut feedback = Feedback::new();
        feedback.record("a", "1".to_string(), "1".to_string(), "first");
        assert!(feedback.items().iter().all(|i| i.valid));
    }

    #[test]
    fn test_finalize_writes_json_array() {
        let mut feedback = Feedback::new();
        feedback.record("a", "1".to_string(), "one".to_string(), "first");

        let mut buf = Vec::new();
        feedback.finalize(&mut buf).unwrap();
        assert_eq!(buf.last(), Some(&b'\n'));

        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["id"], "a");
        assert_eq!(rows[0]["arg"], "1");
        assert_eq!(rows[0]["title"], "one");
        assert_eq!(rows[0]["subtitle"], "first");
        assert_eq!(rows[0]["valid"], true);
    }

    #[test]
    fn test_empty_collector() {
        let feedback = Feedback::new();
        assert!(feedback.is_empty());
    }
}
