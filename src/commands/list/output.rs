//! Output formatting for list command results.

use super::execute::ListResult;
use crate::output::{row_summary, Outputable};

impl Outputable for ListResult {
    fn to_table(&self) -> String {
        let mut lines = vec![format!("{} ({})", self.entity, self.records.len()), String::new()];

        if self.records.is_empty() {
            lines.push("No results found.".to_string());
            return lines.join("\n");
        }

        for record in &self.records {
            lines.push(format!("  {}", row_summary(record)));
        }

        if self.records.len() as u32 == self.limit {
            lines.push(String::new());
            lines.push(format!("Showing the first {}; raise --limit for more.", self.limit));
        }

        lines.join("\n")
    }
}
