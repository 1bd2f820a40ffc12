//! Output formatting for command results.
//!
//! Supports multiple output formats: table (human-readable), JSON, and toon.

use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Token-efficient toon format
    Toon,
}

/// Trait for types that can be formatted for output
pub trait Outputable: Serialize {
    /// Format as a human-readable table
    fn to_table(&self) -> String;

    /// Format according to the specified output format
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => self.to_table(),
            OutputFormat::Json => serde_json::to_string_pretty(self).unwrap_or_default(),
            OutputFormat::Toon => {
                let json_value = serde_json::to_value(self).unwrap_or_default();
                toon::encode(&json_value, None)
            }
        }
    }
}

/// Render a scalar JSON value for a table cell.
pub fn scalar(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// One-line summary of a stored row: `[id] name`.
pub fn row_summary(value: &Value) -> String {
    format!("[{}] {}", scalar(&value["id"]), scalar(&value["name"]))
}

/// `key: value` lines for an object, keys sorted, `id` first.
///
/// Arrays of rows (expanded relationships) are listed after the scalar
/// fields as `key (n):` followed by one summary line per row.
pub fn field_lines(value: &Value) -> Vec<String> {
    let Value::Object(map) = value else {
        return vec![scalar(value)];
    };

    let mut keys: Vec<&String> = map.keys().filter(|k| k.as_str() != "id").collect();
    keys.sort();

    let mut lines = Vec::new();
    if let Some(id) = map.get("id") {
        lines.push(format!("id: {}", scalar(id)));
    }

    let mut lists = Vec::new();
    for key in keys {
        match &map[key] {
            Value::Array(items) => lists.push((key, items)),
            other => lines.push(format!("{}: {}", key, scalar(other))),
        }
    }

    for (key, items) in lists {
        lines.push(format!("{} ({}):", key, items.len()));
        for item in items {
            lines.push(format!("  {}", row_summary(item)));
        }
    }

    lines
}
