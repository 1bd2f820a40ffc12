//! Output formatting for setup command results.

use super::execute::{RelationState, SetupResult};
use crate::output::Outputable;

impl Outputable for SetupResult {
    fn to_table(&self) -> String {
        let mut output = String::new();

        output.push_str("Database Setup\n\n");

        if self.dry_run {
            output.push_str("Schema creation (dry-run):\n");
        } else {
            output.push_str("Schema creation:\n");
        }

        for relation in &self.relations {
            let (symbol, status_text) = match relation.status {
                RelationState::Created => ("✓", "created"),
                RelationState::AlreadyExists => ("✓", "exists"),
                RelationState::WouldCreate => ("→", "would create"),
            };

            output.push_str(&format!("  {} {} ({})\n", symbol, relation.name, status_text));
        }

        if self.dry_run {
            output.push_str("\nNo changes made (dry-run mode).");
        } else if self.created_new {
            output.push_str(&format!("\nDatabase ready (schema v{}).", self.schema_version));
        } else {
            output.push_str(&format!(
                "\nDatabase already configured (schema v{}).",
                self.schema_version
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::setup::RelationStatus;

    #[test]
    fn test_setup_table_output() {
        let result = SetupResult {
            relations: vec![
                RelationStatus {
                    name: "material".to_string(),
                    status: RelationState::Created,
                },
                RelationStatus {
                    name: "magnet".to_string(),
                    status: RelationState::AlreadyExists,
                },
            ],
            schema_version: 1,
            created_new: true,
            dry_run: false,
        };

        assert_eq!(
            result.to_table(),
            "Database Setup\n\nSchema creation:\n  ✓ material (created)\n  ✓ magnet (exists)\n\nDatabase ready (schema v1)."
        );
    }
}
