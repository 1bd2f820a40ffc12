use std::error::Error;

use serde::Serialize;
use serde_json::Value;

use super::ListCmd;
use crate::commands::entity::{for_entity, list_as};
use crate::commands::{EntityKind, Execute};
use crate::db::DatabaseBackend;

/// Result of the list command execution
#[derive(Debug, Serialize)]
pub struct ListResult {
    pub entity: EntityKind,
    pub limit: u32,
    pub records: Vec<Value>,
}

impl Execute for ListCmd {
    type Output = ListResult;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        let records = for_entity!(self.entity, list_as(db, self.limit))?;
        Ok(ListResult {
            entity: self.entity,
            limit: self.limit,
            records,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MRecord;
    use crate::queries;
    use crate::test_utils::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn test_list_empty() {
        let db = migrated_db();
        let result = ListCmd {
            entity: EntityKind::Magnet,
            limit: 100,
        }
        .execute(&db)
        .unwrap();
        assert!(result.records.is_empty());
    }

    #[rstest]
    fn test_list_in_id_order_with_limit() {
        let db = migrated_db();
        for name in ["ramp", "plateau", "ramp-down"] {
            queries::create::<MRecord>(&db, record(name, None)).unwrap();
        }

        let result = ListCmd {
            entity: EntityKind::MRecord,
            limit: 2,
        }
        .execute(&db)
        .unwrap();

        let ids: Vec<_> = result.records.iter().map(|r| r["id"].clone()).collect();
        assert_eq!(ids, vec![json!(1), json!(2)]);
        assert_eq!(result.records[1]["name"], json!("plateau"));
    }
}
