use std::error::Error;

use serde_json::Value;

use super::GetCmd;
use crate::commands::entity::{for_entity, get_as, RecordAction, RecordResult};
use crate::commands::{EntityKind, Execute};
use crate::db::DatabaseBackend;
use crate::queries;

fn expanded(
    db: &dyn DatabaseBackend,
    entity: EntityKind,
    id: i64,
    relationship: &str,
) -> Result<Value, Box<dyn Error>> {
    let value = match (entity, relationship) {
        (EntityKind::Magnet, "mparts") => serde_json::to_value(queries::magnet_with_mparts(db, id)?)?,
        (EntityKind::Magnet, "msites") => serde_json::to_value(queries::magnet_with_msites(db, id)?)?,
        (EntityKind::MSite, "magnets") => serde_json::to_value(queries::msite_with_magnets(db, id)?)?,
        (EntityKind::MPart, "magnets") => serde_json::to_value(queries::mpart_with_magnets(db, id)?)?,
        _ => {
            let available: Vec<_> = entity
                .relation()
                .relationships
                .iter()
                .map(|r| r.name)
                .collect();
            let message = if available.is_empty() {
                format!("{} has no related collections", entity)
            } else {
                format!(
                    "{} has no relationship '{}' (available: {})",
                    entity,
                    relationship,
                    available.join(", ")
                )
            };
            return Err(message.into());
        }
    };
    Ok(value)
}

impl Execute for GetCmd {
    type Output = RecordResult;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        let record = match &self.with {
            Some(relationship) => expanded(db, self.entity, self.id, relationship)?,
            None => for_entity!(self.entity, get_as(db, self.id))?,
        };
        Ok(RecordResult {
            entity: self.entity,
            action: RecordAction::Fetched,
            record,
        })
    }
}
