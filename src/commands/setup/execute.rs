use std::error::Error;

use serde::Serialize;

use super::SetupCmd;
use crate::commands::Execute;
use crate::db::schema::migrations::{get_current_version, run_migrations};
use crate::db::schema::ALL_RELATIONS;
use crate::db::DatabaseBackend;

/// Status of a database relation (table)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum RelationState {
    #[serde(rename = "created")]
    Created,
    #[serde(rename = "exists")]
    AlreadyExists,
    #[serde(rename = "would_create")]
    WouldCreate,
}

/// Status information for a single database relation
#[derive(Debug, Clone, Serialize)]
pub struct RelationStatus {
    pub name: String,
    pub status: RelationState,
}

/// Result of the setup command execution
#[derive(Debug, Serialize)]
pub struct SetupResult {
    pub relations: Vec<RelationStatus>,
    pub schema_version: u32,
    pub created_new: bool,
    pub dry_run: bool,
}

impl Execute for SetupCmd {
    type Output = SetupResult;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        let mut existing = Vec::new();
        for relation in ALL_RELATIONS {
            existing.push(db.relation_exists(relation.name)?);
        }

        let schema_version = if self.dry_run {
            get_current_version(db)?
        } else {
            run_migrations(db)?
        };

        let relations: Vec<RelationStatus> = ALL_RELATIONS
            .iter()
            .zip(existing)
            .map(|(relation, existed)| {
                let status = match (existed, self.dry_run) {
                    (true, _) => RelationState::AlreadyExists,
                    (false, true) => RelationState::WouldCreate,
                    (false, false) => RelationState::Created,
                };
                RelationStatus {
                    name: relation.name.to_string(),
                    status,
                }
            })
            .collect();

        let created_new = relations
            .iter()
            .any(|r| r.status == RelationState::Created);

        Ok(SetupResult {
            relations,
            schema_version,
            created_new,
            dry_run: self.dry_run,
        })
    }
}
