use std::error::Error;

use super::UpdateCmd;
use crate::commands::entity::{for_entity, update_as, RecordAction, RecordResult};
use crate::commands::Execute;
use crate::db::DatabaseBackend;

impl Execute for UpdateCmd {
    type Output = RecordResult;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        let record = for_entity!(self.entity, update_as(db, self.entity, self.id, &self.json))?;
        Ok(RecordResult {
            entity: self.entity,
            action: RecordAction::Updated,
            record,
        })
    }
}
