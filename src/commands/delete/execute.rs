use std::error::Error;

use super::DeleteCmd;
use crate::commands::entity::{delete_as, for_entity, RecordAction, RecordResult};
use crate::commands::Execute;
use crate::db::DatabaseBackend;

impl Execute for DeleteCmd {
    type Output = RecordResult;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        let record = for_entity!(self.entity, delete_as(db, self.id))?;
        Ok(RecordResult {
            entity: self.entity,
            action: RecordAction::Deleted,
            record,
        })
    }
}
