use std::error::Error;

use super::CreateCmd;
use crate::commands::entity::{create_as, for_entity, RecordAction, RecordResult};
use crate::commands::Execute;
use crate::db::DatabaseBackend;

impl Execute for CreateCmd {
    type Output = RecordResult;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        let record = for_entity!(self.entity, create_as(db, self.entity, &self.json))?;
        Ok(RecordResult {
            entity: self.entity,
            action: RecordAction::Created,
            record,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::EntityKind;
    use crate::test_utils::migrated_db;
    use serde_json::json;

    fn create(db: &dyn DatabaseBackend, entity: EntityKind, json: &str) -> RecordResult {
        CreateCmd {
            entity,
            json: json.to_string(),
        }
        .execute(db)
        .expect("Create should succeed")
    }

    #[test]
    fn test_create_msite() {
        let db = migrated_db();

        let result = create(
            &db,
            EntityKind::MSite,
            r#"{"name": "M10", "conffile": "M10.cfg", "status": "in_operation"}"#,
        );

        assert_eq!(result.action, RecordAction::Created);
        assert_eq!(result.record["id"], json!(1));
        assert_eq!(result.record["name"], json!("M10"));
    }

    #[test]
    fn test_create_material_fills_optional_zeros() {
        let db = migrated_db();

        let result = create(
            &db,
            EntityKind::Material,
            r#"{"name": "Cu", "Tref": 293, "VolumicMass": 9000, "SpecificHeat": 380,
                "ThermalConductivity": 360, "MagnetPermeability": 1, "Young": 117e9,
                "Poisson": 0.33, "CoefDilatation": 18e-6}"#,
        );

        assert_eq!(result.record["alpha"], json!(0.0));
        assert_eq!(result.record["ElectricalConductivity"], json!(0.0));
        assert_eq!(result.record["ref"], json!(null));
    }

    #[test]
    fn test_create_rejects_incomplete_payload() {
        let db = migrated_db();

        let err = CreateCmd {
            entity: EntityKind::Magnet,
            json: r#"{"name": "M9"}"#.to_string(),
        }
        .execute(&db)
        .unwrap_err();

        assert!(err.to_string().contains("Invalid magnet payload"));
    }

    #[test]
    fn test_create_mpart_with_missing_material_fails() {
        let db = migrated_db();

        let err = CreateCmd {
            entity: EntityKind::MPart,
            json: r#"{"name": "H1", "type": "Helix", "be": "b", "geom": "g", "status": "s", "material_id": 3}"#
                .to_string(),
        }
        .execute(&db)
        .unwrap_err();

        assert!(err.to_string().contains("Foreign key violation"));
    }
}
