//! Shared test utilities for query and execute tests.

use crate::db::schema::migrations::run_migrations;
use crate::db::{open_mem_db, CozoBackend};
use crate::models::{MPartBase, MRecordBase, MSiteBase, MagnetBase, MaterialBase};

/// Create an in-memory database with every relation in place.
pub fn migrated_db() -> CozoBackend {
    let db = open_mem_db();
    run_migrations(&db).expect("Migrations should succeed");
    db
}

// =============================================================================
// Payload fixtures
// =============================================================================

pub fn copper() -> MaterialBase {
    MaterialBase {
        name: "Cu5Ag".to_string(),
        tref: 293.0,
        volumic_mass: 9000.0,
        specific_heat: 380.0,
        alpha: Some(0.0),
        electrical_conductivity: Some(50e6),
        thermal_conductivity: 360.0,
        magnet_permeability: 1.0,
        young: 117e9,
        poisson: 0.33,
        coef_dilatation: 18e-6,
        reference: None,
    }
}

pub fn site(name: &str) -> MSiteBase {
    MSiteBase {
        name: name.to_string(),
        conffile: format!("{}.cfg", name),
        status: "in_operation".to_string(),
    }
}

pub fn magnet(name: &str) -> MagnetBase {
    MagnetBase {
        name: name.to_string(),
        be: format!("{}-be", name),
        geom: format!("{}.yaml", name),
        status: "in_study".to_string(),
    }
}

pub fn part(name: &str, material_id: Option<i64>) -> MPartBase {
    MPartBase {
        name: name.to_string(),
        part_type: "Helix".to_string(),
        be: format!("{}-be", name),
        geom: format!("{}.yaml", name),
        status: "in_study".to_string(),
        material_id,
    }
}

pub fn record(name: &str, msite_id: Option<i64>) -> MRecordBase {
    MRecordBase {
        timestamp: "2024-03-01T10:00:00".to_string(),
        name: name.to_string(),
        msite_id,
    }
}
