//! Schema setup and versioning.
//!
//! - Schema version is derived from which relations exist
//! - Pending migrations run incrementally
//! - Migrations are idempotent (safe to run multiple times)

use tracing::{debug, info};

use crate::db::backend::DatabaseBackend;
use crate::db::schema::compilers::CozoCompiler;
use crate::db::schema::relations::find_relation;
use crate::db::DbError;

/// A set of relations created together under one version number.
///
/// Migrations are applied incrementally - only those with version > current_version
/// are executed. Each migration is idempotent.
#[derive(Debug)]
pub struct MigrationSet {
    /// Version number for this set
    pub version: u32,
    /// Human-readable description
    pub description: &'static str,
    /// Relations to create in this migration
    pub relations: &'static [&'static str],
}

/// All available migrations, indexed by version.
pub const MIGRATION_SETS: &[MigrationSet] = &[MigrationSet {
    version: 1,
    description: "Initial schema: entities, junctions and key sequence",
    relations: &[
        "id_sequence",
        "material",
        "msite",
        "magnet",
        "mpart",
        "mrecord",
        "mpart_magnet_link",
        "magnet_msite_link",
    ],
}];

/// Get the current schema version from the database.
///
/// A version counts as applied when every relation it creates exists.
/// Returns 0 for an empty database.
pub fn get_current_version(backend: &dyn DatabaseBackend) -> Result<u32, DbError> {
    let mut current = 0;
    for migration in MIGRATION_SETS {
        for relation in migration.relations {
            if !backend.relation_exists(relation)? {
                return Ok(current);
            }
        }
        current = migration.version;
    }
    Ok(current)
}

/// Run all pending migrations.
///
/// Determines the current schema version and applies all migrations with
/// version > current_version in order. Relations that already exist are
/// left untouched.
pub fn run_migrations(backend: &dyn DatabaseBackend) -> Result<u32, DbError> {
    let current_version = get_current_version(backend)?;

    let pending: Vec<_> = MIGRATION_SETS
        .iter()
        .filter(|m| m.version > current_version)
        .collect();

    if pending.is_empty() {
        debug!(version = current_version, "schema up to date");
        return Ok(current_version);
    }

    let mut version = current_version;
    for migration in pending {
        for relation_name in migration.relations {
            let relation = find_relation(relation_name).ok_or_else(|| DbError::UnknownRelation {
                name: relation_name.to_string(),
            })?;

            let ddl = CozoCompiler::compile_relation(relation);
            let created = backend.try_create_relation(&ddl)?;
            debug!(relation = relation.name, created, "ensured relation");
        }

        info!(
            version = migration.version,
            description = migration.description,
            "applied migration"
        );
        version = migration.version;
    }

    Ok(version)
}
