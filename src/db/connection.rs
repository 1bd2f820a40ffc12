//! Database connection management.

use std::path::Path;

use cozo::{DbInstance, ScriptMutability};
use tracing::trace;

use super::backend::{DatabaseBackend, Params, QueryResult};
use super::value::DatabaseValue;
use super::DbError;

/// CozoDB instance behind the `DatabaseBackend` trait.
pub struct CozoBackend {
    db: DbInstance,
    name: &'static str,
}

impl CozoBackend {
    /// Open a CozoDB database backed by SQLite storage.
    pub fn open_sqlite(path: &Path) -> Result<Self, DbError> {
        let db = DbInstance::new("sqlite", path, "").map_err(|e| DbError::OpenFailed {
            path: path.display().to_string(),
            message: format!("{:?}", e),
        })?;
        Ok(Self {
            db,
            name: "CozoSqlite",
        })
    }

    /// Open an in-memory CozoDB database.
    pub fn open_mem() -> Result<Self, DbError> {
        let db = DbInstance::new("mem", "", "").map_err(|e| DbError::OpenFailed {
            path: ":memory:".to_string(),
            message: format!("{:?}", e),
        })?;
        Ok(Self { db, name: "CozoMem" })
    }
}

impl DatabaseBackend for CozoBackend {
    fn execute_query(&self, script: &str, params: &Params) -> Result<QueryResult, DbError> {
        trace!(backend = self.name, script, "run script");
        let rows = self
            .db
            .run_script(script, params.clone(), ScriptMutability::Mutable)
            .map_err(|e| DbError::QueryFailed {
                message: format!("{:?}", e),
            })?;
        Ok(QueryResult {
            headers: rows.headers,
            rows: rows.rows,
        })
    }

    fn backend_name(&self) -> &'static str {
        self.name
    }

    fn relation_exists(&self, name: &str) -> Result<bool, DbError> {
        let result = self.execute_query_no_params("::relations")?;
        Ok(result
            .rows
            .iter()
            .any(|row| row.first().and_then(|v| v.as_string()).as_deref() == Some(name)))
    }

    fn try_create_relation(&self, schema: &str) -> Result<bool, DbError> {
        super::query::try_create_relation(self, schema)
    }
}

/// Open a CozoDB database backed by SQLite storage.
pub fn open_db(path: &Path) -> Result<CozoBackend, DbError> {
    CozoBackend::open_sqlite(path)
}

/// Create an in-memory database instance.
///
/// Used for tests to avoid disk I/O and temp file management.
#[cfg(test)]
pub fn open_mem_db() -> CozoBackend {
    CozoBackend::open_mem().expect("Failed to create in-memory DB")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_mem() {
        let backend = open_mem_db();
        assert_eq!(backend.backend_name(), "CozoMem");
    }

    #[test]
    fn test_open_sqlite() {
        let dir = tempfile::tempdir().unwrap();
        let backend = open_db(&dir.path().join("magnets.sqlite")).unwrap();
        assert_eq!(backend.backend_name(), "CozoSqlite");
    }

    #[test]
    fn test_relation_exists_after_create() {
        let backend = open_mem_db();
        assert!(!backend.relation_exists("scratch").unwrap());

        backend
            .execute_query_no_params(":create scratch { id: Int => label: String }")
            .unwrap();

        assert!(backend.relation_exists("scratch").unwrap());
        assert!(!backend.relation_exists("prob").unwrap());
    }

    #[test]
    fn test_query_error_is_reported() {
        let backend = open_mem_db();
        let err = backend.execute_query_no_params("?[x] := *missing{x}").unwrap_err();
        assert!(matches!(err, DbError::QueryFailed { .. }));
    }
}
