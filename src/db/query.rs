//! Query execution utilities.

use super::backend::{DatabaseBackend, Params, QueryResult};
use super::DbError;

/// Run a script with parameters against any backend.
pub fn run_query(
    db: &dyn DatabaseBackend,
    script: &str,
    params: Params,
) -> Result<QueryResult, DbError> {
    db.execute_query(script, &params)
}

/// Run a script with no parameters
pub fn run_query_no_params(db: &dyn DatabaseBackend, script: &str) -> Result<QueryResult, DbError> {
    run_query(db, script, Params::new())
}

/// Try to create a relation, returning Ok(true) if created, Ok(false) if already exists
pub fn try_create_relation(db: &dyn DatabaseBackend, script: &str) -> Result<bool, DbError> {
    match run_query_no_params(db, script) {
        Ok(_) => Ok(true),
        Err(DbError::QueryFailed { message })
            if message.contains("AlreadyExists")
                || message.contains("stored_relation_conflict")
                || message.contains("already exists") =>
        {
            Ok(false)
        }
        Err(e) => Err(e),
    }
}
