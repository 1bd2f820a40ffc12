//! Database backend trait for abstracting different database implementations.

use cozo::DataValue;

use super::value::DatabaseValue;
use super::DbError;

/// Result of a query execution.
///
/// Generic over value type to support different database backends.
/// Defaults to `cozo::DataValue` for the CozoDB backend.
#[derive(Debug, Clone)]
pub struct QueryResult<V: DatabaseValue = DataValue> {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<V>>,
}

/// Trait for database backends that can execute queries.
pub trait DatabaseBackend: Send + Sync {
    /// Execute a script with parameters, returning raw rows.
    ///
    /// Chained scripts (`{ ... } { ... }`) run in a single transaction.
    fn execute_query(&self, script: &str, params: &Params) -> Result<QueryResult, DbError>;

    /// Execute a script without parameters.
    fn execute_query_no_params(&self, script: &str) -> Result<QueryResult, DbError> {
        self.execute_query(script, &Params::new())
    }

    /// Get the backend name for logging/debugging.
    fn backend_name(&self) -> &'static str;

    /// Check if a relation (table) exists.
    fn relation_exists(&self, name: &str) -> Result<bool, DbError>;

    /// Create a relation if it doesn't exist.
    /// Returns true if created, false if already existed.
    fn try_create_relation(&self, schema: &str) -> Result<bool, DbError>;
}

/// Type alias for query parameters.
pub type Params = std::collections::BTreeMap<String, DataValue>;
