//! Database layer backed by CozoDB.
//!
//! This module provides the persistence side of the schema:
//! - Connection management (SQLite-backed or in-memory for tests)
//! - Backend selection from URLs, environment and config file
//! - Query execution with parameter binding
//! - Typed value extraction from result rows
//! - Schema definitions, DDL compilers and migrations
//!
//! # Architecture
//!
//! CozoDB is a Datalog database; every table of the asset schema is a stored
//! relation. Scripts are generated from the `schema` definitions and run with
//! `$param` bindings, so user data never gets spliced into script text.
//!
//! # Type Decisions
//!
//! **Why `i64` for keys?**
//! CozoDB returns all integers as `Num::Int(i64)`. Using `i64` throughout avoids
//! lossy conversions on the way in and out.

mod backend;
mod config;
mod connection;
mod query;
pub mod schema;
mod value;

pub use backend::{DatabaseBackend, Params, QueryResult};
pub use config::DatabaseConfig;
pub use connection::{open_db, CozoBackend};
#[cfg(test)]
pub use connection::open_mem_db;
pub use query::{run_query, run_query_no_params, try_create_relation};
pub use value::{
    float_value, int_value, opt_float_value, opt_int_value, opt_string_value, string_value,
    DatabaseValue, RowReader,
};

use thiserror::Error;

/// Database error types
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to open database '{path}': {message}")]
    OpenFailed { path: String, message: String },

    #[error("Query failed: {message}")]
    QueryFailed { message: String },

    #[error("Missing column '{name}' in query result")]
    MissingColumn { name: String },

    #[error("Column '{column}' of {relation} holds {found}, expected {expected}")]
    InvalidValue {
        relation: String,
        column: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{relation} with id {id} not found")]
    NotFound { relation: String, id: i64 },

    #[error("Foreign key violation: {relation}.{column} = {value} has no matching {target}")]
    ForeignKeyViolation {
        relation: String,
        column: String,
        target: String,
        value: i64,
    },

    #[error("{relation} with id {id} is still referenced by {referenced_by}.{column}")]
    StillReferenced {
        relation: String,
        id: i64,
        referenced_by: String,
        column: String,
    },

    #[error("Unique constraint violation on {relation}: key {key:?} already exists")]
    UniqueViolation { relation: String, key: Vec<i64> },

    #[error("Unknown relation: {name}")]
    UnknownRelation { name: String },
}
