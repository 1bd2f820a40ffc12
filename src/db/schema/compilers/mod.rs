//! Database schema compilers.
//!
//! Generates backend-specific DDL from backend-agnostic schema definitions.
//! `CozoCompiler` targets the embedded store; `SqlCompiler` renders the same
//! schema for a relational database.

pub mod cozo;
pub mod sql;

pub use cozo::CozoCompiler;
pub use sql::SqlCompiler;
