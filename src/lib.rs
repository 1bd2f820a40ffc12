//! magnetdb library - asset tracking for a magnet lab
//!
//! Describes materials, magnet parts, magnets, sites and records with their
//! many-to-many links, and persists them in an embedded CozoDB store. The
//! same schema is exposed as Cozo and SQL DDL.

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod models;
pub mod output;
pub mod queries;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod test_utils;
