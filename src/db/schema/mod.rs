//! Backend-agnostic database schema definitions.
//!
//! Structured definitions for every stored relation, so that Cozo DDL, SQL DDL
//! and the store's CozoScript are all generated from a single source of truth.
//!
//! # Overview
//!
//! 1. **Core Types** (`definition.rs`):
//!    - `DataType` - String, Int, Float
//!    - `SchemaField` - column name, type, nullability, default
//!    - `ForeignKey` - a column that must reference another relation's key
//!    - `SchemaRelationship` - a many-to-many route through a junction relation
//!    - `SchemaRelation` - a complete relation with key and value fields
//!
//! 2. **Relation Definitions** (`relations.rs`):
//!    - `MATERIAL`, `MSITE`, `MAGNET`, `MPART`, `MRECORD`
//!    - `MPART_MAGNET_LINK`, `MAGNET_MSITE_LINK` junctions
//!    - `ID_SEQUENCE` for key allocation
//!
//! # Type Mapping
//!
//! | Rust Type | Cozo Type | SQL Type |
//! |-----------|-----------|----------|
//! | String | String | TEXT |
//! | i64 | Int | INTEGER |
//! | f64 | Float | REAL |

pub mod compilers;
mod definition;
pub mod migrations;
mod relations;

pub use definition::{DataType, ForeignKey, SchemaField, SchemaRelation, SchemaRelationship};
pub use relations::{
    find_relation, ALL_RELATIONS, ID_SEQUENCE, MAGNET, MAGNET_MPARTS, MAGNET_MSITES,
    MAGNET_MSITE_LINK, MATERIAL, MPART, MPART_MAGNETS, MPART_MAGNET_LINK, MRECORD, MSITE,
    MSITE_MAGNETS,
};
