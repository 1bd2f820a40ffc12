//! Core schema definition types.
//!
//! Provides a backend-agnostic type system for describing database schema.
//! These types form the foundation for both Cozo and SQL DDL generation.

/// Represents a database data type.
///
/// Maps to both Cozo and SQL type systems via `cozo_type()` and `sql_type()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// String/text data
    String,
    /// Integer data
    Int,
    /// Floating point data
    Float,
}

impl DataType {
    /// Returns the Cozo type name for this data type.
    pub fn cozo_type(&self) -> &'static str {
        match self {
            DataType::String => "String",
            DataType::Int => "Int",
            DataType::Float => "Float",
        }
    }

    /// Returns the SQL column type for this data type.
    pub fn sql_type(&self) -> &'static str {
        match self {
            DataType::String => "TEXT",
            DataType::Int => "INTEGER",
            DataType::Float => "REAL",
        }
    }
}

/// Represents a field in a schema relation.
#[derive(Debug, Clone)]
pub struct SchemaField {
    /// Storage column name (e.g., "name", "volumic_mass")
    pub name: &'static str,

    /// Field data type
    pub data_type: DataType,

    /// Whether the column accepts null
    pub nullable: bool,

    /// Default value as a literal valid in both Cozo and SQL. None means no default.
    pub default: Option<&'static str>,
}

/// A column that must reference an existing row of another relation.
#[derive(Debug, Clone)]
pub struct ForeignKey {
    /// Referencing column in this relation
    pub column: &'static str,

    /// Referenced relation name
    pub target: &'static str,

    /// Referenced key column
    pub target_column: &'static str,
}

/// A navigable many-to-many relationship routed through a junction relation.
///
/// The same junction is described from both ends: `Magnet.mparts` and
/// `MPart.magnets` both point at `mpart_magnet_link` with swapped columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaRelationship {
    /// Relationship name as exposed on the owner (e.g., "mparts")
    pub name: &'static str,

    /// Target relation name
    pub target: &'static str,

    /// Junction relation name
    pub link: &'static str,

    /// Junction column holding the owner's id
    pub source_column: &'static str,

    /// Junction column holding the target's id
    pub target_column: &'static str,
}

/// Represents a complete database relation/table.
#[derive(Debug, Clone)]
pub struct SchemaRelation {
    /// Relation name (e.g., "material", "mpart_magnet_link")
    pub name: &'static str,

    /// Fields that form the key (must be unique)
    pub key_fields: &'static [SchemaField],

    /// Fields that are associated values
    pub value_fields: &'static [SchemaField],

    /// Foreign-key constraints on this relation's columns
    pub foreign_keys: &'static [ForeignKey],

    /// Many-to-many relationships owned by this relation
    pub relationships: &'static [SchemaRelationship],
}

impl SchemaRelation {
    /// Returns all fields in this relation (key + value).
    pub fn all_fields(&self) -> impl Iterator<Item = &SchemaField> {
        self.key_fields.iter().chain(self.value_fields.iter())
    }

    /// Returns the total number of fields.
    pub fn field_count(&self) -> usize {
        self.key_fields.len() + self.value_fields.len()
    }

    /// Position of a column within `all_fields()`.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.all_fields().position(|f| f.name == column)
    }

    /// Junction relations have a composite key and carry no values.
    pub fn is_link(&self) -> bool {
        self.key_fields.len() > 1 && self.value_fields.is_empty()
    }

    /// Look up an owned relationship by name.
    pub fn relationship(&self, name: &str) -> Option<&SchemaRelationship> {
        self.relationships.iter().find(|r| r.name == name)
    }

    /// Comma-separated column list, keys first.
    pub fn column_list(&self) -> String {
        self.all_fields()
            .map(|f| f.name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
