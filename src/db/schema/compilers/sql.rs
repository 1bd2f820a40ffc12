//! SQL DDL compiler.
//!
//! Renders the schema as `CREATE TABLE` statements for an external relational
//! persistence layer: column types, nullability, defaults, primary keys
//! (composite for junction tables) and foreign-key references.

use crate::db::schema::definition::{SchemaField, SchemaRelation};

/// Compiler for generating SQL DDL from schema definitions.
pub struct SqlCompiler;

impl SqlCompiler {
    fn compile_column(field: &SchemaField) -> String {
        let mut column = format!("    {} {}", field.name, field.data_type.sql_type());
        if !field.nullable {
            column.push_str(" NOT NULL");
        }
        if let Some(default) = field.default {
            let default = if default == "null" { "NULL" } else { default };
            column.push_str(&format!(" DEFAULT {}", default));
        }
        column
    }

    /// Generate a `CREATE TABLE` statement for a single relation.
    ///
    /// ```sql
    /// CREATE TABLE IF NOT EXISTS mpart (
    ///     id INTEGER NOT NULL,
    ///     ...
    ///     material_id INTEGER DEFAULT NULL,
    ///     PRIMARY KEY (id),
    ///     FOREIGN KEY (material_id) REFERENCES material (id)
    /// );
    /// ```
    pub fn compile_table(relation: &SchemaRelation) -> String {
        let mut lines: Vec<String> = relation.all_fields().map(Self::compile_column).collect();

        let keys = relation
            .key_fields
            .iter()
            .map(|f| f.name)
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("    PRIMARY KEY ({})", keys));

        for fk in relation.foreign_keys {
            lines.push(format!(
                "    FOREIGN KEY ({}) REFERENCES {} ({})",
                fk.column, fk.target, fk.target_column
            ));
        }

        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n{}\n);",
            relation.name,
            lines.join(",\n")
        )
    }

    /// Generate DDL for all relations.
    pub fn compile_all(relations: &[&SchemaRelation]) -> Vec<String> {
        relations
            .iter()
            .map(|rel| Self::compile_table(rel))
            .collect()
    }
}
