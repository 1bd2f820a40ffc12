//! Cozo Datalog compiler.
//!
//! Generates Cozo DDL (`:create relation { ... }`) and the parameterized
//! CozoScript used by the store from backend-agnostic schema definitions.
//! Output is deterministic so it can be asserted on directly.

use crate::db::schema::definition::{SchemaField, SchemaRelation, SchemaRelationship};

/// Compiler for generating Cozo Datalog from schema definitions.
pub struct CozoCompiler;

fn names(fields: &[SchemaField]) -> String {
    fields.iter().map(|f| f.name).collect::<Vec<_>>().join(", ")
}

/// `{ k1, k2 => v1, v2 }`, or `{ k1, k2 }` when the relation has no values.
fn spec(relation: &SchemaRelation) -> String {
    if relation.value_fields.is_empty() {
        format!("{{ {} }}", names(relation.key_fields))
    } else {
        format!(
            "{{ {} => {} }}",
            names(relation.key_fields),
            names(relation.value_fields)
        )
    }
}

impl CozoCompiler {
    fn compile_field(field: &SchemaField) -> String {
        let nullable = if field.nullable { "?" } else { "" };
        match field.default {
            Some(default) => format!(
                "    {}: {}{} default {}",
                field.name,
                field.data_type.cozo_type(),
                nullable,
                default
            ),
            None => format!("    {}: {}{}", field.name, field.data_type.cozo_type(), nullable),
        }
    }

    /// Generate Cozo DDL for a single relation.
    ///
    /// Produces output in the format:
    /// ```cozo
    /// :create relation_name {
    ///     key_field1: Type1,
    ///     key_field2: Type2
    ///     =>
    ///     value_field1: Type1? default 0.0,
    ///     value_field2: Type2
    /// }
    /// ```
    /// Junction relations have no `=>` section.
    pub fn compile_relation(relation: &SchemaRelation) -> String {
        let key_fields = relation
            .key_fields
            .iter()
            .map(Self::compile_field)
            .collect::<Vec<_>>()
            .join(",\n");

        if relation.value_fields.is_empty() {
            return format!(":create {} {{\n{}\n}}", relation.name, key_fields);
        }

        let value_fields = relation
            .value_fields
            .iter()
            .map(Self::compile_field)
            .collect::<Vec<_>>()
            .join(",\n");

        format!(
            ":create {} {{\n{}\n    =>\n{}\n}}",
            relation.name, key_fields, value_fields
        )
    }

    /// Generate DDL for all relations.
    pub fn compile_all(relations: &[&SchemaRelation]) -> Vec<String> {
        relations
            .iter()
            .map(|rel| Self::compile_relation(rel))
            .collect()
    }

    /// Generate a `:put` of full rows bound to `$<param>`.
    ///
    /// ```cozo
    /// ?[id, name, conffile, status] <- $rows
    /// :put msite { id => name, conffile, status }
    /// ```
    pub fn compile_put(relation: &SchemaRelation, param: &str) -> String {
        format!(
            "?[{}] <- ${}\n:put {} {}",
            relation.column_list(),
            param,
            relation.name,
            spec(relation)
        )
    }

    /// Like [`compile_put`](Self::compile_put) but with `:insert`, which
    /// fails instead of overwriting when a key already exists.
    pub fn compile_insert(relation: &SchemaRelation, param: &str) -> String {
        format!(
            "?[{}] <- ${}\n:insert {} {}",
            relation.column_list(),
            param,
            relation.name,
            spec(relation)
        )
    }

    /// Bump the `id_sequence` entry named by `$<param>`, starting at 1.
    ///
    /// ```cozo
    /// ?[relation_name, max(last_id)] := *id_sequence{relation_name, last_id: prev},
    ///     relation_name == $name, last_id = prev + 1
    /// ?[relation_name, max(last_id)] := relation_name = $name, last_id = 1
    /// :put id_sequence { relation_name => last_id }
    /// ```
    pub fn compile_advance_sequence(param: &str) -> String {
        format!(
            "?[relation_name, max(last_id)] := *id_sequence{{relation_name, last_id: prev}}, \
             relation_name == ${p}, last_id = prev + 1\n\
             ?[relation_name, max(last_id)] := relation_name = ${p}, last_id = 1\n\
             :put id_sequence {{ relation_name => last_id }}",
            p = param
        )
    }

    /// Insert one row of `relation` whose key is the current `id_sequence`
    /// value for `$<name_param>` and whose value columns come from
    /// `$<fields_param>`. Meant to run right after
    /// [`compile_advance_sequence`](Self::compile_advance_sequence) in the
    /// same chain.
    pub fn compile_insert_next(relation: &SchemaRelation, name_param: &str, fields_param: &str) -> String {
        let values = names(relation.value_fields);
        format!(
            "input[{v}] <- ${f}\n\
             ?[{cols}] := *id_sequence{{relation_name, last_id: {key}}}, \
             relation_name == ${n}, input[{v}]\n\
             :insert {rel} {spec}",
            v = values,
            f = fields_param,
            cols = relation.column_list(),
            key = names(relation.key_fields),
            n = name_param,
            rel = relation.name,
            spec = spec(relation)
        )
    }

    /// Read the `id_sequence` row for `$<param>`.
    pub fn compile_current_id(param: &str) -> String {
        format!(
            "?[relation_name, last_id] := *id_sequence{{relation_name, last_id}}, relation_name == ${}",
            param
        )
    }

    /// Generate a `:rm` of the key tuples bound to `$<param>`.
    pub fn compile_rm(relation: &SchemaRelation, param: &str) -> String {
        let keys = names(relation.key_fields);
        format!(
            "?[{}] <- ${}\n:rm {} {{ {} }}",
            keys, param, relation.name, keys
        )
    }

    /// Generate a `:rm` of every row whose `column` equals `$<param>`.
    pub fn compile_rm_where(relation: &SchemaRelation, column: &str, param: &str) -> String {
        let keys = names(relation.key_fields);
        format!(
            "?[{}] := *{}{{{}}}, {} == ${}\n:rm {} {{ {} }}",
            keys,
            relation.name,
            relation.column_list(),
            column,
            param,
            relation.name,
            keys
        )
    }

    /// Select full rows whose `column` equals `$<param>`, ordered by key.
    pub fn compile_select_where(relation: &SchemaRelation, column: &str, param: &str) -> String {
        let columns = relation.column_list();
        format!(
            "?[{}] := *{}{{{}}}, {} == ${}\n:order {}",
            columns,
            relation.name,
            columns,
            column,
            param,
            names(relation.key_fields)
        )
    }

    /// Select up to `limit` full rows, ordered by key.
    pub fn compile_select_all(relation: &SchemaRelation, limit: u32) -> String {
        let columns = relation.column_list();
        format!(
            "?[{}] := *{}{{{}}}\n:order {}\n:limit {}",
            columns,
            relation.name,
            columns,
            names(relation.key_fields),
            limit
        )
    }

    /// Select the full rows of `target` linked to the owner id `$<param>`
    /// through a many-to-many relationship.
    ///
    /// ```cozo
    /// ?[id, name, ...] := *mpart_magnet_link{magnet_id: owner_id, mpart_id: id},
    ///     owner_id == $owner, *mpart{id, name, ...}
    /// :order id
    /// ```
    pub fn compile_select_linked(
        relationship: &SchemaRelationship,
        target: &SchemaRelation,
        param: &str,
    ) -> String {
        let columns = target.column_list();
        let key = names(target.key_fields);
        format!(
            "?[{}] := *{}{{{}: owner_id, {}: {}}}, owner_id == ${}, *{}{{{}}}\n:order {}",
            columns,
            relationship.link,
            relationship.source_column,
            relationship.target_column,
            key,
            param,
            target.name,
            columns,
            key
        )
    }

    /// Wrap several scripts into one chained script that runs in a single
    /// transaction.
    pub fn chain(blocks: &[String]) -> String {
        blocks
            .iter()
            .map(|b| format!("{{\n{}\n}}", b))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::relations::*;

    /// Helper to normalize whitespace for comparison.
    fn normalize_whitespace(s: &str) -> String {
        s.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_msite_compilation() {
        let compiled = CozoCompiler::compile_relation(&MSITE);
        let expected = r#"
            :create msite {
                id: Int
                =>
                name: String,
                conffile: String,
                status: String
            }
        "#;
        assert_eq!(normalize_whitespace(&compiled), normalize_whitespace(expected));
    }

    #[test]
    fn test_material_optional_columns() {
        let compiled = CozoCompiler::compile_relation(&MATERIAL);

        assert!(compiled.contains(":create material"));
        assert!(compiled.contains("tref: Float,"));
        assert!(compiled.contains("alpha: Float? default 0.0"));
        assert!(compiled.contains("electrical_conductivity: Float? default 0.0"));
        assert!(compiled.contains("reference: String? default null"));
        assert!(compiled.contains("=>"));
    }

    #[test]
    fn test_mpart_foreign_key_column_is_nullable() {
        let compiled = CozoCompiler::compile_relation(&MPART);
        assert!(compiled.contains("material_id: Int? default null"));
        assert!(compiled.contains("part_type: String"));
    }

    #[test]
    fn test_link_has_composite_key_and_no_values() {
        let compiled = CozoCompiler::compile_relation(&MPART_MAGNET_LINK);
        let expected = ":create mpart_magnet_link { magnet_id: Int, mpart_id: Int }";
        assert_eq!(normalize_whitespace(&compiled), expected);
        assert!(!compiled.contains("=>"));
    }

    #[test]
    fn test_compile_all() {
        let compiled = CozoCompiler::compile_all(ALL_RELATIONS);
        assert_eq!(compiled.len(), ALL_RELATIONS.len());
        for (ddl, relation) in compiled.iter().zip(ALL_RELATIONS) {
            assert!(ddl.starts_with(&format!(":create {} {{", relation.name)));
            assert!(ddl.ends_with('}'));
        }
    }

    #[test]
    fn test_compile_put() {
        let script = CozoCompiler::compile_put(&MSITE, "rows");
        assert_eq!(
            script,
            "?[id, name, conffile, status] <- $rows\n:put msite { id => name, conffile, status }"
        );
    }

    #[test]
    fn test_compile_put_link() {
        let script = CozoCompiler::compile_put(&MAGNET_MSITE_LINK, "links");
        assert_eq!(
            script,
            "?[magnet_id, msite_id] <- $links\n:put magnet_msite_link { magnet_id, msite_id }"
        );
    }

    #[test]
    fn test_compile_insert_link() {
        let script = CozoCompiler::compile_insert(&MPART_MAGNET_LINK, "rows");
        assert_eq!(
            script,
            "?[magnet_id, mpart_id] <- $rows\n:insert mpart_magnet_link { magnet_id, mpart_id }"
        );
    }

    #[test]
    fn test_compile_advance_sequence() {
        let script = CozoCompiler::compile_advance_sequence("name");
        assert!(script.contains("relation_name == $name, last_id = prev + 1"));
        assert!(script.contains("relation_name = $name, last_id = 1"));
        assert!(script.ends_with(":put id_sequence { relation_name => last_id }"));
    }

    #[test]
    fn test_compile_insert_next() {
        let script = CozoCompiler::compile_insert_next(&MSITE, "name", "fields");
        assert_eq!(
            normalize_whitespace(&script),
            "input[name, conffile, status] <- $fields \
             ?[id, name, conffile, status] := *id_sequence{relation_name, last_id: id}, \
             relation_name == $name, input[name, conffile, status] \
             :insert msite { id => name, conffile, status }"
        );
    }

    #[test]
    fn test_compile_current_id() {
        assert_eq!(
            CozoCompiler::compile_current_id("name"),
            "?[relation_name, last_id] := *id_sequence{relation_name, last_id}, relation_name == $name"
        );
    }

    #[test]
    fn test_compile_rm() {
        let script = CozoCompiler::compile_rm(&MAGNET, "keys");
        assert_eq!(script, "?[id] <- $keys\n:rm magnet { id }");
    }

    #[test]
    fn test_compile_rm_where() {
        let script = CozoCompiler::compile_rm_where(&MPART_MAGNET_LINK, "magnet_id", "owner");
        assert_eq!(
            script,
            "?[magnet_id, mpart_id] := *mpart_magnet_link{magnet_id, mpart_id}, magnet_id == $owner\n\
             :rm mpart_magnet_link { magnet_id, mpart_id }"
        );
    }

    #[test]
    fn test_compile_select_where() {
        let script = CozoCompiler::compile_select_where(&MRECORD, "id", "id");
        assert_eq!(
            script,
            "?[id, timestamp, name, msite_id] := *mrecord{id, timestamp, name, msite_id}, id == $id\n:order id"
        );
    }

    #[test]
    fn test_compile_select_all() {
        let script = CozoCompiler::compile_select_all(&MAGNET, 10);
        assert!(script.starts_with("?[id, name, be, geom, status] := *magnet{id, name, be, geom, status}"));
        assert!(script.ends_with(":order id\n:limit 10"));
    }

    #[test]
    fn test_compile_select_linked() {
        let rel = MAGNET.relationship("msites").unwrap();
        let script = CozoCompiler::compile_select_linked(rel, &MSITE, "owner");
        assert_eq!(
            script,
            "?[id, name, conffile, status] := *magnet_msite_link{magnet_id: owner_id, msite_id: id}, \
             owner_id == $owner, *msite{id, name, conffile, status}\n:order id"
        );
    }

    #[test]
    fn test_chain_wraps_blocks() {
        let chained = CozoCompiler::chain(&["?[a] <- [[1]]".to_string(), "?[b] <- [[2]]".to_string()]);
        assert_eq!(chained, "{\n?[a] <- [[1]]\n}\n{\n?[b] <- [[2]]\n}");
    }
}
