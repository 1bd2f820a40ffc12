//! Create, read, update and delete for every entity relation.
//!
//! Constraint checks run before any write: keys must exist for updates and
//! deletes, foreign-key columns must point at stored rows, and a row that is
//! still referenced by another entity cannot be deleted. Each write is a
//! single chained script so it lands in one transaction.

use cozo::DataValue;
use tracing::{debug, info};

use super::entity::{Entity, LinkSet};
use crate::db::schema::compilers::CozoCompiler;
use crate::db::schema::{find_relation, SchemaRelation, ALL_RELATIONS, ID_SEQUENCE};
use crate::db::{int_value, string_value, DatabaseBackend, DbError, Params, RowReader};

/// Upper bound for `list`; mirrors the CLI's `--limit` range.
pub const MAX_LIST_LIMIT: u32 = 1000;

pub(crate) fn rows_param(rows: Vec<Vec<DataValue>>) -> DataValue {
    DataValue::List(rows.into_iter().map(DataValue::List).collect())
}

pub(crate) fn single_param(name: &str, value: DataValue) -> Params {
    let mut params = Params::new();
    params.insert(name.to_string(), value);
    params
}

fn unknown_relation(name: &str) -> DbError {
    DbError::UnknownRelation {
        name: name.to_string(),
    }
}

/// Whether `relation` holds a row whose key column `column` equals `id`.
pub(crate) fn row_exists(
    db: &dyn DatabaseBackend,
    relation: &SchemaRelation,
    column: &str,
    id: i64,
) -> Result<bool, DbError> {
    let script = CozoCompiler::compile_select_where(relation, column, "id");
    let result = db.execute_query(&script, &single_param("id", int_value(id)))?;
    Ok(!result.rows.is_empty())
}

/// Check every foreign-key column of `row`. Null references are allowed.
pub(crate) fn check_foreign_keys(
    db: &dyn DatabaseBackend,
    relation: &SchemaRelation,
    row: &[DataValue],
) -> Result<(), DbError> {
    for fk in relation.foreign_keys {
        let reader = RowReader::new(relation, row);
        let Some(value) = reader.opt_int(fk.column)? else {
            continue;
        };
        let target = find_relation(fk.target).ok_or_else(|| unknown_relation(fk.target))?;
        if !row_exists(db, target, fk.target_column, value)? {
            return Err(DbError::ForeignKeyViolation {
                relation: relation.name.to_string(),
                column: fk.column.to_string(),
                target: fk.target.to_string(),
                value,
            });
        }
    }
    Ok(())
}

/// Insert a new entity under a freshly allocated key.
///
/// The sequence bump, the row insert and the key read-back run as one
/// chained script, so concurrent creates never share a key. The row is
/// written with `:insert`, which refuses to overwrite an existing key.
pub fn create<E: Entity>(db: &dyn DatabaseBackend, input: E::Create) -> Result<E, DbError> {
    let relation = E::RELATION;
    let mut row = E::from_create(0, input).to_row();
    check_foreign_keys(db, relation, &row)?;

    let key_index = relation
        .all_fields()
        .position(|f| f.name == "id")
        .ok_or_else(|| DbError::MissingColumn {
            name: "id".to_string(),
        })?;
    let fields: Vec<DataValue> = row
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != key_index)
        .map(|(_, v)| v.clone())
        .collect();

    let script = CozoCompiler::chain(&[
        CozoCompiler::compile_advance_sequence("name"),
        CozoCompiler::compile_insert_next(relation, "name", "fields"),
        CozoCompiler::compile_current_id("name"),
    ]);
    let mut params = Params::new();
    params.insert("name".to_string(), string_value(relation.name));
    params.insert("fields".to_string(), rows_param(vec![fields]));
    let result = db.execute_query(&script, &params)?;

    let id = match result.rows.first() {
        Some(allocated) => RowReader::new(&ID_SEQUENCE, allocated).int("last_id")?,
        None => {
            return Err(DbError::MissingColumn {
                name: "last_id".to_string(),
            })
        }
    };
    row[key_index] = int_value(id);

    info!(relation = relation.name, id, "created");
    E::from_row(&row)
}

/// Fetch an entity by key, `None` when absent.
pub fn find<E: Entity>(db: &dyn DatabaseBackend, id: i64) -> Result<Option<E>, DbError> {
    let relation = E::RELATION;
    let script = CozoCompiler::compile_select_where(relation, "id", "id");
    let result = db.execute_query(&script, &single_param("id", int_value(id)))?;
    result.rows.first().map(|row| E::from_row(row)).transpose()
}

/// Fetch an entity by key.
pub fn get<E: Entity>(db: &dyn DatabaseBackend, id: i64) -> Result<E, DbError> {
    find(db, id)?.ok_or_else(|| DbError::NotFound {
        relation: E::RELATION.name.to_string(),
        id,
    })
}

/// Up to `limit` entities in key order.
pub fn list<E: Entity>(db: &dyn DatabaseBackend, limit: u32) -> Result<Vec<E>, DbError> {
    let limit = limit.min(MAX_LIST_LIMIT);
    let script = CozoCompiler::compile_select_all(E::RELATION, limit);
    let result = db.execute_query_no_params(&script)?;
    result.rows.iter().map(|row| E::from_row(row)).collect()
}

/// Build the junction row linking `owner` to `target` for a link set.
pub(crate) fn link_row(
    link: &SchemaRelation,
    source_column: &str,
    owner: i64,
    target: i64,
) -> Vec<DataValue> {
    link.all_fields()
        .map(|f| {
            if f.name == source_column {
                int_value(owner)
            } else {
                int_value(target)
            }
        })
        .collect()
}

fn check_link_targets(db: &dyn DatabaseBackend, set: &LinkSet) -> Result<(), DbError> {
    let rel = set.relationship;
    let target = find_relation(rel.target).ok_or_else(|| unknown_relation(rel.target))?;
    for &id in &set.ids {
        if !row_exists(db, target, "id", id)? {
            return Err(DbError::ForeignKeyViolation {
                relation: rel.link.to_string(),
                column: rel.target_column.to_string(),
                target: rel.target.to_string(),
                value: id,
            });
        }
    }
    Ok(())
}

/// Replace every field of an existing entity. Relationship lists in the
/// payload replace the current links wholesale.
pub fn update<E: Entity>(
    db: &dyn DatabaseBackend,
    id: i64,
    input: E::Update,
) -> Result<E, DbError> {
    let relation = E::RELATION;
    if !row_exists(db, relation, "id", id)? {
        return Err(DbError::NotFound {
            relation: relation.name.to_string(),
            id,
        });
    }

    let (entity, link_sets) = E::from_update(id, input);
    let row = entity.to_row();
    check_foreign_keys(db, relation, &row)?;
    for set in &link_sets {
        check_link_targets(db, set)?;
    }

    let mut blocks = vec![CozoCompiler::compile_put(relation, "row")];
    let mut params = Params::new();
    params.insert("row".to_string(), rows_param(vec![row]));
    params.insert("owner".to_string(), int_value(id));

    for (idx, set) in link_sets.iter().enumerate() {
        let rel = set.relationship;
        let link = find_relation(rel.link).ok_or_else(|| unknown_relation(rel.link))?;
        blocks.push(CozoCompiler::compile_rm_where(link, rel.source_column, "owner"));

        if !set.ids.is_empty() {
            let param = format!("links_{}", idx);
            let rows = set
                .ids
                .iter()
                .map(|&target| link_row(link, rel.source_column, id, target))
                .collect();
            blocks.push(CozoCompiler::compile_put(link, &param));
            params.insert(param, rows_param(rows));
        }
        debug!(link = rel.link, count = set.ids.len(), "replacing links");
    }

    db.execute_query(&CozoCompiler::chain(&blocks), &params)?;

    info!(relation = relation.name, id, "updated");
    Ok(entity)
}

/// First entity relation with a foreign key still pointing at `id`.
fn find_referrer(
    db: &dyn DatabaseBackend,
    relation: &SchemaRelation,
    id: i64,
) -> Result<Option<(&'static str, &'static str)>, DbError> {
    for referrer in ALL_RELATIONS.iter().filter(|r| !r.is_link()) {
        for fk in referrer.foreign_keys.iter().filter(|fk| fk.target == relation.name) {
            if row_exists(db, referrer, fk.column, id)? {
                return Ok(Some((referrer.name, fk.column)));
            }
        }
    }
    Ok(None)
}

/// Delete an entity and every junction row that mentions it.
///
/// Fails with `StillReferenced` while another entity's foreign-key column
/// points at it (an `MPart` using a material, an `MRecord` attached to a
/// site).
pub fn delete<E: Entity>(db: &dyn DatabaseBackend, id: i64) -> Result<E, DbError> {
    let relation = E::RELATION;
    let entity = get::<E>(db, id)?;

    if let Some((referenced_by, column)) = find_referrer(db, relation, id)? {
        return Err(DbError::StillReferenced {
            relation: relation.name.to_string(),
            id,
            referenced_by: referenced_by.to_string(),
            column: column.to_string(),
        });
    }

    let mut blocks = Vec::new();
    for link in ALL_RELATIONS.iter().filter(|r| r.is_link()) {
        for fk in link.foreign_keys.iter().filter(|fk| fk.target == relation.name) {
            blocks.push(CozoCompiler::compile_rm_where(link, fk.column, "id"));
        }
    }
    blocks.push(CozoCompiler::compile_rm(relation, "keys"));

    let mut params = single_param("id", int_value(id));
    params.insert("keys".to_string(), rows_param(vec![vec![int_value(id)]]));
    db.execute_query(&CozoCompiler::chain(&blocks), &params)?;

    info!(relation = relation.name, id, "deleted");
    Ok(entity)
}
