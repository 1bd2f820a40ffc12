//! Junction maintenance and relationship-expanded reads.

use tracing::info;

use super::crud::{check_foreign_keys, get, link_row, rows_param, single_param};
use super::entity::Entity;
use crate::db::schema::compilers::CozoCompiler;
use crate::db::schema::{
    find_relation, SchemaRelation, SchemaRelationship, MAGNET_MPARTS, MAGNET_MSITES,
    MPART_MAGNETS, MSITE_MAGNETS,
};
use crate::db::{int_value, DatabaseBackend, DbError, Params, RowReader};
use crate::models::{
    MPart, MPartMagnetLink, MPartReadWithMagnet, MSite, MSiteReadWithMagnets, Magnet,
    MagnetMSiteLink, MagnetReadWithMParts, MagnetReadWithMSite,
};

fn junction(rel: &SchemaRelationship) -> Result<&'static SchemaRelation, DbError> {
    find_relation(rel.link).ok_or_else(|| DbError::UnknownRelation {
        name: rel.link.to_string(),
    })
}

/// Ids currently linked to `owner` through `rel`, ascending.
pub fn linked_ids(
    db: &dyn DatabaseBackend,
    rel: &SchemaRelationship,
    owner: i64,
) -> Result<Vec<i64>, DbError> {
    let link = junction(rel)?;
    let script = CozoCompiler::compile_select_where(link, rel.source_column, "owner");
    let result = db.execute_query(&script, &single_param("owner", int_value(owner)))?;

    let mut ids = result
        .rows
        .iter()
        .map(|row| RowReader::new(link, row).int(rel.target_column))
        .collect::<Result<Vec<_>, _>>()?;
    ids.sort_unstable();
    Ok(ids)
}

/// Full rows of `T` linked to `owner` through `rel`, in key order.
pub fn linked<T: Entity>(
    db: &dyn DatabaseBackend,
    rel: &SchemaRelationship,
    owner: i64,
) -> Result<Vec<T>, DbError> {
    let script = CozoCompiler::compile_select_linked(rel, T::RELATION, "owner");
    let result = db.execute_query(&script, &single_param("owner", int_value(owner)))?;
    result.rows.iter().map(|row| T::from_row(row)).collect()
}

fn duplicate_link(link: &SchemaRelation, rel: &SchemaRelationship, owner: i64, target: i64) -> DbError {
    let key = link
        .all_fields()
        .map(|f| if f.name == rel.source_column { owner } else { target })
        .collect();
    DbError::UniqueViolation {
        relation: link.name.to_string(),
        key,
    }
}

/// Add one junction row. Both ends must exist and the pair must be new.
///
/// The row is written with `:insert`, so a pair stored by a concurrent
/// caller after the check still fails here instead of being written twice.
pub fn link(
    db: &dyn DatabaseBackend,
    rel: &SchemaRelationship,
    owner: i64,
    target: i64,
) -> Result<(), DbError> {
    let link = junction(rel)?;
    let row = link_row(link, rel.source_column, owner, target);
    check_foreign_keys(db, link, &row)?;

    if linked_ids(db, rel, owner)?.contains(&target) {
        return Err(duplicate_link(link, rel, owner, target));
    }

    let script = CozoCompiler::compile_insert(link, "rows");
    if let Err(err) = db.execute_query(&script, &single_param("rows", rows_param(vec![row]))) {
        if linked_ids(db, rel, owner)?.contains(&target) {
            return Err(duplicate_link(link, rel, owner, target));
        }
        return Err(err);
    }

    info!(link = link.name, owner, target, "linked");
    Ok(())
}

/// Remove one junction row. Returns whether a row was removed.
pub fn unlink(
    db: &dyn DatabaseBackend,
    rel: &SchemaRelationship,
    owner: i64,
    target: i64,
) -> Result<bool, DbError> {
    let link = junction(rel)?;
    if !linked_ids(db, rel, owner)?.contains(&target) {
        return Ok(false);
    }

    let script = CozoCompiler::compile_rm(link, "keys");
    let mut params = Params::new();
    params.insert(
        "keys".to_string(),
        rows_param(vec![link_row(link, rel.source_column, owner, target)]),
    );
    db.execute_query(&script, &params)?;

    info!(link = link.name, owner, target, "unlinked");
    Ok(true)
}

pub fn link_magnet_mpart(db: &dyn DatabaseBackend, pair: MPartMagnetLink) -> Result<(), DbError> {
    link(db, &MAGNET_MPARTS, pair.magnet_id, pair.mpart_id)
}

pub fn unlink_magnet_mpart(
    db: &dyn DatabaseBackend,
    pair: MPartMagnetLink,
) -> Result<bool, DbError> {
    unlink(db, &MAGNET_MPARTS, pair.magnet_id, pair.mpart_id)
}

pub fn link_magnet_msite(db: &dyn DatabaseBackend, pair: MagnetMSiteLink) -> Result<(), DbError> {
    link(db, &MAGNET_MSITES, pair.magnet_id, pair.msite_id)
}

pub fn unlink_magnet_msite(
    db: &dyn DatabaseBackend,
    pair: MagnetMSiteLink,
) -> Result<bool, DbError> {
    unlink(db, &MAGNET_MSITES, pair.magnet_id, pair.msite_id)
}

pub fn magnet_with_mparts(
    db: &dyn DatabaseBackend,
    id: i64,
) -> Result<MagnetReadWithMParts, DbError> {
    let magnet = get::<Magnet>(db, id)?;
    let mparts = linked::<MPart>(db, &MAGNET_MPARTS, id)?;
    Ok(MagnetReadWithMParts { magnet, mparts })
}

pub fn magnet_with_msites(
    db: &dyn DatabaseBackend,
    id: i64,
) -> Result<MagnetReadWithMSite, DbError> {
    let magnet = get::<Magnet>(db, id)?;
    let msites = linked::<MSite>(db, &MAGNET_MSITES, id)?;
    Ok(MagnetReadWithMSite { magnet, msites })
}

pub fn msite_with_magnets(
    db: &dyn DatabaseBackend,
    id: i64,
) -> Result<MSiteReadWithMagnets, DbError> {
    let msite = get::<MSite>(db, id)?;
    let magnets = linked::<Magnet>(db, &MSITE_MAGNETS, id)?;
    Ok(MSiteReadWithMagnets { msite, magnets })
}

pub fn mpart_with_magnets(
    db: &dyn DatabaseBackend,
    id: i64,
) -> Result<MPartReadWithMagnet, DbError> {
    let mpart = get::<MPart>(db, id)?;
    let magnets = linked::<Magnet>(db, &MPART_MAGNETS, id)?;
    Ok(MPartReadWithMagnet { mpart, magnets })
}
