//! Entity selection and the shared single-record result.

use std::error::Error;
use std::fmt;

use clap::ValueEnum;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::db::schema::{SchemaRelation, MAGNET, MATERIAL, MPART, MRECORD, MSITE};
use crate::db::DatabaseBackend;
use crate::output::{field_lines, Outputable};
use crate::queries::{self, Entity};

/// Which entity relation a command operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Material,
    #[value(name = "msite")]
    MSite,
    Magnet,
    #[value(name = "mpart")]
    MPart,
    #[value(name = "mrecord")]
    MRecord,
}

impl EntityKind {
    pub fn relation(self) -> &'static SchemaRelation {
        match self {
            EntityKind::Material => &MATERIAL,
            EntityKind::MSite => &MSITE,
            EntityKind::Magnet => &MAGNET,
            EntityKind::MPart => &MPART,
            EntityKind::MRecord => &MRECORD,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.relation().name)
    }
}

/// What happened to the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordAction {
    Created,
    Fetched,
    Updated,
    Deleted,
}

impl fmt::Display for RecordAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RecordAction::Created => "Created",
            RecordAction::Fetched => "Found",
            RecordAction::Updated => "Updated",
            RecordAction::Deleted => "Deleted",
        };
        f.write_str(text)
    }
}

/// Result of create, get, update and delete
#[derive(Debug, Serialize)]
pub struct RecordResult {
    pub entity: EntityKind,
    pub action: RecordAction,
    pub record: Value,
}

impl Outputable for RecordResult {
    fn to_table(&self) -> String {
        let mut lines = vec![format!("{} {}", self.action, self.entity), String::new()];
        lines.extend(field_lines(&self.record).into_iter().map(|l| format!("  {}", l)));
        lines.join("\n")
    }
}

fn parse_payload<T: DeserializeOwned>(kind: EntityKind, json: &str) -> Result<T, Box<dyn Error>> {
    serde_json::from_str(json).map_err(|e| format!("Invalid {} payload: {}", kind, e).into())
}

pub(crate) fn create_as<E>(
    db: &dyn DatabaseBackend,
    kind: EntityKind,
    json: &str,
) -> Result<Value, Box<dyn Error>>
where
    E: Entity + Serialize,
    E::Create: DeserializeOwned,
{
    let input = parse_payload::<E::Create>(kind, json)?;
    let created = queries::create::<E>(db, input)?;
    Ok(serde_json::to_value(created)?)
}

pub(crate) fn get_as<E: Entity + Serialize>(
    db: &dyn DatabaseBackend,
    id: i64,
) -> Result<Value, Box<dyn Error>> {
    Ok(serde_json::to_value(queries::get::<E>(db, id)?)?)
}

pub(crate) fn list_as<E: Entity + Serialize>(
    db: &dyn DatabaseBackend,
    limit: u32,
) -> Result<Vec<Value>, Box<dyn Error>> {
    queries::list::<E>(db, limit)?
        .into_iter()
        .map(|e| serde_json::to_value(e).map_err(Into::into))
        .collect()
}

pub(crate) fn update_as<E>(
    db: &dyn DatabaseBackend,
    kind: EntityKind,
    id: i64,
    json: &str,
) -> Result<Value, Box<dyn Error>>
where
    E: Entity + Serialize,
    E::Update: DeserializeOwned,
{
    let input = parse_payload::<E::Update>(kind, json)?;
    let updated = queries::update::<E>(db, id, input)?;
    Ok(serde_json::to_value(updated)?)
}

pub(crate) fn delete_as<E: Entity + Serialize>(
    db: &dyn DatabaseBackend,
    id: i64,
) -> Result<Value, Box<dyn Error>> {
    Ok(serde_json::to_value(queries::delete::<E>(db, id)?)?)
}

/// Dispatch a generic helper on the concrete entity type for `kind`.
macro_rules! for_entity {
    ($kind:expr, $helper:ident ( $($arg:expr),* )) => {
        match $kind {
            $crate::commands::EntityKind::Material => $helper::<$crate::models::Material>($($arg),*),
            $crate::commands::EntityKind::MSite => $helper::<$crate::models::MSite>($($arg),*),
            $crate::commands::EntityKind::Magnet => $helper::<$crate::models::Magnet>($($arg),*),
            $crate::commands::EntityKind::MPart => $helper::<$crate::models::MPart>($($arg),*),
            $crate::commands::EntityKind::MRecord => $helper::<$crate::models::MRecord>($($arg),*),
        }
    };
}

pub(crate) use for_entity;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("material", EntityKind::Material)]
    #[case("msite", EntityKind::MSite)]
    #[case("magnet", EntityKind::Magnet)]
    #[case("mpart", EntityKind::MPart)]
    #[case("mrecord", EntityKind::MRecord)]
    fn test_entity_kind_names(#[case] name: &str, #[case] kind: EntityKind) {
        assert_eq!(EntityKind::from_str(name, false).unwrap(), kind);
        assert_eq!(kind.to_string(), name);
        assert_eq!(serde_json::to_value(kind).unwrap(), json!(name));
    }

    #[test]
    fn test_record_result_table() {
        let result = RecordResult {
            entity: EntityKind::Magnet,
            action: RecordAction::Created,
            record: json!({"id": 1, "name": "M9", "status": "in_study"}),
        };

        assert_eq!(
            result.to_table(),
            "Created magnet\n\n  id: 1\n  name: M9\n  status: in_study"
        );
    }
}
