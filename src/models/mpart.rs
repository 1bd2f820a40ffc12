//! Magnet part shapes.

use serde::{Deserialize, Serialize};

use super::magnet::MagnetRead;

/// A component of a magnet. `material_id` is a plain foreign key: the
/// material is not embedded in any part shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MPartBase {
    pub name: String,

    #[serde(rename = "type")]
    pub part_type: String,
    pub be: String,
    pub geom: String,
    pub status: String,

    #[serde(default)]
    pub material_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MPart {
    pub id: i64,
    #[serde(flatten)]
    pub base: MPartBase,
}

pub type MPartCreate = MPartBase;
pub type MPartRead = MPart;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MPartUpdate {
    #[serde(flatten)]
    pub base: MPartBase,
    #[serde(default)]
    pub magnets: Vec<MagnetRead>,
}
