//! Magnet shapes.

use serde::{Deserialize, Serialize};

use super::mpart::MPartRead;
use super::msite::MSiteRead;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagnetBase {
    pub name: String,

    pub be: String,
    pub geom: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Magnet {
    pub id: i64,
    #[serde(flatten)]
    pub base: MagnetBase,
}

pub type MagnetCreate = MagnetBase;
pub type MagnetRead = Magnet;

/// Full replacement of a magnet, including both relationship lists.
///
/// Both lists default to empty, so a payload that omits them clears the
/// magnet's sites and parts. Callers keep links by sending them back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagnetUpdate {
    #[serde(flatten)]
    pub base: MagnetBase,
    #[serde(default)]
    pub msites: Vec<MSiteRead>,
    #[serde(default)]
    pub mparts: Vec<MPartRead>,
}
