//! Magnet site shapes.

use serde::{Deserialize, Serialize};

use super::magnet::MagnetRead;

/// A physical site hosting magnets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MSiteBase {
    pub name: String,
    pub conffile: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MSite {
    pub id: i64,
    #[serde(flatten)]
    pub base: MSiteBase,
}

pub type MSiteCreate = MSiteBase;
pub type MSiteRead = MSite;

/// Full replacement of a site. `magnets` replaces the linked set; leaving it
/// out unlinks every magnet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MSiteUpdate {
    #[serde(flatten)]
    pub base: MSiteBase,
    #[serde(default)]
    pub magnets: Vec<MagnetRead>,
}
