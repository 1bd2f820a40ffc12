//! Junction rows and relationship-expanded read shapes.

use serde::{Deserialize, Serialize};

use super::magnet::MagnetRead;
use super::mpart::MPartRead;
use super::msite::MSiteRead;

/// MPart/Magnet many to many link row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MPartMagnetLink {
    pub magnet_id: i64,
    pub mpart_id: i64,
}

/// Magnet/Site many to many link row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MagnetMSiteLink {
    pub magnet_id: i64,
    pub msite_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MPartReadWithMagnet {
    #[serde(flatten)]
    pub mpart: MPartRead,
    #[serde(default)]
    pub magnets: Vec<MagnetRead>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagnetReadWithMParts {
    #[serde(flatten)]
    pub magnet: MagnetRead,
    #[serde(default)]
    pub mparts: Vec<MPartRead>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagnetReadWithMSite {
    #[serde(flatten)]
    pub magnet: MagnetRead,
    #[serde(default)]
    pub msites: Vec<MSiteRead>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MSiteReadWithMagnets {
    #[serde(flatten)]
    pub msite: MSiteRead,
    #[serde(default)]
    pub magnets: Vec<MagnetRead>,
}
