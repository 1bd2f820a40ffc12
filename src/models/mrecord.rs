//! Magnet record shapes.

use serde::{Deserialize, Serialize};

/// A timestamped, named entry; `msite_id` optionally points at a site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MRecordBase {
    pub timestamp: String,
    pub name: String,
    #[serde(default)]
    pub msite_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MRecord {
    pub id: i64,
    #[serde(flatten)]
    pub base: MRecordBase,
}

pub type MRecordCreate = MRecordBase;
pub type MRecordRead = MRecord;
pub type MRecordUpdate = MRecordBase;
