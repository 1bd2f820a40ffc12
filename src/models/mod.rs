//! Entity shapes exchanged at the system boundary.
//!
//! Each entity comes as a family of shapes built by composition:
//! - `XBase` holds the domain fields; it doubles as the `XCreate` payload
//! - `X` (alias `XRead`) is the stored row: `id` plus the flattened base
//! - `XUpdate` is a full-replace payload; for entities with many-to-many
//!   relationships it also carries the complete list of linked entities
//! - `XReadWith*` embeds one level of related `Read` shapes
//!
//! Serialized field names follow the API spelling (`Tref`, `ref`, `type`);
//! missing required fields fail deserialization.

mod links;
mod magnet;
mod material;
mod mpart;
mod mrecord;
mod msite;

pub use links::{
    MPartMagnetLink, MPartReadWithMagnet, MSiteReadWithMagnets, MagnetMSiteLink,
    MagnetReadWithMParts, MagnetReadWithMSite,
};
pub use magnet::{Magnet, MagnetBase, MagnetCreate, MagnetRead, MagnetUpdate};
pub use material::{Material, MaterialBase, MaterialCreate, MaterialRead, MaterialUpdate};
pub use mpart::{MPart, MPartBase, MPartCreate, MPartRead, MPartUpdate};
pub use mrecord::{MRecord, MRecordBase, MRecordCreate, MRecordRead, MRecordUpdate};
pub use msite::{MSite, MSiteBase, MSiteCreate, MSiteRead, MSiteUpdate};
