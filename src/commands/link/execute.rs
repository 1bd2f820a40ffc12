use std::error::Error;

use serde::Serialize;

use super::{LinkCmd, LinkKind};
use crate::commands::Execute;
use crate::db::DatabaseBackend;
use crate::models::{MPartMagnetLink, MagnetMSiteLink};
use crate::output::Outputable;
use crate::queries;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkAction {
    Linked,
    Unlinked,
    NotLinked,
}

/// Result of the link command execution
#[derive(Debug, Serialize)]
pub struct LinkResult {
    pub kind: LinkKind,
    pub magnet_id: i64,
    pub other_id: i64,
    pub action: LinkAction,
}

impl Execute for LinkCmd {
    type Output = LinkResult;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        let action = match (self.kind, self.remove) {
            (LinkKind::MagnetMpart, false) => {
                queries::link_magnet_mpart(
                    db,
                    MPartMagnetLink {
                        magnet_id: self.magnet,
                        mpart_id: self.other,
                    },
                )?;
                LinkAction::Linked
            }
            (LinkKind::MagnetMsite, false) => {
                queries::link_magnet_msite(
                    db,
                    MagnetMSiteLink {
                        magnet_id: self.magnet,
                        msite_id: self.other,
                    },
                )?;
                LinkAction::Linked
            }
            (LinkKind::MagnetMpart, true) => {
                let pair = MPartMagnetLink {
                    magnet_id: self.magnet,
                    mpart_id: self.other,
                };
                removed(queries::unlink_magnet_mpart(db, pair)?)
            }
            (LinkKind::MagnetMsite, true) => {
                let pair = MagnetMSiteLink {
                    magnet_id: self.magnet,
                    msite_id: self.other,
                };
                removed(queries::unlink_magnet_msite(db, pair)?)
            }
        };

        Ok(LinkResult {
            kind: self.kind,
            magnet_id: self.magnet,
            other_id: self.other,
            action,
        })
    }
}

fn removed(was_linked: bool) -> LinkAction {
    if was_linked {
        LinkAction::Unlinked
    } else {
        LinkAction::NotLinked
    }
}

impl Outputable for LinkResult {
    fn to_table(&self) -> String {
        let other = match self.kind {
            LinkKind::MagnetMpart => "mpart",
            LinkKind::MagnetMsite => "msite",
        };
        let verb = match self.action {
            LinkAction::Linked => "Linked",
            LinkAction::Unlinked => "Unlinked",
            LinkAction::NotLinked => "Not linked:",
        };
        format!("{} magnet {} and {} {}", verb, self.magnet_id, other, self.other_id)
    }
}
