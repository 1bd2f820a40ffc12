mod execute;

pub use execute::{LinkAction, LinkResult};

use clap::{Args, ValueEnum};
use serde::Serialize;

/// Which junction to edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkKind {
    /// Magnet and the parts it is assembled from
    MagnetMpart,
    /// Magnet and the sites it is deployed at
    MagnetMsite,
}

/// Link (or unlink) a magnet and a part or site
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  magnetdb link magnet-mpart --magnet 3 --other 7          # Part 7 belongs to magnet 3
  magnetdb link magnet-msite --magnet 3 --other 1          # Magnet 3 is deployed at site 1
  magnetdb link magnet-msite --magnet 3 --other 1 --remove # Undo it")]
pub struct LinkCmd {
    /// Junction to edit
    #[arg(value_enum)]
    pub kind: LinkKind,

    /// Magnet id
    #[arg(short, long)]
    pub magnet: i64,

    /// Part or site id
    #[arg(long)]
    pub other: i64,

    /// Remove the link instead of adding it
    #[arg(long, default_value_t = false)]
    pub remove: bool,
}
