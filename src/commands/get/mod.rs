mod cli_tests;
mod execute;

use clap::Args;

use crate::commands::EntityKind;

/// Fetch one entity by id, optionally with a related collection
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  magnetdb get magnet 3                   # Magnet 3
  magnetdb get magnet 3 --with mparts     # Magnet 3 and its parts
  magnetdb get msite 1 --with magnets     # Site 1 and its magnets
  magnetdb get mpart 7 --with magnets -o json")]
pub struct GetCmd {
    /// Entity to fetch
    #[arg(value_enum)]
    pub entity: EntityKind,

    /// Entity id
    pub id: i64,

    /// Embed a related collection (magnet: mparts|msites, msite: magnets, mpart: magnets)
    #[arg(short, long)]
    pub with: Option<String>,
}
