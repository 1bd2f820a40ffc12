mod execute;

use clap::Args;

use crate::commands::EntityKind;

/// Delete an entity and its junction rows
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  magnetdb delete magnet 3       # Also unlinks the magnet from its sites and parts
  magnetdb delete material 1     # Fails while a part still uses the material")]
pub struct DeleteCmd {
    /// Entity to delete
    #[arg(value_enum)]
    pub entity: EntityKind,

    /// Entity id
    pub id: i64,
}
