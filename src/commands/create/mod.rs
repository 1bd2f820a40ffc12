mod execute;

use clap::Args;

use crate::commands::EntityKind;

/// Create an entity from a JSON payload
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  magnetdb create msite --json '{\"name\":\"M10\",\"conffile\":\"M10.cfg\",\"status\":\"in_operation\"}'
  magnetdb create magnet --json \"$(cat magnet.json)\"
  magnetdb create mpart --json '{\"name\":\"H1\",\"type\":\"Helix\",\"be\":\"HL-31\",\"geom\":\"H1.yaml\",\"status\":\"in_study\",\"material_id\":1}'")]
pub struct CreateCmd {
    /// Entity to create
    #[arg(value_enum)]
    pub entity: EntityKind,

    /// Create payload; the key is assigned by the store
    #[arg(short, long)]
    pub json: String,
}
