mod cli_tests;
mod execute;

use clap::Args;

use crate::commands::EntityKind;

/// Replace an entity with a JSON payload
///
/// Every field is resupplied. For magnets, sites and parts the relationship
/// lists in the payload replace the current links; an omitted list clears them.
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  magnetdb update msite 1 --json \"$(cat site.json)\"
  magnetdb update magnet 3 --json '{\"name\":\"M9\",\"be\":\"b\",\"geom\":\"g\",\"status\":\"in_operation\",\"msites\":[],\"mparts\":[]}'")]
pub struct UpdateCmd {
    /// Entity to update
    #[arg(value_enum)]
    pub entity: EntityKind,

    /// Entity id
    pub id: i64,

    /// Update payload
    #[arg(short, long)]
    pub json: String,
}
