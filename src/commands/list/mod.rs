mod execute;
mod output;

pub use execute::ListResult;

use clap::Args;

use crate::commands::EntityKind;

/// List entities in id order
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  magnetdb list magnet                 # First 100 magnets
  magnetdb list material -l 10         # First 10 materials
  magnetdb list mrecord -o toon        # Records in toon format")]
pub struct ListCmd {
    /// Entity to list
    #[arg(value_enum)]
    pub entity: EntityKind,

    /// Maximum number of results to return (1-1000)
    #[arg(short, long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub limit: u32,
}
