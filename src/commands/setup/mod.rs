mod execute;
mod output;

pub use execute::{RelationState, RelationStatus, SetupResult};

use clap::Args;

/// Create every relation of the schema
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  magnetdb setup                          # Create schema in the configured database
  magnetdb setup --db ./lab.sqlite        # Create schema in a specific file
  magnetdb setup --dry-run                # Show what would be created")]
pub struct SetupCmd {
    /// Show what would be created without doing it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
