//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - An `Execute` implementation returning an `Outputable` result
//! - CLI parsing tests built from the `test_macros` DSL

mod create;
mod delete;
mod entity;
mod get;
pub mod link;
mod list;
pub mod schema;
pub mod setup;
mod update;

pub use create::CreateCmd;
pub use delete::DeleteCmd;
pub use entity::{EntityKind, RecordAction, RecordResult};
pub use get::GetCmd;
pub use link::LinkCmd;
pub use list::{ListCmd, ListResult};
pub use schema::SchemaCmd;
pub use setup::SetupCmd;
pub use update::UpdateCmd;

use clap::Subcommand;
use std::error::Error;

use crate::db::schema::migrations::run_migrations;
use crate::db::DatabaseBackend;
use crate::output::{OutputFormat, Outputable};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create every relation of the schema
    Setup(SetupCmd),

    /// Print the schema as Cozo or SQL DDL
    Schema(SchemaCmd),

    /// Create an entity from a JSON payload
    Create(CreateCmd),

    /// Fetch one entity by id
    Get(GetCmd),

    /// List entities in id order
    List(ListCmd),

    /// Replace an entity with a JSON payload
    Update(UpdateCmd),

    /// Delete an entity and its junction rows
    Delete(DeleteCmd),

    /// Link or unlink a magnet and a part or site
    Link(LinkCmd),

    /// Catch-all for unknown commands
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

fn render<C: Execute>(
    cmd: C,
    db: &dyn DatabaseBackend,
    format: OutputFormat,
) -> Result<String, Box<dyn Error>> {
    let result = cmd.execute(db)?;
    Ok(result.format(format))
}

fn unknown_command(args: &[String]) -> Box<dyn Error> {
    format!("Unknown command: {}", args.first().map(String::as_str).unwrap_or_default()).into()
}

impl Command {
    /// Commands that read or write entities need every relation in place.
    fn needs_schema(&self) -> bool {
        !matches!(
            self,
            Command::Setup(_) | Command::Schema(_) | Command::Unknown(_)
        )
    }

    /// Execute the command, opening the database only when it is needed.
    ///
    /// `schema` and unknown commands never call `connect`, so printing the
    /// DDL leaves no database file behind.
    pub fn dispatch<F>(self, connect: F, format: OutputFormat) -> Result<String, Box<dyn Error>>
    where
        F: FnOnce() -> Result<Box<dyn DatabaseBackend>, Box<dyn Error>>,
    {
        match self {
            Command::Schema(cmd) => Ok(cmd.generate().format(format)),
            Command::Unknown(args) => Err(unknown_command(&args)),
            other => {
                let db = connect()?;
                other.run(db.as_ref(), format)
            }
        }
    }

    /// Execute the command and return formatted output.
    ///
    /// Data commands bring the schema up to date first, so a fresh database
    /// works without an explicit `setup`.
    pub fn run(self, db: &dyn DatabaseBackend, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        if self.needs_schema() {
            run_migrations(db)?;
        }

        match self {
            Command::Setup(cmd) => render(cmd, db, format),
            Command::Schema(cmd) => render(cmd, db, format),
            Command::Create(cmd) => render(cmd, db, format),
            Command::Get(cmd) => render(cmd, db, format),
            Command::List(cmd) => render(cmd, db, format),
            Command::Update(cmd) => render(cmd, db, format),
            Command::Delete(cmd) => render(cmd, db, format),
            Command::Link(cmd) => render(cmd, db, format),
            Command::Unknown(args) => Err(unknown_command(&args)),
        }
    }
}
