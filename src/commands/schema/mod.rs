mod execute;

pub use execute::SchemaResult;

use clap::{Args, ValueEnum};
use serde::Serialize;

/// DDL dialect to print
#[derive(Debug, Clone, Copy, Default, PartialEq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// CozoScript `:create` statements
    #[default]
    Cozo,
    /// SQL `CREATE TABLE` statements
    Sql,
}

/// Print the DDL for every relation
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  magnetdb schema                   # Cozo :create statements
  magnetdb schema --dialect sql     # Relational CREATE TABLE statements
  magnetdb schema -o json           # Statements as a JSON array")]
pub struct SchemaCmd {
    /// DDL dialect
    #[arg(long, value_enum, default_value_t = Dialect::Cozo)]
    pub dialect: Dialect,
}
