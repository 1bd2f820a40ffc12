use std::error::Error;

use serde::Serialize;

use super::{Dialect, SchemaCmd};
use crate::commands::Execute;
use crate::db::schema::compilers::{CozoCompiler, SqlCompiler};
use crate::db::schema::ALL_RELATIONS;
use crate::db::DatabaseBackend;
use crate::output::Outputable;

/// Generated DDL, one statement per relation
#[derive(Debug, Serialize)]
pub struct SchemaResult {
    pub dialect: Dialect,
    pub statements: Vec<String>,
}

impl SchemaCmd {
    /// Compile the DDL. Needs no database.
    pub fn generate(self) -> SchemaResult {
        let statements = match self.dialect {
            Dialect::Cozo => CozoCompiler::compile_all(ALL_RELATIONS),
            Dialect::Sql => SqlCompiler::compile_all(ALL_RELATIONS),
        };
        SchemaResult {
            dialect: self.dialect,
            statements,
        }
    }
}

impl Execute for SchemaCmd {
    type Output = SchemaResult;

    fn execute(self, _db: &dyn DatabaseBackend) -> Result<Self::Output, Box<dyn Error>> {
        Ok(self.generate())
    }
}

impl Outputable for SchemaResult {
    fn to_table(&self) -> String {
        self.statements.join("\n\n")
    }
}
