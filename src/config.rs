//! Configuration file handling for database connections.
//!
//! This module provides loading and parsing of `.magnetdb.json` configuration files.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::db::DatabaseConfig;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".magnetdb.json";

/// Top-level configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Database configuration
    pub database: DatabaseConfigFile,
}

/// Database configuration variants for different backends.
///
/// JSON format uses "type" field with lowercase variant names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DatabaseConfigFile {
    /// SQLite backend with file path
    Sqlite { path: PathBuf },
    /// In-memory backend
    #[serde(rename = "memory")]
    Mem,
}

impl ConfigFile {
    /// Load `.magnetdb.json` from the current directory.
    ///
    /// Returns `Ok(None)` when the file does not exist; a file that exists but
    /// cannot be read or parsed is an error.
    pub fn load() -> Result<Option<Self>, Box<dyn Error>> {
        let config_path = PathBuf::from(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Ok(None);
        }
        Self::load_from(&config_path).map(Some)
    }

    /// Load a configuration file from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

        let config: ConfigFile = serde_json::from_str(&content)
            .map_err(|e| format!("Invalid JSON in {}: {}", path.display(), e))?;

        Ok(config)
    }
}

impl DatabaseConfigFile {
    /// Convert this configuration to a DatabaseConfig.
    pub fn to_database_config(&self) -> DatabaseConfig {
        match self {
            Self::Sqlite { path } => DatabaseConfig::CozoSqlite { path: path.clone() },
            Self::Mem => DatabaseConfig::CozoMem,
        }
    }
}
