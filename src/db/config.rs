//! Database configuration for runtime backend selection.
//!
//! Parses connection URLs and environment variables and opens the matching
//! CozoDB backend (SQLite file or in-memory).

use std::error::Error;
use std::path::PathBuf;

use super::backend::DatabaseBackend;
use super::connection::CozoBackend;

/// Default database file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "./magnetdb.sqlite";

/// Configuration for database backend selection.
#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseConfig {
    /// Local CozoDB with SQLite storage (default).
    CozoSqlite { path: PathBuf },

    /// Local CozoDB with in-memory storage.
    CozoMem,
}

impl DatabaseConfig {
    /// Create a backend instance from this configuration.
    pub fn connect(&self) -> Result<Box<dyn DatabaseBackend>, Box<dyn Error>> {
        let backend = match self {
            Self::CozoSqlite { path } => CozoBackend::open_sqlite(path)?,
            Self::CozoMem => CozoBackend::open_mem()?,
        };
        Ok(Box::new(backend))
    }

    /// Parse from a connection URL or file path.
    ///
    /// Supported formats:
    /// - `./path/to/db.sqlite` or `/absolute/path` → CozoSqlite
    /// - `sqlite://path/to/db` → CozoSqlite
    /// - `:memory:` or `mem://` → CozoMem
    pub fn from_url(url: &str) -> Result<Self, Box<dyn Error>> {
        if url == ":memory:" || url == "mem://" {
            return Ok(Self::CozoMem);
        }

        if let Some(path) = url.strip_prefix("sqlite://") {
            if path.is_empty() {
                return Err("sqlite:// URL is missing a path".into());
            }
            return Ok(Self::CozoSqlite {
                path: PathBuf::from(path),
            });
        }

        if let Some((scheme, _)) = url.split_once("://") {
            return Err(format!("Unsupported database scheme: {}", scheme).into());
        }

        Ok(Self::CozoSqlite {
            path: PathBuf::from(url),
        })
    }

    /// Load from environment variables.
    ///
    /// Checks in order:
    /// 1. DATABASE_URL
    /// 2. MAGNETDB_PATH
    pub fn from_env() -> Result<Option<Self>, Box<dyn Error>> {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            return Ok(Some(Self::from_url(&url)?));
        }

        if let Ok(path) = std::env::var("MAGNETDB_PATH") {
            return Ok(Some(Self::CozoSqlite {
                path: PathBuf::from(path),
            }));
        }

        Ok(None)
    }

    /// Resolve configuration from config file and environment.
    ///
    /// Priority: Config file > Environment > Default (./magnetdb.sqlite)
    pub fn resolve() -> Result<Self, Box<dyn Error>> {
        if let Some(config_file) = crate::config::ConfigFile::load()? {
            return Ok(config_file.database.to_database_config());
        }

        if let Some(config) = Self::from_env()? {
            return Ok(config);
        }

        Self::from_url(DEFAULT_DB_PATH)
    }
}
