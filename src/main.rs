use std::error::Error;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use magnetdb::cli::Args;
use magnetdb::db::{DatabaseBackend, DatabaseConfig};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let args = Args::parse();
    let db_url = args.db;
    let connect = move || -> Result<Box<dyn DatabaseBackend>, Box<dyn Error>> {
        let config = match db_url.as_deref() {
            Some(url) => DatabaseConfig::from_url(url)?,
            None => DatabaseConfig::resolve()?,
        };
        tracing::debug!(?config, "opening database");
        config.connect()
    };

    let output = args.command.dispatch(connect, args.format)?;
    println!("{}", output);
    Ok(())
}
