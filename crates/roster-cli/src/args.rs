//! Command-line arguments for the `get-users` report.

use clap::Parser;
use std::path::PathBuf;

use roster_report::{DEFAULT_DB_PATH, ReportConfig};

/// Print the users table of a roster database as a text table
#[derive(Parser, Debug, Clone)]
#[command(name = "get-users")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to the SQLite database file
    #[arg(long = "db", env = "ROSTER_DB_PATH", default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,
}

impl Args {
    pub fn into_config(self) -> ReportConfig {
        ReportConfig::new(self.db_path)
    }
}
