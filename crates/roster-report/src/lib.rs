//! One-shot user report: open the roster database, fetch the users table,
//! print it as a pipe-delimited text table.

pub mod error;
pub mod render;

use std::io::Write;
use std::path::PathBuf;

use roster_db::Database;
use tracing::{error, info, warn};

pub use crate::error::ReportError;

/// Default database location, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "./database.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub db_path: PathBuf,
}

impl ReportConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH)
    }
}

/// What a run ended up printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatus {
    /// Header, divider and `rows` data lines.
    Printed { rows: usize },
    /// The empty-table message.
    Empty,
    /// A single error line.
    Failed,
}

impl ReportStatus {
    pub fn is_success(self) -> bool {
        !matches!(self, Self::Failed)
    }
}

pub struct Reporter {
    config: ReportConfig,
}

impl Reporter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Run the report against `out`. Errors never escape: they are printed
    /// to `out` as one line and reflected in the returned status.
    pub fn run<W: Write>(&self, out: &mut W) -> ReportStatus {
        match self.try_run(out) {
            Ok(status) => status,
            Err(e) => {
                error!(
                    db_path = %self.config.db_path.display(),
                    database = e.is_database(),
                    "Report failed: {}",
                    e
                );
                if let Err(write_err) = writeln!(out, "{}", e).and_then(|_| out.flush()) {
                    warn!("Could not print error line: {}", write_err);
                }
                ReportStatus::Failed
            }
        }
    }

    /// Connect, query and render, returning the first failure.
    /// The connection is released before rendering; an early return
    /// releases it through `Drop`.
    pub fn try_run<W: Write>(&self, out: &mut W) -> Result<ReportStatus, ReportError> {
        let db = Database::open(&self.config.db_path)?;
        let users = db.fetch_users()?;
        db.close();

        render::write_table(&users, out)?;

        let status = if users.is_empty() {
            ReportStatus::Empty
        } else {
            ReportStatus::Printed { rows: users.len() }
        };
        info!(?status, "Report complete");
        Ok(status)
    }
}
