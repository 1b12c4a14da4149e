use std::io;

/// Failure of a report run. The `Display` form is the exact line printed
/// in place of the table.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("SQLite error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("An unexpected error occurred: {0}")]
    Unexpected(#[from] anyhow::Error),
}

impl From<io::Error> for ReportError {
    fn from(e: io::Error) -> Self {
        Self::Unexpected(e.into())
    }
}

impl ReportError {
    pub fn is_database(&self) -> bool {
        matches!(self, Self::Database(_))
    }
}
