pub mod models;
pub mod queries;

use rusqlite::{Connection, OpenFlags, Result, ffi};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Read-only handle on a roster database file.
///
/// The connection is released exactly once: either through [`Database::close`]
/// or, on any early return, when the handle is dropped.
pub struct Database {
    conn: Option<Connection>,
    path: PathBuf,
}

impl Database {
    /// Open an existing database file. The file is never created, so a
    /// missing path fails here instead of yielding an empty database.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        info!("Database opened at {} (read-only)", path.display());
        Ok(Self {
            conn: Some(conn),
            path: path.to_path_buf(),
        })
    }

    pub fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.conn.as_ref().ok_or_else(|| {
            rusqlite::Error::SqliteFailure(
                ffi::Error::new(ffi::SQLITE_MISUSE),
                Some("connection already released".into()),
            )
        })?;
        f(conn)
    }

    /// Release the connection. A failed close is logged, never returned.
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        let Some(conn) = self.conn.take() else {
            return;
        };

        match conn.close() {
            Ok(()) => info!("Database closed at {}", self.path.display()),
            // The handle comes back on failure; dropping it finalizes the close.
            Err((_conn, e)) => warn!("Failed to close database at {}: {}", self.path.display(), e),
        }
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        if self.conn.is_some() {
            debug!("Releasing unclosed connection to {}", self.path.display());
            self.release();
        }
    }
}
