use crate::Database;
use crate::models::{Cell, ResultSet, Row};
use rusqlite::{Connection, Result};
use tracing::debug;

/// The one query this tool runs. Column names in the report come from the
/// prepared statement, so this text is the only place they are listed.
pub const USERS_QUERY: &str = "SELECT id, username, email, isAdmin, isApproved FROM users;";

impl Database {
    // -- Users --

    /// Fetch every user row in engine scan order.
    pub fn fetch_users(&self) -> Result<ResultSet> {
        self.with_conn(|conn| query_all(conn, USERS_QUERY))
    }
}

/// Run a parameterless query and collect the whole result in memory.
pub fn query_all(conn: &Connection, sql: &str) -> Result<ResultSet> {
    let mut stmt = conn.prepare(sql)?;

    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let width = columns.len();

    let mut rows = Vec::new();
    let mut cursor = stmt.query([])?;
    while let Some(row) = cursor.next()? {
        let cells = (0..width)
            .map(|i| {
                let value = row.get_ref(i)?;
                Cell::try_from(value).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(i, value.data_type(), Box::new(e))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        rows.push(Row::new(cells));
    }

    debug!(columns = width, rows = rows.len(), "query complete");
    Ok(ResultSet::new(columns, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn users_db(dir: &TempDir, seed: &str) -> std::path::PathBuf {
        let path = dir.path().join("database.db");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT,
                email TEXT NOT NULL UNIQUE,
                password TEXT,
                isApproved INTEGER DEFAULT 0,
                isAdmin INTEGER DEFAULT 0
            );",
        )
        .unwrap();
        conn.execute_batch(seed).unwrap();
        path
    }

    #[test]
    fn columns_follow_select_clause() {
        let dir = TempDir::new().unwrap();
        let path = users_db(&dir, "");

        let db = Database::open(&path).unwrap();
        let rs = db.fetch_users().unwrap();
        assert_eq!(rs.columns, vec!["id", "username", "email", "isAdmin", "isApproved"]);
        assert!(rs.is_empty());
    }

    #[test]
    fn fetches_all_rows_with_dynamic_cells() {
        let dir = TempDir::new().unwrap();
        let path = users_db(
            &dir,
            "INSERT INTO users (username, email, password, isApproved, isAdmin)
                 VALUES ('alice', 'alice@x.com', 'hash', 1, 1);
             INSERT INTO users (username, email) VALUES (NULL, 'ghost@x.com');",
        );

        let db = Database::open(&path).unwrap();
        let rs = db.fetch_users().unwrap();
        assert_eq!(rs.len(), 2);
        assert_eq!(
            rs.rows[0].cells,
            vec![
                Cell::Integer(1),
                Cell::Text("alice".into()),
                Cell::Text("alice@x.com".into()),
                Cell::Integer(1),
                Cell::Integer(1),
            ]
        );
        assert_eq!(rs.rows[1].cells[1], Cell::Null);
        assert_eq!(rs.rows[1].cells[3], Cell::Integer(0));
    }

    #[test]
    fn missing_table_is_a_database_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.db");
        Connection::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE other (x INTEGER);")
            .unwrap();

        let db = Database::open(&path).unwrap();
        let err = db.fetch_users().unwrap_err();
        assert!(err.to_string().contains("no such table: users"));
    }

    #[test]
    fn undecodable_text_fails_the_fetch() {
        let dir = TempDir::new().unwrap();
        let path = users_db(
            &dir,
            "INSERT INTO users (username, email) VALUES (CAST(X'626fff62' AS TEXT), 'b@x.com');",
        );

        let db = Database::open(&path).unwrap();
        let err = db.fetch_users().unwrap_err();
        assert!(matches!(
            err,
            rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, _)
        ));
    }

    #[test]
    fn query_all_keeps_aliases() {
        let conn = Connection::open_in_memory().unwrap();
        let rs = query_all(&conn, "SELECT 1 AS one, 'x' AS letter").unwrap();
        assert_eq!(rs.columns, vec!["one", "letter"]);
        assert_eq!(rs.rows[0].cells, vec![Cell::Integer(1), Cell::Text("x".into())]);
    }
}
