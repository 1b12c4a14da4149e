//! Pipe-delimited text table rendering.
//!
//! ```text
//! |id|username|
//! |-----------|
//! |1|alice|
//! ```

use std::io::{self, Write};

use roster_db::models::{ResultSet, Row};

pub const SEPARATOR: char = '|';
pub const DIVIDER_FILL: char = '-';
pub const EMPTY_MESSAGE: &str = "No users found in the database.";

/// Inner width of the divider: every column name plus the separators
/// between them. Lengths are counted in chars, not bytes.
pub fn divider_width(columns: &[String]) -> usize {
    let names: usize = columns.iter().map(|c| c.chars().count()).sum();
    (names + columns.len()).saturating_sub(1)
}

fn enclose<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::from(SEPARATOR);
    for part in parts {
        line.push_str(part.as_ref());
        line.push(SEPARATOR);
    }
    // No parts still needs both ends: "||"
    if line.len() == 1 {
        line.push(SEPARATOR);
    }
    line
}

pub fn header_line(columns: &[String]) -> String {
    enclose(columns)
}

pub fn divider_line(columns: &[String]) -> String {
    let fill: String = std::iter::repeat_n(DIVIDER_FILL, divider_width(columns)).collect();
    enclose([fill])
}

pub fn row_line(row: &Row) -> String {
    enclose(row.cells.iter().map(|c| c.to_string()))
}

/// Write the full report for `rs`: header, divider and one line per row,
/// or the single empty message when there are no rows.
pub fn write_table<W: Write>(rs: &ResultSet, out: &mut W) -> io::Result<()> {
    if rs.is_empty() {
        writeln!(out, "{}", EMPTY_MESSAGE)?;
        return out.flush();
    }

    writeln!(out, "{}", header_line(&rs.columns))?;
    writeln!(out, "{}", divider_line(&rs.columns))?;
    for row in &rs.rows {
        writeln!(out, "{}", row_line(row))?;
    }
    out.flush()
}
