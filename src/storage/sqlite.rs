//! SQLite persistence for submitted case queries.

use chrono::{DateTime, NaiveDateTime, Utc};
use log::{debug, info};
use parking_lot::Mutex;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::fs;
use std::path::Path;

use super::types::{NewQuery, QueryRecord, QuerySummary};
use crate::CaseResult;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS queries (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        court TEXT,
        case_type TEXT,
        case_number TEXT,
        case_year TEXT,
        raw_html TEXT,
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP
    )
";

const SQLITE_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";

/// Append-only store of queries behind a single guarded connection.
pub struct QueryStore {
    conn: Mutex<Connection>,
}

impl QueryStore {
    /// Opens (creating if needed) the database file and its parent directory.
    pub fn open<P: AsRef<Path>>(path: P) -> CaseResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        info!("Opening query store at {}", path.display());
        Self::init(Connection::open(path)?)
    }

    pub fn open_in_memory() -> CaseResult<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> CaseResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    #[cfg(test)]
    pub(crate) fn lock_connection(&self) -> parking_lot::MutexGuard<'_, Connection> {
        self.conn.lock()
    }

    pub fn insert(&self, query: &NewQuery) -> CaseResult<i64> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO queries (court, case_type, case_number, case_year, raw_html) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                query.court,
                query.case_type,
                query.case_number,
                query.case_year,
                query.raw_html
            ],
        )?;
        let id = conn.last_insert_rowid();
        debug!("Stored query {} ({} chars of HTML)", id, query.raw_html.chars().count());
        Ok(id)
    }

    pub fn get(&self, id: i64) -> CaseResult<Option<QueryRecord>> {
        let conn = self.conn.lock();
        let record = conn
            .query_row(
                "SELECT id, court, case_type, case_number, case_year, raw_html, created_at
                 FROM queries WHERE id = ?1",
                params![id],
                row_to_record,
            )
            .optional()?;
        Ok(record)
    }

    /// Most recent queries first.
    pub fn recent(&self, limit: usize) -> CaseResult<Vec<QuerySummary>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT id, court, case_type, case_number, case_year, created_at
             FROM queries ORDER BY id DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit as i64], |row| {
            Ok(QuerySummary {
                id: row.get(0)?,
                court: text(row, 1)?,
                case_type: text(row, 2)?,
                case_number: text(row, 3)?,
                case_year: text(row, 4)?,
                created_at: timestamp(row, 5)?,
            })
        })?;

        let mut summaries = Vec::new();
        for row in rows {
            summaries.push(row?);
        }
        Ok(summaries)
    }

    pub fn count(&self) -> CaseResult<i64> {
        let conn = self.conn.lock();
        Ok(conn.query_row("SELECT COUNT(*) FROM queries", [], |row| row.get(0))?)
    }
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<QueryRecord> {
    Ok(QueryRecord {
        id: row.get(0)?,
        court: text(row, 1)?,
        case_type: text(row, 2)?,
        case_number: text(row, 3)?,
        case_year: text(row, 4)?,
        raw_html: text(row, 5)?,
        created_at: timestamp(row, 6)?,
    })
}

/// Columns are nullable TEXT; NULL reads as empty.
fn text(row: &Row<'_>, idx: usize) -> rusqlite::Result<String> {
    Ok(row.get::<_, Option<String>>(idx)?.unwrap_or_default())
}

fn timestamp(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    NaiveDateTime::parse_from_str(&raw, SQLITE_TIMESTAMP)
        .map(|naive| naive.and_utc())
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
