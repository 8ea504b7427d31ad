//! Connection bootstrap for the framework database.
//!
//! # Responsibility
//! - Open the database file read-only.
//! - Check that all required tables exist before returning the connection.
//!
//! # Invariants
//! - Returned connections cannot write.
//! - Missing, unreadable or non-SQLite files are reported as
//!   `StorageUnavailable`, never as raw SQLite errors.

use super::schema::REQUIRED_TABLES;
use crate::error::{ZeframError, ZeframResult};
use log::{debug, info};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::time::{Duration, Instant};

/// Opens the framework database at `path` in read-only mode.
///
/// # Side effects
/// - Emits `db_open` logging events with duration and status. Failures are
///   logged at debug level; the caller reports the returned error.
///
/// # Errors
/// - `StorageUnavailable` when the file does not exist, cannot be opened,
///   is not a SQLite database or lacks one of the required tables.
pub fn open_db(path: impl AsRef<Path>) -> ZeframResult<Connection> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!(
        "event=db_open module=db status=start path={}",
        path.display()
    );

    match open_read_only(path) {
        Ok(conn) => {
            info!(
                "event=db_open module=db status=ok duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            debug!(
                "event=db_open module=db status=error duration_ms={} error_code=storage_unavailable error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn open_read_only(path: &Path) -> ZeframResult<Connection> {
    if !path.is_file() {
        return Err(unavailable(path, "file not found"));
    }

    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = Connection::open_with_flags(path, flags)
        .map_err(|err| unavailable(path, err.to_string()))?;
    conn.busy_timeout(Duration::from_secs(5))
        .map_err(|err| unavailable(path, err.to_string()))?;

    let missing = missing_tables(&conn).map_err(|err| unavailable(path, err.to_string()))?;
    if !missing.is_empty() {
        return Err(unavailable(
            path,
            format!("missing required tables: {}", missing.join(", ")),
        ));
    }

    Ok(conn)
}

fn missing_tables(conn: &Connection) -> rusqlite::Result<Vec<&'static str>> {
    let mut stmt = conn.prepare(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
    )?;

    let mut missing = Vec::new();
    for table in REQUIRED_TABLES {
        let exists: i64 = stmt.query_row([table], |row| row.get(0))?;
        if exists == 0 {
            missing.push(*table);
        }
    }
    Ok(missing)
}

fn unavailable(path: &Path, reason: impl Into<String>) -> ZeframError {
    ZeframError::StorageUnavailable {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}
