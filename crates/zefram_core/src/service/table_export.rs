//! Whole-table export.
//!
//! # Responsibility
//! - Gate table exports behind a fixed allow-list.
//! - Forward read options untouched to the bulk reader.

use crate::config::ZeframConfig;
use crate::db::schema::FRAMEWORKS_TABLE;
use crate::db::{read_sql_table, ReadOptions, Session, Table};
use crate::error::{ZeframError, ZeframResult};
use log::info;
use std::time::Instant;

/// Tables that may be exported.
pub const EXPORTABLE_TABLES: &[&str] = &[FRAMEWORKS_TABLE];

/// Reads table `name` into memory.
///
/// # Errors
/// - `UnsupportedTable` when `name` is not in [`EXPORTABLE_TABLES`]; raised
///   before the database is opened.
/// - Errors of [`read_sql_table`] for invalid `options`.
pub fn get_table(
    config: &ZeframConfig,
    name: &str,
    options: &ReadOptions,
) -> ZeframResult<Table> {
    if !EXPORTABLE_TABLES.contains(&name) {
        return Err(ZeframError::UnsupportedTable {
            name: name.to_string(),
            supported: EXPORTABLE_TABLES,
        });
    }

    let started_at = Instant::now();
    let session = Session::open(config)?;
    let table = read_sql_table(session.connection(), name, options)?;
    info!(
        "event=table_export module=service status=ok table={} rows={} columns={} duration_ms={}",
        name,
        table.len(),
        table.columns.len(),
        started_at.elapsed().as_millis()
    );
    Ok(table)
}
