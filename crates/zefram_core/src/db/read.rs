//! Bulk table reader.
//!
//! # Responsibility
//! - Read a whole SQLite table into an in-memory `Table`.
//! - Apply column subset, index column and row limit options.
//!
//! # Invariants
//! - Column order follows the table definition unless a subset is given,
//!   in which case the subset order is kept.
//! - Row order is the storage scan order.
//! - Identifiers are checked against `pragma_table_info` before being
//!   spliced into SQL.

use crate::error::{ZeframError, ZeframResult};
use rusqlite::types::{FromSql, FromSqlResult, ValueRef};
use rusqlite::Connection;
use serde::Serialize;

/// Options understood by [`read_sql_table`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadOptions {
    /// Read only these columns, in this order.
    pub columns: Option<Vec<String>>,
    /// Column to lift out of the data columns into [`Table::index`].
    pub index_col: Option<String>,
    /// Maximum number of rows to read.
    pub limit: Option<u32>,
}

/// One SQLite cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl CellValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Real(value) => Some(*value),
            Self::Integer(value) => Some(*value as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Text cells must be valid UTF-8; anything else is a conversion error.
impl FromSql for CellValue {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        Ok(match value {
            ValueRef::Null => Self::Null,
            ValueRef::Integer(value) => Self::Integer(value),
            ValueRef::Real(value) => Self::Real(value),
            ValueRef::Text(_) => Self::Text(value.as_str()?.to_string()),
            ValueRef::Blob(bytes) => Self::Blob(bytes.to_vec()),
        })
    }
}

/// Tabular in-memory copy of a database table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<String>,
    /// Name of the column held in `index`, when an index column was requested.
    pub index_name: Option<String>,
    pub index: Option<Vec<CellValue>>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Returns every value of one data column, in row order.
    pub fn column(&self, name: &str) -> Option<Vec<&CellValue>> {
        let position = self.column_index(name)?;
        Some(self.rows.iter().map(|row| &row[position]).collect())
    }
}

/// Reads table `table` from `conn` into memory.
///
/// # Errors
/// - `UnknownColumn` when `options` names a column the table lacks.
/// - `Sqlite` for transport failures, including a table that does not exist.
pub fn read_sql_table(
    conn: &Connection,
    table: &str,
    options: &ReadOptions,
) -> ZeframResult<Table> {
    let known_columns = table_columns(conn, table)?;
    let ensure_known = |column: &str| -> ZeframResult<()> {
        if known_columns.iter().any(|known| known == column) {
            Ok(())
        } else {
            Err(ZeframError::UnknownColumn {
                table: table.to_string(),
                column: column.to_string(),
            })
        }
    };

    let mut columns = match &options.columns {
        Some(subset) => {
            for column in subset {
                ensure_known(column)?;
            }
            subset.clone()
        }
        None => known_columns.clone(),
    };

    if let Some(index_col) = &options.index_col {
        ensure_known(index_col)?;
        columns.retain(|column| column != index_col);
    }

    let mut selected: Vec<&str> = Vec::with_capacity(columns.len() + 1);
    if let Some(index_col) = &options.index_col {
        selected.push(index_col.as_str());
    }
    selected.extend(columns.iter().map(String::as_str));

    let select_list = if selected.is_empty() {
        // Keeps the row count when every column was lifted into the index.
        "NULL".to_string()
    } else {
        selected
            .iter()
            .map(|column| quote_identifier(column))
            .collect::<Vec<_>>()
            .join(", ")
    };
    let mut sql = format!("SELECT {select_list} FROM {}", quote_identifier(table));
    if let Some(limit) = options.limit {
        sql.push_str(&format!(" LIMIT {limit}"));
    }

    let data_offset = usize::from(options.index_col.is_some());
    let mut index = options.index_col.as_ref().map(|_| Vec::new());
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query([])?;
    let mut data = Vec::new();

    while let Some(row) = rows.next()? {
        if let Some(index) = index.as_mut() {
            index.push(row.get::<_, CellValue>(0)?);
        }
        let mut values = Vec::with_capacity(columns.len());
        for position in 0..columns.len() {
            values.push(row.get::<_, CellValue>(position + data_offset)?);
        }
        data.push(values);
    }

    Ok(Table {
        name: table.to_string(),
        columns,
        index_name: options.index_col.clone(),
        index,
        rows: data,
    })
}

fn table_columns(conn: &Connection, table: &str) -> ZeframResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1) ORDER BY cid;")?;
    let columns = stmt
        .query_map([table], |row| row.get::<_, String>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(columns)
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
