//! SQLite storage access for the framework database.
//!
//! # Responsibility
//! - Open read-only connections to the shipped `frameworks.db`.
//! - Verify that the tables this crate queries are present.
//! - Provide scoped sessions and a generic bulk table reader.
//!
//! # Invariants
//! - Connections are opened with `SQLITE_OPEN_READ_ONLY`; nothing here writes.
//! - Every failure to reach a usable database maps to
//!   `ZeframError::StorageUnavailable`.

mod open;
mod read;
pub mod schema;
mod session;

pub use open::open_db;
pub use read::{read_sql_table, CellValue, ReadOptions, Table};
pub use session::Session;
