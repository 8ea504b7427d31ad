//! Scoped database session.
//!
//! A `Session` owns exactly one read-only connection. Dropping the session
//! closes the connection, so each operation acquires and releases storage
//! within its own scope.

use super::open::open_db;
use crate::config::ZeframConfig;
use crate::error::ZeframResult;
use crate::repo::framework_repo::SqliteFrameworkRepository;
use rusqlite::Connection;

pub struct Session {
    conn: Connection,
}

impl Session {
    /// Opens a session against the database named by `config`.
    pub fn open(config: &ZeframConfig) -> ZeframResult<Self> {
        let conn = open_db(config.db_path())?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Framework repository bound to this session's connection.
    pub fn frameworks(&self) -> SqliteFrameworkRepository<'_> {
        SqliteFrameworkRepository::new(&self.conn)
    }
}
