#![allow(dead_code)]

use rusqlite::Connection;
use std::path::PathBuf;
use tempfile::TempDir;
use zefram_core::ZeframConfig;

pub const FIXTURE_SQL: &str = include_str!("../fixtures/frameworks.sql");

/// Fixture database living in its own temp directory.
pub struct FixtureDb {
    pub dir: TempDir,
    pub path: PathBuf,
    pub config: ZeframConfig,
}

pub fn fixture_db() -> FixtureDb {
    fixture_db_with("")
}

/// Builds the fixture database and then runs `extra_sql` against it.
pub fn fixture_db_with(extra_sql: &str) -> FixtureDb {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frameworks.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(FIXTURE_SQL).unwrap();
    if !extra_sql.is_empty() {
        conn.execute_batch(extra_sql).unwrap();
    }
    drop(conn);

    let config = ZeframConfig::with_db_path(&path);
    FixtureDb { dir, path, config }
}

pub fn missing_db_config() -> (TempDir, ZeframConfig) {
    let dir = tempfile::tempdir().unwrap();
    let config = ZeframConfig::with_db_path(dir.path().join("absent.db"));
    (dir, config)
}
