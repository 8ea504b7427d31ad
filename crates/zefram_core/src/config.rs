//! Database location configuration.
//!
//! # Responsibility
//! - Carry the framework database path explicitly into every session.
//! - Provide the bundled default location for installed builds.
//!
//! # Invariants
//! - No component derives the database path on its own; it always comes
//!   from a `ZeframConfig`.

use std::path::{Path, PathBuf};

/// File name of the shipped framework database.
pub const DEFAULT_DB_FILE_NAME: &str = "frameworks.db";

const SOURCE_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

/// Runtime configuration for framework lookups and table exports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZeframConfig {
    db_path: PathBuf,
}

impl ZeframConfig {
    /// Creates a configuration pointing at an explicit database file.
    pub fn with_db_path(path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: path.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}

impl Default for ZeframConfig {
    /// Points at the bundled `data/frameworks.db`.
    fn default() -> Self {
        Self::with_db_path(bundled_db_path())
    }
}

/// Returns the bundled database location.
///
/// An installed `data/frameworks.db` next to the running executable wins;
/// otherwise the `data/` directory of this crate's source tree is used.
pub fn bundled_db_path() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    bundled_db_path_from(exe_dir.as_deref())
}

fn bundled_db_path_from(exe_dir: Option<&Path>) -> PathBuf {
    if let Some(installed) = exe_dir.map(|dir| dir.join("data").join(DEFAULT_DB_FILE_NAME)) {
        if installed.is_file() {
            return installed;
        }
    }
    Path::new(SOURCE_DATA_DIR).join(DEFAULT_DB_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::{
        bundled_db_path, bundled_db_path_from, ZeframConfig, DEFAULT_DB_FILE_NAME,
        SOURCE_DATA_DIR,
    };
    use std::fs;
    use std::path::Path;

    #[test]
    fn default_config_uses_bundled_path() {
        let config = ZeframConfig::default();
        assert_eq!(config.db_path(), bundled_db_path());
        assert!(config.db_path().ends_with(Path::new("data").join(DEFAULT_DB_FILE_NAME)));
    }

    #[test]
    fn explicit_path_overrides_default() {
        let config = ZeframConfig::with_db_path("/tmp/fixture.db");
        assert_eq!(config.db_path(), Path::new("/tmp/fixture.db"));
    }

    #[test]
    fn installed_database_next_to_executable_wins() {
        let install_dir = tempfile::tempdir().unwrap();
        let data_dir = install_dir.path().join("data");
        fs::create_dir(&data_dir).unwrap();
        fs::write(data_dir.join(DEFAULT_DB_FILE_NAME), b"").unwrap();

        assert_eq!(
            bundled_db_path_from(Some(install_dir.path())),
            data_dir.join(DEFAULT_DB_FILE_NAME)
        );
    }

    #[test]
    fn source_data_dir_is_fallback() {
        let empty_dir = tempfile::tempdir().unwrap();
        let expected = Path::new(SOURCE_DATA_DIR).join(DEFAULT_DB_FILE_NAME);

        assert_eq!(bundled_db_path_from(Some(empty_dir.path())), expected);
        assert_eq!(bundled_db_path_from(None), expected);
    }
}
