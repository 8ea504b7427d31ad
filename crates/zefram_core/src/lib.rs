//! Read access to the zeolite framework database.
//!
//! Frameworks are looked up by their three-letter IZA code; related space
//! groups, T-atoms, ring sizes and natural tilings are fetched explicitly.

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod model;
pub mod presentation;
pub mod repo;
pub mod service;

pub use config::ZeframConfig;
pub use db::{CellValue, ReadOptions, Session, Table};
pub use error::{ZeframError, ZeframResult};
pub use logging::{default_log_level, init_logging};
pub use model::framework::{Framework, FrameworkCode, FrameworkDetails, UnitCell};
pub use model::space_group::SpaceGroup;
pub use model::tatom::TAtom;
pub use model::tiling::{NaturalTiling, RingSize};
pub use presentation::cif::{cif_file_name, write_cif};
pub use presentation::summary::format_summary;
pub use repo::framework_repo::{FrameworkRepository, SqliteFrameworkRepository};
pub use service::lookup::{
    framework, get_framework, get_framework_details, FrameworkLookup, FrameworkQuery,
    FrameworkService,
};
pub use service::table_export::{get_table, EXPORTABLE_TABLES};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
