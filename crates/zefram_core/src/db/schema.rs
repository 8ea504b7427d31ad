//! Table names of the framework database.
//!
//! The database is produced offline; this module only names what the
//! read path depends on.

pub const FRAMEWORKS_TABLE: &str = "frameworks";
pub const SPACEGROUPS_TABLE: &str = "spacegroups";
pub const TATOMS_TABLE: &str = "tatoms";
pub const RINGSIZES_TABLE: &str = "ringsizes";
pub const NATURALTILINGS_TABLE: &str = "naturaltilings";
pub const FW_RINGS_TABLE: &str = "fw_rings";
pub const FW_TILINGS_TABLE: &str = "fw_tilings";

/// Tables that must exist before a connection is handed out.
pub const REQUIRED_TABLES: &[&str] = &[
    FRAMEWORKS_TABLE,
    SPACEGROUPS_TABLE,
    TATOMS_TABLE,
    RINGSIZES_TABLE,
    NATURALTILINGS_TABLE,
    FW_RINGS_TABLE,
    FW_TILINGS_TABLE,
];
