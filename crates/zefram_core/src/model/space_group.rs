//! Crystallographic space group record.

use serde::{Deserialize, Serialize};

/// Space group shared by any number of frameworks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceGroup {
    pub id: i64,
    /// Hermann-Mauguin symbol, e.g. `Fm-3c`.
    pub name: Option<String>,
    /// Index in International Tables for Crystallography, Volume A.
    pub number: Option<i64>,
    pub cell_setting: Option<String>,
    /// Coordinate system code.
    pub cs_code: Option<String>,
}
