//! Ring sizes and natural tilings linked to frameworks through join tables.

use serde::{Deserialize, Serialize};

/// Number of T-atoms forming a ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingSize {
    pub id: i64,
    pub size: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaturalTiling {
    pub id: i64,
    /// Tiling name as listed by the IZA structure commission.
    pub name: String,
}
