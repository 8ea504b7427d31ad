//! Symmetry-unique tetrahedral atom site.
//!
//! # Invariants
//! - `csq` keeps the stored pipe-delimited text; `coord_seq` parses it on
//!   every call and never caches or rewrites it.

use crate::error::{ZeframError, ZeframResult};
use serde::{Deserialize, Serialize};

const CSQ_DELIMITER: char = '|';

/// T-atom site belonging to exactly one framework.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TAtom {
    pub id: i64,
    pub framework_id: i64,
    pub name: Option<String>,
    /// Fractional coordinates.
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub multiplicity: Option<i64>,
    pub site_symmetry: Option<String>,
    pub sym_restrictions: Option<String>,
    pub vertex_symbol: Option<String>,
    /// Coordination sequence as stored, e.g. `4|9|17|29`.
    pub csq: Option<String>,
}

impl TAtom {
    /// Parses the stored coordination sequence into its terms.
    ///
    /// A missing or blank `csq` yields an empty sequence.
    ///
    /// # Errors
    /// - `InvalidCoordinationSequence` when any term is not a non-negative integer.
    pub fn coord_seq(&self) -> ZeframResult<Vec<u32>> {
        let Some(raw) = self.csq.as_deref() else {
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        raw.split(CSQ_DELIMITER)
            .map(|term| {
                term.trim()
                    .parse::<u32>()
                    .map_err(|_| ZeframError::InvalidCoordinationSequence {
                        value: raw.to_string(),
                    })
            })
            .collect()
    }

    /// Returns `[x, y, z]` when all three coordinates are present.
    pub fn xyz(&self) -> Option<[f64; 3]> {
        Some([self.x?, self.y?, self.z?])
    }
}
