//! Framework record and its three-letter code.
//!
//! # Responsibility
//! - Define the canonical `Framework` row shape.
//! - Validate framework codes before they reach storage.
//!
//! # Invariants
//! - `FrameworkCode` length is checked in Unicode scalar values.
//! - Lookups are exact-match; only `FrameworkCode::parse_normalized`
//!   changes letter case.

use crate::error::{ZeframError, ZeframResult};
use crate::model::space_group::SpaceGroup;
use crate::model::tatom::TAtom;
use crate::model::tiling::{NaturalTiling, RingSize};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Validated three-character framework type code, e.g. `LTA`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameworkCode(String);

impl FrameworkCode {
    pub const LEN: usize = 3;

    /// Accepts `code` unchanged when it is exactly three characters long.
    pub fn parse(code: impl Into<String>) -> ZeframResult<Self> {
        let code = code.into();
        if code.chars().count() != Self::LEN {
            return Err(ZeframError::InvalidCode { code });
        }
        Ok(Self(code))
    }

    /// Validates `code`, then upper-cases it the way the command line tools do.
    pub fn parse_normalized(code: &str) -> ZeframResult<Self> {
        let validated = Self::parse(code)?;
        Self::parse(validated.0.to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for FrameworkCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FrameworkCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Unit cell lengths (Å) and angles (degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitCell {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

/// One zeolite framework type.
///
/// Column values come from the IZA and ZEOMICS databases; every value other
/// than `id` may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Framework {
    pub id: i64,
    pub code: String,
    pub name: Option<String>,

    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
    pub gamma: Option<f64>,

    /// Largest cavity diameter, Å.
    pub lcd: Option<f64>,
    /// Pore limiting diameter, Å.
    pub pld: Option<f64>,
    /// Total pore volume, cm³/g. Stored as `tpw_abs`.
    pub tpv_abs: Option<f64>,
    /// Total pore volume, % of cell volume. Stored as `tpw_pct`.
    pub tpv_rel: Option<f64>,
    pub accessible_area: Option<f64>,
    pub accessible_area_m2pg: Option<f64>,
    pub accessible_volume: Option<f64>,
    pub accessible_volume_pct: Option<f64>,
    pub occupiable_area: Option<f64>,
    pub occupiable_area_m2pg: Option<f64>,
    pub occupiable_volume: Option<f64>,
    pub occupiable_volume_pct: Option<f64>,
    pub specific_accessible_area: Option<f64>,
    pub specific_occupiable_area: Option<f64>,
    /// Maximum diameter of a sphere that can diffuse along `a`.
    pub maxdsd_a: Option<f64>,
    pub maxdsd_b: Option<f64>,
    pub maxdsd_c: Option<f64>,
    /// Maximum diameter of a sphere that can be included.
    pub maxdsi: Option<f64>,
    pub rdls: Option<f64>,
    pub td10: Option<f64>,
    pub topological_density: Option<f64>,
    /// T-atoms per 1000 Å³.
    pub framework_density: Option<f64>,

    pub atoms: Option<i64>,
    pub cages: Option<i64>,
    pub channels: Option<i64>,
    pub connections: Option<i64>,
    pub junctions: Option<i64>,
    pub portals: Option<i64>,
    pub channel_dim: Option<i64>,

    pub isinterrupted: Option<bool>,
    pub isdisordered: Option<bool>,

    /// Secondary building units.
    pub sbu: Option<String>,
    /// Full CIF text of the framework structure.
    pub cif: Option<String>,
    pub url_iza: Option<String>,
    pub url_zeomics: Option<String>,

    pub spacegroup_id: Option<i64>,
}

impl Framework {
    /// Returns the unit cell when all six parameters are present.
    pub fn unit_cell(&self) -> Option<UnitCell> {
        Some(UnitCell {
            a: self.a?,
            b: self.b?,
            c: self.c?,
            alpha: self.alpha?,
            beta: self.beta?,
            gamma: self.gamma?,
        })
    }
}

/// Framework together with all of its related rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkDetails {
    pub framework: Framework,
    pub space_group: Option<SpaceGroup>,
    /// Owned exclusively by `framework`.
    pub tatoms: Vec<TAtom>,
    pub ring_sizes: Vec<RingSize>,
    pub natural_tilings: Vec<NaturalTiling>,
}
