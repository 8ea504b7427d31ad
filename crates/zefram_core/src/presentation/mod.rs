//! Output formats for single framework records.
//!
//! # Responsibility
//! - Write stored CIF text to disk unchanged.
//! - Render the fixed-layout text summary printed by `printframework`.

pub mod cif;
pub mod summary;
