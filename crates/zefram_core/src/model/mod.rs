//! Framework database records.
//!
//! # Responsibility
//! - Define in-memory shapes for rows of the framework database.
//! - Offer accessors that derive structured values from stored columns.
//!
//! # Invariants
//! - Records mirror storage; accessors never rewrite stored fields.
//! - A `FrameworkCode` always holds exactly three characters.

pub mod framework;
pub mod space_group;
pub mod tatom;
pub mod tiling;
