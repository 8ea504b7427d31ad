//! Core use-case services.
//!
//! # Responsibility
//! - Validate caller input and scope one session per operation.
//! - Keep callers decoupled from connection handling.

pub mod lookup;
pub mod table_export;
