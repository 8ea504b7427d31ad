//! Repository layer over the framework database.
//!
//! # Responsibility
//! - Define read-only data access contracts.
//! - Keep SQL details out of the service and presentation layers.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`RecordNotFound`,
//!   `MultipleRecords`) in addition to transport errors.

pub mod framework_repo;
