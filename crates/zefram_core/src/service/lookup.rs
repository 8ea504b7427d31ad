//! Framework lookup use-cases.
//!
//! # Responsibility
//! - Resolve one code or an ordered list of codes to framework records.
//! - Validate every code before any storage access.
//! - Scope one database session to each top-level call.
//!
//! # Invariants
//! - List results keep input order, one record per input code.
//! - The session opened by a call is closed before the call returns.

use crate::config::ZeframConfig;
use crate::db::Session;
use crate::error::ZeframResult;
use crate::model::framework::{Framework, FrameworkCode, FrameworkDetails};
use crate::repo::framework_repo::{FrameworkRepository, SqliteFrameworkRepository};
use log::debug;
use std::time::Instant;

/// Codes to resolve: one string, or a list resolved element-wise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameworkQuery {
    Single(String),
    Many(Vec<String>),
}

impl From<&str> for FrameworkQuery {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for FrameworkQuery {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for FrameworkQuery {
    fn from(value: Vec<String>) -> Self {
        Self::Many(value)
    }
}

impl From<Vec<&str>> for FrameworkQuery {
    fn from(value: Vec<&str>) -> Self {
        Self::Many(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for FrameworkQuery {
    fn from(value: &[&str]) -> Self {
        Self::Many(value.iter().map(|code| code.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FrameworkQuery {
    fn from(value: [&str; N]) -> Self {
        Self::Many(value.iter().map(|code| code.to_string()).collect())
    }
}

/// Result shape mirrors the query shape.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameworkLookup {
    One(Framework),
    Many(Vec<Framework>),
}

impl FrameworkLookup {
    /// Flattens either shape into a list.
    pub fn into_vec(self) -> Vec<Framework> {
        match self {
            Self::One(framework) => vec![framework],
            Self::Many(frameworks) => frameworks,
        }
    }

    /// Returns the record of a single-code lookup.
    pub fn into_single(self) -> Option<Framework> {
        match self {
            Self::One(framework) => Some(framework),
            Self::Many(_) => None,
        }
    }
}

/// Use-case wrapper for framework lookups over any repository.
pub struct FrameworkService<R: FrameworkRepository> {
    repo: R,
}

impl<R: FrameworkRepository> FrameworkService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn get_framework(&self, code: &FrameworkCode) -> ZeframResult<Framework> {
        self.repo.get_framework(code)
    }

    /// Resolves `codes` in order; the first failure aborts the whole list.
    pub fn get_frameworks(&self, codes: &[FrameworkCode]) -> ZeframResult<Vec<Framework>> {
        codes
            .iter()
            .map(|code| self.repo.get_framework(code))
            .collect()
    }

    /// Resolves `code` and eagerly fetches every relation.
    pub fn get_framework_details(&self, code: &FrameworkCode) -> ZeframResult<FrameworkDetails> {
        let framework = self.repo.get_framework(code)?;
        self.repo.load_details(framework)
    }
}

/// Resolves `query` against the database named by `config`.
///
/// # Errors
/// - `InvalidCode` for any code that is not exactly three characters; raised
///   before the database is opened.
/// - `RecordNotFound` / `MultipleRecords` when a code does not resolve to
///   exactly one row.
/// - `StorageUnavailable` when the database cannot be opened.
///
/// An empty list resolves to an empty list without opening the database.
pub fn framework(
    config: &ZeframConfig,
    query: impl Into<FrameworkQuery>,
) -> ZeframResult<FrameworkLookup> {
    match query.into() {
        FrameworkQuery::Single(code) => {
            let code = FrameworkCode::parse(code)?;
            with_service(config, "single", |service| service.get_framework(&code))
                .map(FrameworkLookup::One)
        }
        FrameworkQuery::Many(codes) => {
            let codes = codes
                .into_iter()
                .map(|code| FrameworkCode::parse(code))
                .collect::<ZeframResult<Vec<_>>>()?;
            if codes.is_empty() {
                return Ok(FrameworkLookup::Many(Vec::new()));
            }
            with_service(config, "many", |service| service.get_frameworks(&codes))
                .map(FrameworkLookup::Many)
        }
    }
}

/// Resolves a single code.
pub fn get_framework(config: &ZeframConfig, code: &str) -> ZeframResult<Framework> {
    let code = FrameworkCode::parse(code)?;
    with_service(config, "single", |service| service.get_framework(&code))
}

/// Resolves a single code together with its space group, T-atoms, ring sizes
/// and natural tilings.
pub fn get_framework_details(
    config: &ZeframConfig,
    code: &str,
) -> ZeframResult<FrameworkDetails> {
    let code = FrameworkCode::parse(code)?;
    with_service(config, "details", |service| service.get_framework_details(&code))
}

fn with_service<T>(
    config: &ZeframConfig,
    mode: &str,
    op: impl FnOnce(&FrameworkService<SqliteFrameworkRepository<'_>>) -> ZeframResult<T>,
) -> ZeframResult<T> {
    let started_at = Instant::now();
    let session = Session::open(config)?;
    let service = FrameworkService::new(session.frameworks());

    let result = op(&service);
    match &result {
        Ok(_) => debug!(
            "event=framework_lookup module=service status=ok mode={} duration_ms={}",
            mode,
            started_at.elapsed().as_millis()
        ),
        Err(err) => debug!(
            "event=framework_lookup module=service status=error mode={} duration_ms={} error={}",
            mode,
            started_at.elapsed().as_millis(),
            err
        ),
    }
    result
}
