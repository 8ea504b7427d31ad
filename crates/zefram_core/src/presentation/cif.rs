//! CIF file export.
//!
//! # Invariants
//! - The written file holds exactly the stored `cif` text; no bytes are
//!   added, trimmed or re-encoded.
//! - Existing files with the same name are overwritten.

use crate::error::{ZeframError, ZeframResult};
use crate::model::framework::Framework;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// File name used for a framework's CIF export, e.g. `LTA.cif`.
pub fn cif_file_name(code: &str) -> String {
    format!("{code}.cif")
}

/// Writes `framework.cif` to `<dir>/<CODE>.cif` and returns the path written.
///
/// # Errors
/// - `MissingField` when the framework has no stored CIF text.
/// - `Io` when the file cannot be written.
pub fn write_cif(framework: &Framework, dir: impl AsRef<Path>) -> ZeframResult<PathBuf> {
    let cif = framework
        .cif
        .as_deref()
        .ok_or_else(|| ZeframError::MissingField {
            code: framework.code.clone(),
            field: "cif",
        })?;

    let path = dir.as_ref().join(cif_file_name(&framework.code));
    fs::write(&path, cif.as_bytes())?;
    info!(
        "event=cif_write module=presentation status=ok code={} bytes={}",
        framework.code,
        cif.len()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::{cif_file_name, write_cif};
    use crate::error::ZeframError;
    use crate::model::framework::Framework;

    #[test]
    fn file_name_appends_extension() {
        assert_eq!(cif_file_name("MFI"), "MFI.cif");
    }

    #[test]
    fn missing_cif_is_reported() {
        let framework = Framework {
            code: "ABW".to_string(),
            ..Framework::default()
        };
        let dir = tempfile::tempdir().unwrap();
        let err = write_cif(&framework, dir.path()).unwrap_err();
        assert!(matches!(err, ZeframError::MissingField { field: "cif", .. }));
        assert!(!dir.path().join("ABW.cif").exists());
    }
}
