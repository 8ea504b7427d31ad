mod common;

use common::{fixture_db, fixture_db_with};
use std::fs;
use zefram_core::{format_summary, get_framework, write_cif, ZeframError};

#[test]
fn written_cif_equals_stored_text_byte_for_byte() {
    let db = fixture_db();
    let out_dir = tempfile::tempdir().unwrap();

    let lta = get_framework(&db.config, "LTA").unwrap();
    let path = write_cif(&lta, out_dir.path()).unwrap();

    assert_eq!(path, out_dir.path().join("LTA.cif"));
    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, "data_LTA\n_cell_length_a 23.8000\n");
    assert_eq!(Some(written.as_str()), lta.cif.as_deref());
}

#[test]
fn cif_without_trailing_newline_is_not_padded() {
    let db = fixture_db();
    let out_dir = tempfile::tempdir().unwrap();

    let abc = get_framework(&db.config, "ABC").unwrap();
    let path = write_cif(&abc, out_dir.path()).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes, b"data_ABC\n_cell_length_c 101.685".to_vec());
}

#[test]
fn existing_cif_file_is_overwritten() {
    let db = fixture_db();
    let out_dir = tempfile::tempdir().unwrap();
    let target = out_dir.path().join("MFI.cif");
    fs::write(&target, "stale contents that are longer than the new file\n".repeat(20)).unwrap();

    let mfi = get_framework(&db.config, "MFI").unwrap();
    write_cif(&mfi, out_dir.path()).unwrap();

    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        mfi.cif.expect("MFI has CIF text")
    );
}

#[test]
fn non_utf8_cif_is_an_error_and_writes_nothing() {
    let db = fixture_db_with(
        "INSERT INTO frameworks (id, code, name, cif)
         VALUES (20, 'BAD', 'Broken text', CAST(X'646174615FFF0A' AS TEXT));",
    );
    let out_dir = tempfile::tempdir().unwrap();

    let err = get_framework(&db.config, "BAD").unwrap_err();
    assert!(matches!(err, ZeframError::Sqlite(_)), "unexpected error: {err}");
    assert!(!out_dir.path().join("BAD.cif").exists());
}

#[test]
fn write_into_missing_directory_is_io_error() {
    let db = fixture_db();
    let out_dir = tempfile::tempdir().unwrap();

    let lta = get_framework(&db.config, "LTA").unwrap();
    let err = write_cif(&lta, out_dir.path().join("missing")).unwrap_err();
    assert!(matches!(err, ZeframError::Io(_)));
}

#[test]
fn summary_of_stored_framework_uses_fixed_layout() {
    let db = fixture_db();

    let abc = get_framework(&db.config, "ABC").unwrap();
    let summary = format_summary(&abc).unwrap();
    let lines: Vec<_> = summary.lines().collect();

    assert_eq!(
        lines[0],
        "=======================ABC========================"
    );
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "Cell parameters");
    assert_eq!(lines[3], "\ta= 24.345 Å  b= 24.345 Å  c=101.685 Å");
    assert_eq!(lines[4], "\tα= 90.000 °  β= 90.000 °  γ= 90.000 °");
}

#[test]
fn summary_of_incomplete_framework_is_missing_field() {
    let db = fixture_db();

    let zzz = get_framework(&db.config, "ZZZ").unwrap();
    assert!(matches!(
        format_summary(&zzz),
        Err(ZeframError::MissingField { .. })
    ));
}
