//! Integration tests for export pre-flight validation and atomic replace.

use std::io::Write;
use std::path::PathBuf;

use quakeprep::export::{validate_export_path, write_atomically};
use quakeprep::util::error::PrepError;

#[test]
fn validate_export_path_valid_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quakes.csv");
    let result = validate_export_path(&path);
    assert!(result.is_ok(), "Temp dir should be writable: {result:?}");
}

#[test]
fn validate_export_path_nonexistent_directory() {
    let path = PathBuf::from("/nonexistent_dir_12345/output.csv");
    let result = validate_export_path(&path);
    let msg = result.unwrap_err().to_string();
    assert!(
        msg.contains("does not exist"),
        "Should indicate dir missing: {msg}"
    );
}

#[test]
fn validate_export_path_bare_filename_uses_cwd() {
    assert!(validate_export_path(&PathBuf::from("just_a_filename.csv")).is_ok());
}

#[test]
fn atomic_write_replaces_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    std::fs::write(&path, "old").unwrap();

    write_atomically(&path, |w| Ok(w.write_all(b"new")?)).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
}

#[test]
fn failed_write_leaves_destination_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    std::fs::write(&path, "old").unwrap();

    let result = write_atomically(&path, |w| {
        w.write_all(b"partial")?;
        Err(PrepError::Export("simulated failure".into()))
    });
    assert!(result.is_err());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "old");
    // No temporary files left behind.
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}
