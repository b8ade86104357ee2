//! Configuration loaded from disk

use crate::common::*;
use tempfile::TempDir;
use typeval::CONFIG_FILE_NAME;

#[test]
fn precision_from_config_file_drives_lenient_floats() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "precision = 17\nlog_notices = false\n").unwrap();

    let config = CoercionConfig::from_file(&path).unwrap();
    let mut ctx = ConversionContext::with_config(config);
    let s = TypedString::new_in(0.1, false, &mut ctx).unwrap();
    assert_eq!(s, "0.10000000000000001");
}

#[test]
fn default_file_matches_default_behavior() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    CoercionConfig::write_default_if_missing(&path).unwrap();

    let mut ctx = ConversionContext::with_config(CoercionConfig::from_file(&path).unwrap());
    let s = TypedString::new_in(0.9999999999999999, false, &mut ctx).unwrap();
    assert_eq!(s, "1");
}

#[test]
fn invalid_precision_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "precision = 40\n").unwrap();

    let err = CoercionConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().contains(CONFIG_FILE_NAME));
}
