#![allow(clippy::float_cmp)]

use super::*;

/// # Safety
/// Tests touching the environment must not run concurrently with each other.
unsafe fn clear_grid_env() {
    unsafe {
        std::env::remove_var("GRID_HEIGHT");
        std::env::remove_var("GRID_WIDTH");
        std::env::remove_var("GRID_PIXEL_SIZE");
        std::env::remove_var("GRID_LABEL_MARGIN");
    }
}

#[test]
fn default_matches_classic_grid() {
    let cfg = GridConfig::default();
    assert_eq!(cfg, GridConfig::new(40, 75, 20.0, 15.0));
}

#[test]
fn from_json_fills_missing_fields() {
    let cfg = GridConfig::from_json(r#"{"height": 10, "pixel_size": 8}"#).unwrap();
    assert_eq!(cfg.height, 10);
    assert_eq!(cfg.width, 75);
    assert_eq!(cfg.pixel_size, 8.0);
    assert_eq!(cfg.label_margin, 15.0);
}

#[test]
fn from_json_rejects_negative_height() {
    let err = GridConfig::from_json(r#"{"height": -1}"#).unwrap_err();
    assert!(matches!(err, GridError::Config(_)));
}

#[test]
fn from_json_rejects_garbage() {
    assert!(GridConfig::from_json("not json").is_err());
}

// Env cases live in one test so they cannot race each other.
#[test]
fn from_env_defaults_overrides_and_errors() {
    unsafe { clear_grid_env() };
    assert_eq!(GridConfig::from_env().unwrap(), GridConfig::default());

    unsafe {
        std::env::set_var("GRID_HEIGHT", "12");
        std::env::set_var("GRID_WIDTH", " 30 ");
        std::env::set_var("GRID_PIXEL_SIZE", "9.5");
        std::env::set_var("GRID_LABEL_MARGIN", "0");
    }
    assert_eq!(GridConfig::from_env().unwrap(), GridConfig::new(12, 30, 9.5, 0.0));

    unsafe { std::env::set_var("GRID_HEIGHT", "tall") };
    let err = GridConfig::from_env().unwrap_err();
    assert_eq!(err.to_string(), "config parse error: invalid GRID_HEIGHT: tall");

    unsafe { clear_grid_env() };
}
