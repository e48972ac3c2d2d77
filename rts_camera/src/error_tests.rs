//! Unit tests for error.rs

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_invalid_config_display() {
    let err = Error::InvalidConfig("EdgeMoveWidth must be >= 0".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid config"));
    assert!(display.contains("EdgeMoveWidth"));
}

#[test]
fn test_config_parse_display() {
    let err = Error::ConfigParse("expected `=`".to_string());
    assert_eq!(format!("{}", err), "Config parse error: expected `=`");
}

#[test]
fn test_io_display() {
    let err = Error::Io("camera.toml: permission denied".to_string());
    assert!(format!("{}", err).contains("permission denied"));
}

#[test]
fn test_unknown_role_display() {
    let err = Error::UnknownCameraRole("minimap".to_string());
    assert_eq!(format!("{}", err), "Unknown camera role: minimap");
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::Io("x".to_string());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug_names_variant() {
    assert!(format!("{:?}", Error::InvalidConfig("a".into())).contains("InvalidConfig"));
    assert!(format!("{:?}", Error::ConfigParse("a".into())).contains("ConfigParse"));
    assert!(format!("{:?}", Error::UnknownCameraRole("a".into())).contains("UnknownCameraRole"));
}

// ============================================================================
// RESULT PROPAGATION
// ============================================================================

#[test]
fn test_error_propagation_with_question_mark() {
    fn inner() -> Result<f32> {
        Err(Error::InvalidConfig("fov".to_string()))
    }

    fn outer() -> Result<f32> {
        let v = inner()?;
        Ok(v * 2.0)
    }

    match outer() {
        Err(Error::InvalidConfig(msg)) => assert_eq!(msg, "fov"),
        other => panic!("unexpected result: {:?}", other),
    }
}
