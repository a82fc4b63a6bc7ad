use crate::error::ProseGuardError;
use crate::rules::RuleDef;

use super::super::{Config, VolumeConfig};
use super::*;

#[test]
fn default_config_is_valid() {
    assert!(validate_semantics(&Config::default()).is_ok());
}

#[test]
fn malformed_style_pattern_is_fatal() {
    let mut config = Config::default();
    config.style.rules.push(RuleDef::new("[unclosed", "broken"));

    let result = validate_semantics(&config);
    assert!(matches!(
        result,
        Err(ProseGuardError::InvalidPattern { pattern, .. }) if pattern == "[unclosed"
    ));
}

#[test]
fn malformed_marker_pattern_is_fatal() {
    let mut config = Config::default();
    config.pov.markers.push("(?P<".to_string());
    assert!(validate_semantics(&config).is_err());
}

#[test]
fn malformed_exclude_glob_is_fatal() {
    let mut config = Config::default();
    config.scan.exclude.push("[bad".to_string());
    assert!(matches!(
        validate_semantics(&config),
        Err(ProseGuardError::InvalidGlob { .. })
    ));
}

#[test]
fn inverted_progress_targets_rejected() {
    let mut config = Config::default();
    config.progress.target_min = 500_000;
    config.progress.target_max = 400_000;
    assert!(matches!(
        validate_semantics(&config),
        Err(ProseGuardError::Config(_))
    ));
}

#[test]
fn empty_volume_path_rejected() {
    let mut config = Config::default();
    config.progress.volumes.push(VolumeConfig {
        name: "卷一".to_string(),
        path: String::new(),
        expected: None,
    });
    assert!(validate_semantics(&config).is_err());
}
