//! Tests for the law runner configuration.

use validity::laws::LawConfig;
use validity::ConfigError;

#[test]
fn test_defaults() {
    let config = LawConfig::default();
    assert_eq!(config.cases, 256);
    assert!(!config.deterministic);
}

#[test]
fn test_variables_override_defaults() {
    let config = LawConfig::from_vars([
        ("VALIDITY_CASES", "32"),
        ("VALIDITY_DETERMINISTIC", "true"),
    ])
    .unwrap();
    assert_eq!(config.cases, 32);
    assert!(config.deterministic);
    assert_eq!(config.max_shrink_iters, LawConfig::default().max_shrink_iters);
}

#[test]
fn test_bad_values_are_rejected() {
    let error = LawConfig::from_vars([("VALIDITY_MAX_REJECTS", "many")]).unwrap_err();
    assert!(matches!(error, ConfigError::Source(_)));

    let error = LawConfig::from_vars([("VALIDITY_CASES", "0")]).unwrap_err();
    assert_eq!(error.to_string(), "VALIDITY_CASES must be at least 1");
}

#[test]
fn test_serde_fills_missing_fields() {
    let config: LawConfig = serde_json::from_str(r#"{"cases": 10}"#).unwrap();
    assert_eq!(config, LawConfig::default().with_cases(10));

    let json = serde_json::to_string(&LawConfig::default().deterministic()).unwrap();
    let back: LawConfig = serde_json::from_str(&json).unwrap();
    assert!(back.deterministic);
}
