//! Unit tests for logging environment selection

use marketlens::logging::is_production;

#[test]
fn test_production_environments_use_json() {
    assert!(is_production("production"));
    assert!(is_production("prod"));
}

#[test]
fn test_other_environments_use_text() {
    assert!(!is_production("sandbox"));
    assert!(!is_production("staging"));
    assert!(!is_production(""));
}
