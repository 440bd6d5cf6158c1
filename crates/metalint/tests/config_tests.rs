//! Integration tests for configuration overrides.

use chrono::NaiveDate;
use serde_json::json;

use metalint::record::JsonElement;
use metalint::{
    ConfigStore, Ead, Finding, Inspector, Level, Lido, MetalintError, Standard, StandardKind,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

#[test]
fn test_serialized_config_reapplies_unchanged() {
    for standard in [StandardKind::Ead, StandardKind::Lido] {
        let defaults = standard.default_config();
        let serialized = serde_json::to_value(&defaults).unwrap();

        let mut config = standard.default_config();
        config.apply_overrides(&serialized).unwrap();

        assert_eq!(config, defaults, "{}", standard);
    }
}

#[test]
fn test_numeric_strings_are_coerced() {
    let mut config = Lido::default_config();
    config
        .apply_overrides(&json!({"title": {"min_word_num": " 4 ", "max_word_num": 12.9}}))
        .unwrap();

    let title = config.resolve("title", Level::Other).unwrap();
    assert_eq!(title.min_word_num, Some(4));
    assert_eq!(title.max_word_num, Some(12));
}

#[test]
fn test_settings_absent_from_defaults_stay_absent() {
    let mut config = Lido::default_config();
    config
        .apply_overrides(&json!({"title": {"min_num": 2, "ref": true}}))
        .unwrap();

    let title = config.resolve("title", Level::Other).unwrap();
    assert_eq!(title.min_num, None);
    assert!(!title.requires_reference());
}

#[test]
fn test_invalid_values_are_rejected() {
    let mut config = Lido::default_config();

    let err = config
        .apply_overrides(&json!({"title": {"min_word_num": "many"}}))
        .unwrap_err();
    assert!(matches!(err, MetalintError::InvalidSetting { ref key, .. } if key == "min_word_num"));

    let err = config
        .apply_overrides(&json!({"event": {"patterns": {"ref": "(unclosed"}}}))
        .unwrap_err();
    assert!(matches!(err, MetalintError::Pattern { ref pattern, .. } if pattern == "(unclosed"));

    let err = config.apply_overrides(&json!({"title": 5})).unwrap_err();
    assert!(matches!(err, MetalintError::Config(_)));
}

#[test]
fn test_reference_pattern_applies_to_records() {
    let doc = json!({"lido": {"administrativeMetadata": {"recordWrap": {
        "recordType": {"conceptID": "lido00141", "term": "Item"}
    }}}});
    let pattern = r"http://terminology\.lido-schema\.org/lido\d+";

    let mut inspector = Inspector::new(Lido).with_today(today());
    inspector
        .configure(&json!({"record_type": {"patterns": {"ref": pattern}}}))
        .unwrap();
    let report = inspector.inspect(&JsonElement::document(&doc));

    assert_eq!(
        report.records[0].fields["recordType"].findings(),
        &[Finding::PatternMismatch {
            value: "lido00141".to_string(),
            pattern: pattern.to_string(),
        }]
    );
}

#[test]
fn test_default_level_override_reaches_unknown_levels() {
    let doc = json!({"c": [
        {"@level": "otherlevel", "did": {"unittitle": "Two words"}},
        {"@level": "file", "did": {"unittitle": "Two words"}}
    ]});

    let mut inspector = Inspector::new(Ead).with_today(today());
    inspector
        .configure(&json!({"unittitle": {"_": {"min_word_num": 3}}}))
        .unwrap();
    let report = inspector.inspect(&JsonElement::document(&doc));

    assert_eq!(report.records[0].level, Level::Other);
    assert_eq!(
        report.records[0].fields["unittitle"].findings(),
        &[Finding::TooShort]
    );
    assert!(report.records[1].fields["unittitle"].findings().is_empty());
}

#[test]
fn test_replacing_whole_configuration() {
    let config = ConfigStore::new().with_field(
        "title",
        Lido::default_config().field("title").unwrap().clone(),
    );
    let doc = json!({"lido": {"lidoRecID": "obj-1"}});

    let report = Inspector::new(Lido)
        .with_config(config)
        .with_today(today())
        .inspect(&JsonElement::document(&doc));

    assert_eq!(report.summary.fields_inspected, 1);
    assert_eq!(report.summary.fields_not_inspected, 14);
    assert_eq!(Lido::NAME, report.standard);
}
