//! Content-configuration wire-format tests.
//!
//! The content object arrives from the host editor as camelCase JSON; these
//! tests pin the field names, the defaults for partial objects, and the
//! validation rules.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use formfield::{ContentConfig, FormatConfig, InputType, Precision, SymbolPosition};

#[test]
fn test_serializes_camel_case() {
    let json = serde_json::to_string(&ContentConfig::default()).unwrap();
    assert!(json.contains("\"type\":\"text\""));
    assert!(json.contains("\"debounceDelay\":500"));
    assert!(json.contains("\"displayPassword\":false"));
    assert!(json.contains("\"symbolPosition\":\"prefix\""));
    assert!(json.contains("\"decimalPlaces\":2"));
}

#[test]
fn test_round_trip() {
    let content = ContentConfig {
        input_type: InputType::Currency,
        name: "price".to_string(),
        required: true,
        placeholder: "0.00".to_string(),
        debounce: true,
        debounce_delay: 250,
        currency: FormatConfig {
            symbol: "€".to_string(),
            symbol_position: SymbolPosition::Suffix,
            decimal_separator: ',',
            thousands_separator: Some('.'),
            ..FormatConfig::default()
        },
        ..ContentConfig::default()
    };
    let json = serde_json::to_string(&content).unwrap();
    let back: ContentConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, content);
}

#[test]
fn test_full_editor_object() {
    // A realistic content object, including fields this crate does not
    // model (the host sends the whole panel state).
    let content: ContentConfig = serde_json::from_str(
        r#"{
            "type": "currency",
            "name": "amount",
            "required": true,
            "readonly": false,
            "placeholder": "Enter an amount",
            "value": "1234.5",
            "debounce": true,
            "debounceDelay": 300,
            "currency": {
                "symbol": "$",
                "symbolPosition": "prefix",
                "showSymbol": true,
                "decimalPlaces": 2,
                "decimalSeparator": ".",
                "thousandsSeparator": ","
            },
            "globalStyle": { "fontSize": "15px", "color": "black" }
        }"#,
    )
    .unwrap();
    assert_eq!(content.input_type, InputType::Currency);
    assert_eq!(content.value, "1234.5");
    assert_eq!(content.debounce_delay, 300);
    assert!(content.validate().is_ok());
}

#[test]
fn test_partial_object_gets_defaults() {
    let content: ContentConfig = serde_json::from_str(r#"{"type":"decimal"}"#).unwrap();
    assert_eq!(content.input_type, InputType::Decimal);
    assert_eq!(content.precision, Precision::new(1));
    assert_eq!(content.debounce_delay, 500);
    assert!(!content.debounce);
}

#[test]
fn test_precision_wire_strings() {
    for (wire, decimals) in [
        ("0.1", 1usize),
        ("0.01", 2),
        ("0.001", 3),
        ("0.00000001", 8),
    ] {
        let content: ContentConfig =
            serde_json::from_str(&format!(r#"{{"precision":"{wire}"}}"#)).unwrap();
        assert_eq!(content.precision.decimals(), decimals, "wire {wire}");
    }
}

#[test]
fn test_empty_separator_means_no_grouping() {
    let content: ContentConfig =
        serde_json::from_str(r#"{"currency":{"thousandsSeparator":""}}"#).unwrap();
    assert_eq!(content.currency.thousands_separator, None);
    assert!(content.validate().is_ok());
}

#[test]
fn test_null_separator_means_no_grouping() {
    let content: ContentConfig =
        serde_json::from_str(r#"{"currency":{"thousandsSeparator":null}}"#).unwrap();
    assert_eq!(content.currency.thousands_separator, None);
}

#[test]
fn test_separator_clash_fails_validation() {
    let content: ContentConfig = serde_json::from_str(
        r#"{"currency":{"decimalSeparator":",","thousandsSeparator":","}}"#,
    )
    .unwrap();
    assert!(content.validate().is_err());
}

#[test]
fn test_multi_char_separator_is_malformed() {
    let result: Result<ContentConfig, _> =
        serde_json::from_str(r#"{"currency":{"decimalSeparator":"ab"}}"#);
    assert!(result.is_err());
}

#[test]
fn test_unknown_type_is_malformed() {
    let result: Result<ContentConfig, _> = serde_json::from_str(r#"{"type":"color"}"#);
    assert!(result.is_err());
}
