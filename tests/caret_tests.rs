//! Caret preservation scenarios across live re-formats.
//!
//! Each scenario simulates what the widget does on an input event: take the
//! field text as the browser left it, mask it, then recompute the caret so
//! the digit under edit stays adjacent to it.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use formfield::caret::preserve_caret;
use formfield::mask::{format_currency, MaskMode};
use formfield::FormatConfig;

/// Insert `digit` at `caret` (char offset) the way a keystroke would, then
/// mask and recompute the caret.
fn type_char(text: &str, caret: usize, digit: char, config: &FormatConfig) -> (String, usize) {
    let mut typed: Vec<char> = text.chars().collect();
    typed.insert(caret, digit);
    let typed: String = typed.into_iter().collect();
    let masked = format_currency(&typed, config, MaskMode::Typing);
    let new_caret = preserve_caret(&typed, caret + 1, &masked, config);
    (masked, new_caret)
}

#[test]
fn test_typing_a_number_keeps_caret_at_end() {
    let config = FormatConfig::default();
    let mut text = String::new();
    let mut caret = 0;
    for digit in ['1', '2', '3', '4', '5', '6', '7'] {
        let (next, next_caret) = type_char(&text, caret, digit, &config);
        assert_eq!(next_caret, next.chars().count(), "after typing {digit} into {text:?}");
        text = next;
        caret = next_caret;
    }
    assert_eq!(text, "1,234,567");
}

#[test]
fn test_inserting_mid_number_stays_at_typed_digit() {
    let config = FormatConfig::default();
    // Caret between ',' and '2' in "1,234"; user types '9'.
    let (masked, caret) = type_char("1,234", 2, '9', &config);
    assert_eq!(masked, "19,234");
    // Caret sits right after the '9', not at the string end.
    assert_eq!(caret, 2);
    assert_ne!(caret, masked.chars().count());
}

#[test]
fn test_insertion_that_spawns_new_separator() {
    let config = FormatConfig::default();
    // "123,456" -> type '9' after the '1': "1923,456" masks to "1,923,456".
    let (masked, caret) = type_char("123,456", 1, '9', &config);
    assert_eq!(masked, "1,923,456");
    // After the '9' (the separator in front of it shifts the offset).
    assert_eq!(caret, 3);
}

#[test]
fn test_deleting_a_digit_collapses_grouping() {
    let config = FormatConfig::default();
    // Backspacing the '3' of "1,234" leaves "1,24" with the caret at 3.
    let masked = format_currency("1,24", &config, MaskMode::Typing);
    assert_eq!(masked, "124");
    assert_eq!(preserve_caret("1,24", 3, &masked, &config), 2);
}

#[test]
fn test_fraction_caret_tracks_separator() {
    let config = FormatConfig::default();
    // Typing '5' after the '.' of "1234."; grouping appears on the left.
    let (masked, caret) = type_char("1234.", 5, '5', &config);
    assert_eq!(masked, "1,234.5");
    assert_eq!(caret, 7);
}

#[test]
fn test_fraction_caret_clamps_on_truncation() {
    let config = FormatConfig::default();
    // Typing a third fraction digit that the mask drops.
    let (masked, caret) = type_char("1.99", 4, '9', &config);
    assert_eq!(masked, "1.99");
    assert_eq!(caret, 4);
}

#[test]
fn test_european_fraction_entry() {
    let config = FormatConfig {
        decimal_separator: ',',
        thousands_separator: Some('.'),
        ..FormatConfig::default()
    };
    // "1234," + '5' -> "1.234,5" with the caret at the end.
    let (masked, caret) = type_char("1234,", 5, '5', &config);
    assert_eq!(masked, "1.234,5");
    assert_eq!(caret, 7);
}

#[test]
fn test_caret_at_field_start() {
    let config = FormatConfig::default();
    assert_eq!(preserve_caret("1,234", 0, "1,234", &config), 0);
}
