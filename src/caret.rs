//! Caret preservation across live re-formatting.
//!
//! Re-masking the field on every input event rewrites the text under the
//! caret; without correction the browser snaps the caret to the end of the
//! field whenever a grouping separator is inserted or removed. The fix:
//! anchor the caret to the count of digits typed before it, which masking
//! never changes, and re-locate that anchor in the masked text.
//!
//! All offsets are char offsets. Digits and separators are ASCII and the
//! symbol never appears in the editing-phase string, so these coincide with
//! the UTF-16 offsets the selection API uses.

use crate::config::FormatConfig;
use crate::mask::separator_position;

/// Compute the caret offset in `after` (the re-masked text) equivalent to
/// `caret` in `before` (the text as it stood when the input event fired).
///
/// A caret sitting after the decimal separator keeps its distance from it;
/// otherwise the caret lands immediately after the same number of digits it
/// followed before re-masking. The result is clamped to `after`'s bounds.
pub fn preserve_caret(before: &str, caret: usize, after: &str, config: &FormatConfig) -> usize {
    let after_len = after.chars().count();

    if let Some(sep) = separator_position(before, config) {
        if caret > sep {
            let after_integer_len = separator_position(after, config).unwrap_or(after_len);
            let into_fraction = caret - sep - 1;
            return (after_integer_len + 1 + into_fraction).min(after_len);
        }
    }

    let digits_before = before
        .chars()
        .take(caret)
        .filter(char::is_ascii_digit)
        .count();
    if digits_before == 0 {
        return 0;
    }

    let mut seen = 0;
    for (i, c) in after.chars().enumerate() {
        if c.is_ascii_digit() {
            seen += 1;
            if seen == digits_before {
                return i + 1;
            }
        }
    }
    after_len
}
