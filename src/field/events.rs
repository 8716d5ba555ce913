//! Focus, blur, input, and configuration-change handlers for `FormField`.
//!
//! All handlers are associated functions working on the shared state, so
//! the wasm event closures and the native test API drive the exact same
//! logic. DOM writes and event emission happen in the callers, after the
//! state borrow is released.

use std::cell::RefCell;
use std::rc::Rc;

use super::{FieldPhase, FormField, SharedState};
use crate::config::InputType;
use crate::decimal::correct_decimal;
use crate::mask::{
    editing_string, extract_numeric_value, format_amount, format_currency, parse_float_prefix,
    MaskMode,
};
use crate::caret::preserve_caret;
use crate::value::RawValue;

/// Result of a live input event.
pub(crate) struct InputOutcome {
    /// New field text + caret when the mask rewrote the text (currency only).
    pub(crate) rewrite: Option<(String, usize)>,
    pub(crate) changed: bool,
}

/// Result of a blur commit.
pub(crate) struct CommitOutcome {
    pub(crate) display: String,
    pub(crate) value: RawValue,
    pub(crate) changed: bool,
}

/// Result of a focus transition.
pub(crate) struct FocusOutcome {
    /// New field text when the display was swapped to the editing string.
    pub(crate) rewrite: Option<String>,
    pub(crate) value: RawValue,
}

impl FormField {
    /// Live input: mask currency text (preserving the caret), parse numeric
    /// types, pass everything else through.
    pub(crate) fn internal_input(
        state: &Rc<RefCell<SharedState>>,
        text: &str,
        caret: usize,
    ) -> InputOutcome {
        let mut s = state.borrow_mut();
        s.phase = FieldPhase::Editing;

        match s.content.input_type {
            InputType::Currency => {
                let config = &s.content.currency;
                let display = format_currency(text, config, MaskMode::Typing);
                let caret = preserve_caret(text, caret, &display, config);
                let value = RawValue::number(extract_numeric_value(&display, config));
                let changed = value != s.raw;
                s.raw = value;
                s.display = display.clone();
                InputOutcome {
                    rewrite: Some((display, caret)),
                    changed,
                }
            }
            InputType::Number | InputType::Decimal => {
                // A lone decimal point is not a value yet; wait for a digit.
                if text == "." || text == "," {
                    return InputOutcome {
                        rewrite: None,
                        changed: false,
                    };
                }
                let value = if text.is_empty() {
                    RawValue::Empty
                } else {
                    match parse_float_prefix(text) {
                        Some(n) => RawValue::Number(n),
                        None => RawValue::text(text),
                    }
                };
                let changed = value != s.raw;
                s.raw = value;
                s.display = text.to_string();
                InputOutcome {
                    rewrite: None,
                    changed,
                }
            }
            _ => {
                let value = RawValue::text(text);
                let changed = value != s.raw;
                s.raw = value;
                s.display = text.to_string();
                InputOutcome {
                    rewrite: None,
                    changed,
                }
            }
        }
    }

    /// Blur: commit the field. Currency re-masks with zero padding and the
    /// symbol; decimal snaps to the configured precision; other types keep
    /// the value accumulated from input events.
    pub(crate) fn internal_blur(state: &Rc<RefCell<SharedState>>, text: &str) -> CommitOutcome {
        let mut s = state.borrow_mut();
        s.phase = FieldPhase::Committed;

        let (display, value) = match s.content.input_type {
            InputType::Currency => {
                let config = &s.content.currency;
                let display = format_currency(text, config, MaskMode::Committed);
                let value = RawValue::number(extract_numeric_value(&display, config));
                (display, value)
            }
            InputType::Decimal => {
                let value = RawValue::number(correct_decimal(text, s.content.precision));
                (value.to_string(), value)
            }
            _ => (text.to_string(), s.raw.clone()),
        };

        let changed = value != s.raw;
        s.raw = value.clone();
        s.display = display.clone();
        CommitOutcome {
            display,
            value,
            changed,
        }
    }

    /// Focus: currency strips back to the plain editing string for
    /// convenient typing; everything else keeps its text.
    pub(crate) fn internal_focus(state: &Rc<RefCell<SharedState>>) -> FocusOutcome {
        let mut s = state.borrow_mut();
        s.phase = FieldPhase::Editing;

        let rewrite = if s.content.input_type == InputType::Currency {
            let number = current_number(&s);
            let display = editing_string(number, &s.content.currency);
            s.display = display.clone();
            Some(display)
        } else {
            None
        };
        FocusOutcome {
            rewrite,
            value: s.raw.clone(),
        }
    }

    /// Configuration change: store the new content and immediately re-derive
    /// the display from the held raw value, in the current phase.
    ///
    /// The caller validates the content before getting here.
    pub(crate) fn internal_content_changed(
        state: &Rc<RefCell<SharedState>>,
        content: crate::config::ContentConfig,
    ) -> String {
        let mut s = state.borrow_mut();
        s.content = content;
        let display = render_display(&s);
        s.display = display.clone();
        display
    }

    /// Programmatic value update: replace the raw value and re-derive the
    /// display in the current phase.
    pub(crate) fn internal_set_value(state: &Rc<RefCell<SharedState>>, value: RawValue) -> String {
        let mut s = state.borrow_mut();
        s.raw = value;
        let display = render_display(&s);
        s.display = display.clone();
        display
    }
}

/// Derive the display string from the held value, content, and phase.
pub(crate) fn render_display(s: &SharedState) -> String {
    match s.content.input_type {
        InputType::Currency => {
            let number = current_number(s);
            match s.phase {
                FieldPhase::Committed => format_amount(number, &s.content.currency),
                FieldPhase::Editing => editing_string(number, &s.content.currency),
            }
        }
        _ => s.raw.to_string(),
    }
}

/// The field's current numeric value, coercing stray text through the
/// extractor.
fn current_number(s: &SharedState) -> Option<f64> {
    match &s.raw {
        RawValue::Number(n) => Some(*n),
        RawValue::Text(t) => extract_numeric_value(t, &s.content.currency),
        RawValue::Empty => None,
    }
}
