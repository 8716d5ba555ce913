//! Form input field widget.
//!
//! `FormField` is the wasm-exported entry point: it creates an `<input>`
//! element (plus a symbol element for currency fields) inside a host
//! container, wires focus/blur/input listeners, and keeps the displayed
//! text consistent with the content configuration.
//!
//! Field lifecycle: **Committed** (initial and after blur — zero-padded,
//! symbol applied) → **Editing** (on focus — plain numeric string, live
//! masking with caret preservation) → **Committed** (on blur).
//!
//! Event handlers and state transitions live in `events.rs` and are shared
//! with the native build, which drives the same state machine without a DOM
//! (for tests and the CLI).

#[cfg(target_arch = "wasm32")]
mod dom;
mod events;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use js_sys::Function;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use web_sys::{FocusEvent, HtmlElement, InputEvent};

use crate::config::{ContentConfig, InputType};
use crate::decimal::correct_decimal;
use crate::mask::{extract_numeric_value, parse_float_prefix};
use crate::provider::SharedConfig;
use crate::value::RawValue;

#[cfg(target_arch = "wasm32")]
use crate::error::FieldError;
#[cfg(not(target_arch = "wasm32"))]
use crate::error::Result;

#[cfg(target_arch = "wasm32")]
use dom::InputHost;

/// Gap in logical pixels between the measured symbol and the field text.
#[cfg(target_arch = "wasm32")]
const SYMBOL_GAP_PX: f64 = 20.0;

/// Where the field sits in the focus lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldPhase {
    /// Blurred: display is fully formatted (zero-padded, symbol embedded).
    Committed,
    /// Focused: display is the plain editing string, live-masked.
    Editing,
}

/// Shared state accessed by the DOM event closures.
pub(crate) struct SharedState {
    pub(crate) content: ContentConfig,
    pub(crate) raw: RawValue,
    pub(crate) display: String,
    pub(crate) phase: FieldPhase,

    #[cfg(target_arch = "wasm32")]
    pub(crate) host: Option<InputHost>,
    #[cfg(target_arch = "wasm32")]
    pub(crate) event_callback: Option<Function>,
    #[cfg(target_arch = "wasm32")]
    pub(crate) debounce_timer: Option<i32>,
    #[cfg(target_arch = "wasm32")]
    pub(crate) debounce_closure: Option<Closure<dyn FnMut()>>,
    #[cfg(target_arch = "wasm32")]
    pub(crate) measure_closure: Option<Closure<dyn FnMut()>>,

    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) event_listener: Option<Box<dyn FnMut(&str, &RawValue)>>,
}

/// The main widget struct exported to JavaScript.
#[wasm_bindgen]
pub struct FormField {
    #[cfg(target_arch = "wasm32")]
    state: Rc<RefCell<SharedState>>,
    #[cfg(target_arch = "wasm32")]
    config: SharedConfig,
    #[cfg(target_arch = "wasm32")]
    input_closure: Option<Closure<dyn FnMut(InputEvent)>>,
    #[cfg(target_arch = "wasm32")]
    focus_closure: Option<Closure<dyn FnMut(FocusEvent)>>,
    #[cfg(target_arch = "wasm32")]
    blur_closure: Option<Closure<dyn FnMut(FocusEvent)>>,

    // Non-wasm32 fields (for tests/CLI)
    #[cfg(not(target_arch = "wasm32"))]
    state: Rc<RefCell<SharedState>>,
    #[cfg(not(target_arch = "wasm32"))]
    config: SharedConfig,
}

/// The initial raw value from the configured initial text.
fn initial_raw(content: &ContentConfig) -> RawValue {
    if content.value.is_empty() {
        return RawValue::Empty;
    }
    match content.input_type {
        InputType::Currency => {
            RawValue::number(extract_numeric_value(&content.value, &content.currency))
        }
        InputType::Number => RawValue::number(parse_float_prefix(&content.value)),
        InputType::Decimal => RawValue::number(correct_decimal(&content.value, content.precision)),
        _ => RawValue::text(content.value.clone()),
    }
}

// ============================================================================
// WASM32 Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl FormField {
    /// Mount a field inside `container` with the given content object.
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlElement, content: JsValue) -> Result<FormField, JsValue> {
        console_error_panic_hook::set_once();

        let content: ContentConfig = serde_wasm_bindgen::from_value(content)
            .map_err(|e| FieldError::Content(e.to_string()))?;
        content.validate()?;

        let host = InputHost::create(&container, &content)?;
        let raw = initial_raw(&content);
        let state = Rc::new(RefCell::new(SharedState {
            content,
            raw,
            display: String::new(),
            phase: FieldPhase::Committed,
            host: Some(host),
            event_callback: None,
            debounce_timer: None,
            debounce_closure: None,
            measure_closure: None,
        }));

        // Initial committed display (attributes were applied on create).
        {
            let mut s = state.borrow_mut();
            s.display = events::render_display(&s);
            if let Some(host) = &s.host {
                host.set_display(&s.display);
            }
        }

        let config = SharedConfig::new(state.borrow().content.clone());
        {
            let weak_state = Rc::downgrade(&state);
            config.subscribe(move |content| {
                let Some(state) = weak_state.upgrade() else {
                    return;
                };
                if content.validate().is_err() {
                    return;
                }
                let display = FormField::internal_content_changed(&state, content.clone());
                {
                    let s = state.borrow();
                    if let Some(host) = &s.host {
                        host.apply_content(&s.content, s.phase == FieldPhase::Editing);
                        host.set_display(&display);
                    }
                }
                FormField::schedule_symbol_measure(&state);
            });
        }

        // Live input: re-mask and restore the caret.
        let input_closure = {
            let state = Rc::clone(&state);
            Closure::wrap(Box::new(move |_event: InputEvent| {
                let read = {
                    let s = state.borrow();
                    s.host.as_ref().map(|host| (host.value(), host.caret()))
                };
                let Some((text, caret)) = read else {
                    return;
                };
                let outcome = FormField::internal_input(&state, &text, caret);
                if let Some((display, caret)) = outcome.rewrite {
                    let s = state.borrow();
                    if let Some(host) = &s.host {
                        host.set_display(&display);
                        host.set_caret(caret);
                    }
                }
                if outcome.changed {
                    FormField::emit_change(&state);
                }
            }) as Box<dyn FnMut(InputEvent)>)
        };

        // Focus: swap currency to the plain editing string.
        let focus_closure = {
            let state = Rc::clone(&state);
            Closure::wrap(Box::new(move |_event: FocusEvent| {
                let outcome = FormField::internal_focus(&state);
                {
                    let s = state.borrow();
                    if let Some(host) = &s.host {
                        if let Some(display) = &outcome.rewrite {
                            host.set_display(display);
                        }
                        host.apply_content(&s.content, true);
                    }
                }
                FormField::schedule_symbol_measure(&state);
                FormField::emit(&state, "focus", &outcome.value);
            }) as Box<dyn FnMut(FocusEvent)>)
        };

        // Blur: commit.
        let blur_closure = {
            let state = Rc::clone(&state);
            Closure::wrap(Box::new(move |_event: FocusEvent| {
                let text = {
                    let s = state.borrow();
                    s.host.as_ref().map(|host| host.value())
                };
                let Some(text) = text else {
                    return;
                };
                let outcome = FormField::internal_blur(&state, &text);
                {
                    let s = state.borrow();
                    if let Some(host) = &s.host {
                        host.set_display(&outcome.display);
                        host.apply_content(&s.content, false);
                    }
                }
                FormField::schedule_symbol_measure(&state);
                FormField::cancel_pending_change(&state);
                if outcome.changed {
                    FormField::emit(&state, "change", &outcome.value);
                }
                FormField::emit(&state, "blur", &outcome.value);
            }) as Box<dyn FnMut(FocusEvent)>)
        };

        {
            let s = state.borrow();
            if let Some(host) = &s.host {
                host.add_listener("input", input_closure.as_ref().unchecked_ref());
                host.add_listener("focus", focus_closure.as_ref().unchecked_ref());
                host.add_listener("blur", blur_closure.as_ref().unchecked_ref());
            }
        }

        FormField::schedule_symbol_measure(&state);

        Ok(FormField {
            state,
            config,
            input_closure: Some(input_closure),
            focus_closure: Some(focus_closure),
            blur_closure: Some(blur_closure),
        })
    }

    /// Replace the content configuration.
    ///
    /// The held value is immediately re-formatted and DOM attributes are
    /// re-applied, so the display always matches the settings.
    #[wasm_bindgen]
    pub fn set_content(&mut self, content: JsValue) -> Result<(), JsValue> {
        let content: ContentConfig = serde_wasm_bindgen::from_value(content)
            .map_err(|e| FieldError::Content(e.to_string()))?;
        content.validate()?;
        self.config.set(content);
        Ok(())
    }

    /// Current raw value (`null`, a number, or a string).
    #[wasm_bindgen]
    pub fn value(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.state.borrow().raw).unwrap_or(JsValue::NULL)
    }

    /// Programmatic value update; regenerates the display.
    #[wasm_bindgen]
    pub fn set_value(&mut self, value: JsValue) -> Result<(), JsValue> {
        let value: RawValue = serde_wasm_bindgen::from_value(value)
            .map_err(|e| FieldError::Content(e.to_string()))?;
        let display = FormField::internal_set_value(&self.state, value);
        let s = self.state.borrow();
        if let Some(host) = &s.host {
            host.set_display(&display);
        }
        Ok(())
    }

    /// Current display string.
    #[wasm_bindgen]
    pub fn display(&self) -> String {
        self.state.borrow().display.clone()
    }

    /// Register the host event callback, invoked as `callback(name, value)`
    /// with name ∈ {"change", "focus", "blur"}.
    #[wasm_bindgen]
    pub fn set_event_callback(&mut self, callback: Option<Function>) {
        self.state.borrow_mut().event_callback = callback;
    }

    /// Focus the input element (no-op when readonly).
    #[wasm_bindgen]
    pub fn focus_input(&self) {
        let s = self.state.borrow();
        if s.content.readonly {
            return;
        }
        if let Some(host) = &s.host {
            host.focus();
        }
    }

    /// Select the input element's text.
    #[wasm_bindgen]
    pub fn select_input(&self) {
        let s = self.state.borrow();
        if let Some(host) = &s.host {
            host.select();
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl FormField {
    fn emit(state: &Rc<RefCell<SharedState>>, name: &str, value: &RawValue) {
        let callback = state.borrow().event_callback.clone();
        let Some(callback) = callback else {
            return;
        };
        let payload = serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL);
        let _ = callback.call2(&JsValue::NULL, &JsValue::from_str(name), &payload);
    }

    /// Emit a `change` event, debounced per the content configuration.
    fn emit_change(state: &Rc<RefCell<SharedState>>) {
        let (debounce, delay) = {
            let s = state.borrow();
            (s.content.debounce, s.content.debounce_delay)
        };
        if !debounce {
            let value = state.borrow().raw.clone();
            Self::emit(state, "change", &value);
            return;
        }

        let Some(window) = web_sys::window() else {
            return;
        };
        let mut s = state.borrow_mut();
        // Reset any pending timer
        if let Some(timer_id) = s.debounce_timer.take() {
            window.clear_timeout_with_handle(timer_id);
        }
        if s.debounce_closure.is_none() {
            let weak_state = Rc::downgrade(state);
            let closure = Closure::wrap(Box::new(move || {
                if let Some(state) = weak_state.upgrade() {
                    state.borrow_mut().debounce_timer = None;
                    let value = state.borrow().raw.clone();
                    FormField::emit(&state, "change", &value);
                }
            }) as Box<dyn FnMut()>);
            s.debounce_closure = Some(closure);
        }
        let Some(callback) = s.debounce_closure.as_ref() else {
            return;
        };
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            i32::try_from(delay).unwrap_or(i32::MAX),
        ) {
            Ok(id) => s.debounce_timer = Some(id),
            Err(_) => s.debounce_timer = None,
        }
    }

    fn cancel_pending_change(state: &Rc<RefCell<SharedState>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(timer_id) = state.borrow_mut().debounce_timer.take() {
            window.clear_timeout_with_handle(timer_id);
        }
    }

    /// Schedule the symbol-width measurement after the next render pass.
    ///
    /// Idempotent and safe to re-run; later calls simply re-measure.
    pub(crate) fn schedule_symbol_measure(state: &Rc<RefCell<SharedState>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let mut s = state.borrow_mut();
        if s.measure_closure.is_none() {
            let weak_state = Rc::downgrade(state);
            let closure = Closure::wrap(Box::new(move || {
                if let Some(state) = weak_state.upgrade() {
                    FormField::apply_symbol_padding(&state);
                }
            }) as Box<dyn FnMut()>);
            s.measure_closure = Some(closure);
        }
        let Some(callback) = s.measure_closure.as_ref() else {
            return;
        };
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                0,
            );
    }

    /// Pad the input so the text never overlaps the symbol element.
    fn apply_symbol_padding(state: &Rc<RefCell<SharedState>>) {
        let s = state.borrow();
        let Some(host) = &s.host else {
            return;
        };
        let config = &s.content.currency;
        let visible = s.phase == FieldPhase::Editing
            && s.content.input_type == InputType::Currency
            && config.show_symbol
            && !config.symbol.is_empty();
        if !visible {
            host.clear_symbol_padding();
            return;
        }
        if let Some(width) = host.measure_symbol() {
            host.set_symbol_padding(config.symbol_position, width + SYMBOL_GAP_PX);
        }
    }
}

// ============================================================================
// Non-WASM32 Implementation (for tests/CLI)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
impl FormField {
    /// Create a field without a DOM (native, for testing/CLI).
    pub fn new_test(content: ContentConfig) -> Result<Self> {
        Self::with_source(SharedConfig::new(content))
    }

    /// Create a field driven by an injected configuration source.
    ///
    /// The field subscribes to the source; every `set` re-formats the held
    /// value immediately. Invalid updates (separator clash) are ignored.
    pub fn with_source(config: SharedConfig) -> Result<Self> {
        let content = config.get();
        content.validate()?;
        let raw = initial_raw(&content);
        let state = Rc::new(RefCell::new(SharedState {
            content,
            raw,
            display: String::new(),
            phase: FieldPhase::Committed,
            event_listener: None,
        }));
        {
            let mut s = state.borrow_mut();
            s.display = events::render_display(&s);
        }
        {
            let weak_state = Rc::downgrade(&state);
            config.subscribe(move |content| {
                let Some(state) = weak_state.upgrade() else {
                    return;
                };
                if content.validate().is_err() {
                    return;
                }
                let _ = FormField::internal_content_changed(&state, content.clone());
            });
        }
        Ok(Self { state, config })
    }

    /// Simulate a live input event; returns the resulting field text and
    /// caret offset.
    pub fn input(&mut self, text: &str, caret: usize) -> (String, usize) {
        let outcome = Self::internal_input(&self.state, text, caret);
        let result = outcome
            .rewrite
            .unwrap_or_else(|| (text.to_string(), caret));
        if outcome.changed {
            let value = self.value();
            Self::emit(&self.state, "change", &value);
        }
        result
    }

    /// Simulate focus; returns the (possibly rewritten) display.
    pub fn focus(&mut self) -> String {
        let outcome = Self::internal_focus(&self.state);
        Self::emit(&self.state, "focus", &outcome.value);
        self.display()
    }

    /// Simulate blur; commits and returns the final display.
    pub fn blur(&mut self) -> String {
        let text = self.display();
        let outcome = Self::internal_blur(&self.state, &text);
        if outcome.changed {
            Self::emit(&self.state, "change", &outcome.value);
        }
        Self::emit(&self.state, "blur", &outcome.value);
        outcome.display
    }

    /// Replace the content configuration (routes through the config source).
    pub fn set_content(&mut self, content: ContentConfig) -> Result<()> {
        content.validate()?;
        self.config.set(content);
        Ok(())
    }

    /// Programmatic value update; returns the regenerated display.
    pub fn set_value(&mut self, value: RawValue) -> String {
        Self::internal_set_value(&self.state, value)
    }

    pub fn value(&self) -> RawValue {
        self.state.borrow().raw.clone()
    }

    pub fn display(&self) -> String {
        self.state.borrow().display.clone()
    }

    pub fn is_editing(&self) -> bool {
        self.state.borrow().phase == FieldPhase::Editing
    }

    /// Register the host event listener, invoked as `(name, value)`.
    pub fn on_event(&mut self, listener: impl FnMut(&str, &RawValue) + 'static) {
        self.state.borrow_mut().event_listener = Some(Box::new(listener));
    }

    fn emit(state: &Rc<RefCell<SharedState>>, name: &str, value: &RawValue) {
        let listener = state.borrow_mut().event_listener.take();
        if let Some(mut listener) = listener {
            listener(name, value);
            let mut s = state.borrow_mut();
            if s.event_listener.is_none() {
                s.event_listener = Some(listener);
            }
        }
    }
}
