//! DOM host for the field.
//!
//! Creates the `<input>` element and the currency symbol element inside the
//! host container and owns all direct DOM access: value/caret read-write,
//! attribute application, and symbol measurement. Everything above this
//! module works on plain strings and offsets.
//!
//! While editing, the field text is plain (no symbol) and the symbol
//! element overlays the input; when committed, the symbol is embedded in
//! the text and the element hides.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use crate::config::{ContentConfig, InputType, SymbolPosition};
use crate::error::{FieldError, Result};

pub(crate) struct InputHost {
    input: HtmlInputElement,
    symbol: HtmlElement,
}

impl InputHost {
    /// Create the input and symbol elements inside `container`.
    pub(crate) fn create(container: &HtmlElement, content: &ContentConfig) -> Result<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| FieldError::Dom("no document".to_string()))?;

        let input = create_input(&document)?;
        let symbol = create_symbol(&document)?;

        // The symbol element is absolutely positioned over the input.
        let _ = container.style().set_property("position", "relative");
        container
            .append_child(&input)
            .map_err(|_| FieldError::Dom("cannot attach input".to_string()))?;
        container
            .append_child(&symbol)
            .map_err(|_| FieldError::Dom("cannot attach symbol".to_string()))?;

        let host = InputHost { input, symbol };
        host.apply_content(content, false);
        Ok(host)
    }

    /// Current field text.
    pub(crate) fn value(&self) -> String {
        self.input.value()
    }

    /// Write the field text, skipping the DOM when unchanged (a rewrite
    /// resets the native caret).
    pub(crate) fn set_display(&self, text: &str) {
        if self.input.value() != text {
            self.input.set_value(text);
        }
    }

    /// Caret offset, defaulting to end-of-field when the selection API is
    /// unavailable (e.g. type="date").
    pub(crate) fn caret(&self) -> usize {
        self.input
            .selection_start()
            .ok()
            .flatten()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or_else(|| self.input.value().chars().count())
    }

    pub(crate) fn set_caret(&self, offset: usize) {
        let offset = u32::try_from(offset).unwrap_or(u32::MAX);
        let _ = self.input.set_selection_range(offset, offset);
    }

    pub(crate) fn focus(&self) {
        let _ = self.input.focus();
    }

    pub(crate) fn select(&self) {
        self.input.select();
    }

    pub(crate) fn add_listener(&self, event: &str, callback: &js_sys::Function) {
        let _ = self.input.add_event_listener_with_callback(event, callback);
    }

    /// Apply the content configuration to the DOM: type, constraint
    /// attributes, and the symbol element.
    pub(crate) fn apply_content(&self, content: &ContentConfig, focused: bool) {
        self.input
            .set_type(content.input_type.dom_type(content.display_password));
        self.input.set_name(&content.name);
        self.input.set_required(content.required);
        self.input.set_read_only(content.readonly);

        match content.input_type {
            InputType::Date | InputType::Time => {
                self.input.set_placeholder("");
                self.input.set_min(content.min_date.as_deref().unwrap_or(""));
                self.input.set_max(content.max_date.as_deref().unwrap_or(""));
            }
            InputType::Number | InputType::Decimal => {
                self.input.set_placeholder(&content.placeholder);
                self.input
                    .set_min(&content.min.map(|v| v.to_string()).unwrap_or_default());
                self.input
                    .set_max(&content.max.map(|v| v.to_string()).unwrap_or_default());
            }
            _ => {
                self.input.set_placeholder(&content.placeholder);
                self.input.set_min("");
                self.input.set_max("");
            }
        }

        match content.step_attribute(focused) {
            Some(step) => {
                let _ = self.input.set_attribute("step", &step);
            }
            None => {
                let _ = self.input.remove_attribute("step");
            }
        }

        // The symbol element only shows while editing; the committed text
        // embeds the symbol itself.
        let config = &content.currency;
        let visible = focused
            && content.input_type == InputType::Currency
            && config.show_symbol
            && !config.symbol.is_empty();
        let style = self.symbol.style();
        if visible {
            self.symbol.set_text_content(Some(&config.symbol));
            let _ = style.set_property("display", "block");
            match config.symbol_position {
                SymbolPosition::Prefix => {
                    let _ = style.set_property("left", "8px");
                    let _ = style.remove_property("right");
                }
                SymbolPosition::Suffix => {
                    let _ = style.set_property("right", "8px");
                    let _ = style.remove_property("left");
                }
            }
        } else {
            let _ = style.set_property("display", "none");
        }
    }

    /// Rendered width of the symbol element, if it is visible.
    pub(crate) fn measure_symbol(&self) -> Option<f64> {
        let width = self.symbol.get_bounding_client_rect().width();
        if width <= 0.0 {
            return None;
        }
        Some(width)
    }

    /// Pad the input on the symbol's side so text never overlaps it.
    pub(crate) fn set_symbol_padding(&self, position: SymbolPosition, px: f64) {
        let (pad, clear) = match position {
            SymbolPosition::Prefix => ("padding-left", "padding-right"),
            SymbolPosition::Suffix => ("padding-right", "padding-left"),
        };
        let style = self.input.style();
        let _ = style.set_property(pad, &format!("{px}px"));
        let _ = style.remove_property(clear);
    }

    pub(crate) fn clear_symbol_padding(&self) {
        let style = self.input.style();
        let _ = style.remove_property("padding-left");
        let _ = style.remove_property("padding-right");
    }
}

impl Drop for InputHost {
    fn drop(&mut self) {
        if let Some(parent) = self.input.parent_node() {
            let _ = parent.remove_child(&self.input);
        }
        if let Some(parent) = self.symbol.parent_node() {
            let _ = parent.remove_child(&self.symbol);
        }
    }
}

/// Create the `<input>` element. Layout styling belongs to the host; only
/// the properties the widget relies on are set inline.
fn create_input(document: &Document) -> Result<HtmlInputElement> {
    let input = document
        .create_element("input")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .ok_or_else(|| FieldError::Dom("cannot create input element".to_string()))?;
    input.set_class_name("formfield-input");
    let style = input.style();
    let _ = style.set_property("width", "100%");
    let _ = style.set_property("box-sizing", "border-box");
    let _ = style.set_property("font", "inherit");
    Ok(input)
}

/// Create the symbol element, hidden until a currency field focuses.
fn create_symbol(document: &Document) -> Result<HtmlElement> {
    let symbol = document
        .create_element("span")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| FieldError::Dom("cannot create symbol element".to_string()))?;
    symbol.set_class_name("formfield-symbol");
    let style = symbol.style();
    let _ = style.set_property("position", "absolute");
    let _ = style.set_property("top", "50%");
    let _ = style.set_property("transform", "translateY(-50%)");
    let _ = style.set_property("pointer-events", "none");
    let _ = style.set_property("user-select", "none");
    let _ = style.set_property("display", "none");
    Ok(symbol)
}
