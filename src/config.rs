//! Content configuration supplied by the hosting editor.
//!
//! The host platform owns the property panel; its only contract with this
//! crate is the content object modeled here. Field names follow the wire
//! form (camelCase) and every field has a default, so a partial object from
//! an older editor still deserializes.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{FieldError, Result};

/// Input type selected in the editor.
///
/// Serializes to/from the lowercase strings the editor uses (`"text"`,
/// `"currency"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    #[default]
    Text,
    Textarea,
    Email,
    Password,
    Number,
    Decimal,
    Currency,
    Date,
    Time,
    Tel,
}

impl InputType {
    /// The `type` attribute rendered on the DOM element.
    ///
    /// Currency renders as `"text"` (the mask owns the content), decimal as
    /// `"number"`, and password honors the reveal toggle.
    pub fn dom_type(self, display_password: bool) -> &'static str {
        match self {
            Self::Text | Self::Textarea | Self::Currency => "text",
            Self::Email => "email",
            Self::Password => {
                if display_password {
                    "text"
                } else {
                    "password"
                }
            }
            Self::Number | Self::Decimal => "number",
            Self::Date => "date",
            Self::Time => "time",
            Self::Tel => "tel",
        }
    }
}

/// Which side of the number the currency symbol sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    #[default]
    Prefix,
    Suffix,
}

/// Decimal precision for the `decimal` input type, carried on the wire as a
/// step-like string (`"0.1"`, `"0.01"`, ... `"0.00000001"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision(u8);

impl Precision {
    pub fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    /// Number of fractional digits this precision keeps.
    pub fn decimals(self) -> usize {
        usize::from(self.0)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self(1)
    }
}

impl Serialize for Precision {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.0 == 0 {
            return serializer.serialize_str("1");
        }
        let mut s = String::from("0.");
        for _ in 1..self.0 {
            s.push('0');
        }
        s.push('1');
        serializer.serialize_str(&s)
    }
}

impl<'de> Deserialize<'de> for Precision {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let decimals = s
            .split_once('.')
            .map_or(0, |(_, frac)| frac.chars().take_while(char::is_ascii_digit).count());
        u8::try_from(decimals)
            .map(Self)
            .map_err(|_| serde::de::Error::custom("precision out of range"))
    }
}

/// Currency formatting settings.
///
/// Invariant: `decimal_separator != thousands_separator` — checked by
/// [`FormatConfig::validate`], not by construction, because the object
/// arrives from the editor as plain data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatConfig {
    /// Currency symbol, e.g. `"$"`, `"€"`, `"US$"`.
    pub symbol: String,
    pub symbol_position: SymbolPosition,
    /// Whether the symbol is displayed at all.
    pub show_symbol: bool,
    /// Fixed number of fractional digits on commit.
    pub decimal_places: u8,
    #[serde(deserialize_with = "de_decimal_separator")]
    pub decimal_separator: char,
    /// `None` disables grouping.
    #[serde(deserialize_with = "de_optional_separator")]
    pub thousands_separator: Option<char>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            symbol_position: SymbolPosition::Prefix,
            show_symbol: true,
            decimal_places: 2,
            decimal_separator: '.',
            thousands_separator: Some(','),
        }
    }
}

impl FormatConfig {
    /// Check the separator invariant.
    pub fn validate(&self) -> Result<()> {
        if self.thousands_separator == Some(self.decimal_separator) {
            return Err(FieldError::Config(format!(
                "decimal and thousands separator are both '{}'",
                self.decimal_separator
            )));
        }
        Ok(())
    }
}

/// The full content object the host supplies for one field.
///
/// Any change to it triggers an immediate re-format of the held value; see
/// `FormField::set_content`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentConfig {
    #[serde(rename = "type")]
    pub input_type: InputType,
    pub name: String,
    pub required: bool,
    pub readonly: bool,
    pub placeholder: String,
    /// Initial value as configured in the editor (`""` = unset).
    pub value: String,
    /// Range bounds for number/decimal types.
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Range bounds for the date type (ISO `yyyy-mm-dd`).
    pub min_date: Option<String>,
    pub max_date: Option<String>,
    pub step: Option<f64>,
    /// Step in seconds for the time type.
    pub time_precision: Option<u32>,
    /// Fractional digits kept by the decimal type.
    pub precision: Precision,
    /// Reveal toggle for the password type.
    pub display_password: bool,
    /// Debounce `change` events while typing.
    pub debounce: bool,
    /// Debounce delay in milliseconds.
    pub debounce_delay: u32,
    pub currency: FormatConfig,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            input_type: InputType::Text,
            name: String::new(),
            required: false,
            readonly: false,
            placeholder: String::new(),
            value: String::new(),
            min: None,
            max: None,
            min_date: None,
            max_date: None,
            step: None,
            time_precision: None,
            precision: Precision::default(),
            display_password: false,
            debounce: false,
            debounce_delay: 500,
            currency: FormatConfig::default(),
        }
    }
}

impl ContentConfig {
    /// Validate the parts of the configuration that can clash.
    pub fn validate(&self) -> Result<()> {
        self.currency.validate()
    }

    /// Effective `step` attribute value for the DOM element.
    ///
    /// Unfocused number inputs get `"any"` so a committed value that does
    /// not sit on the step grid is not flagged invalid by the browser.
    pub fn step_attribute(&self, focused: bool) -> Option<String> {
        match self.input_type {
            InputType::Number | InputType::Decimal => {
                if focused {
                    self.step.map(|s| s.to_string())
                } else {
                    Some("any".to_string())
                }
            }
            InputType::Time => Some(self.time_precision.unwrap_or(1).to_string()),
            _ => None,
        }
    }
}

/// Separator field: a single-character string; empty/missing falls back to `'.'`.
fn de_decimal_separator<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<char, D::Error> {
    Ok(de_optional_separator(deserializer)?.unwrap_or('.'))
}

/// Separator field: a single-character string; `null` and `""` mean none.
fn de_optional_separator<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<char>, D::Error> {
    let s: Option<String> = Option::deserialize(deserializer)?;
    let Some(s) = s else { return Ok(None) };
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(None),
        (Some(c), None) => Ok(Some(c)),
        _ => Err(serde::de::Error::custom(
            "separator must be a single character",
        )),
    }
}
