//! Style payload types carried by styled spans.
//!
//! A styled span's JSON payload is a style container:
//!
//! ```json
//! {"style": {"text": {"typeface": "Lato", "color": "#FF0000", "size": "lg"}}}
//! ```
//!
//! Only the text style is modelled; other keys are ignored. Enum values not
//! known to this crate decode as `Unknown` so newer content still loads.

use serde::{Deserialize, Serialize};

/// Top-level style payload.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleContainer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<BlockStyle>,
}

/// Style section of the payload.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextStyle>,
}

/// Visual style of a styled span's text.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typeface: Option<String>,
    /// Color as `#RRGGBB` or `#AARRGGBB`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<TextSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlign>,
    /// Superscript or subscript placement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<TextOffset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    Xs,
    Sm,
    Base,
    Lg,
    Xl,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Start,
    Center,
    End,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextOffset {
    Sup,
    Sub,
    #[serde(other)]
    Unknown,
}
