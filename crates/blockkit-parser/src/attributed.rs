//! Styled-span scanning and style payload decoding.
//!
//! [`SpanProcessor`](crate::SpanProcessor) only captures a styled span's JSON
//! as a string. Turning it into a [`TextStyle`] happens here, so a rendering
//! layer can decode styles lazily or swap in its own decoder through
//! [`AttributedTextDelegate`].

use std::collections::BTreeSet;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::{Block, Span, StyleContainer, StyleError, TextStyle};

/// Styled span occurrence: `^[text](json)`.
///
/// The JSON group must hold a non-empty brace pair and keeps the whitespace
/// around it. Whitespace is ASCII only and no group crosses a line terminator.
static STYLED_MATCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\^\[([^\n\r\x{85}\x{2028}\x{2029}]*?)\]\(([ \t\n\x0B\f\r]*?\{[^\n\r\x{85}\x{2028}\x{2029}]+?\}[ \t\n\x0B\f\r]*?)\)",
    )
    .expect("invalid styled match regex")
});

/// A styled span found by [`AttributedTextDelegate::find_all_matches`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledMatch<'a> {
    /// Byte range of the whole `^[text](json)` occurrence.
    pub range: Range<usize>,
    /// Text between the brackets.
    pub text: &'a str,
    /// JSON payload as written, surrounding whitespace included.
    pub json: &'a str,
}

/// Operations a renderer needs on attributed text.
///
/// [`AttributedTextParser`] is the default implementation.
pub trait AttributedTextDelegate: Send + Sync {
    /// Find every styled span in `markdown`, in source order.
    fn find_all_matches<'a>(&self, markdown: &'a str) -> Vec<StyledMatch<'a>>;

    /// Decode the text style from a styled span's JSON payload.
    ///
    /// Returns `None` when the payload is malformed or carries no text style.
    fn parse_json_style(&self, json: &str) -> Option<TextStyle>;

    /// Collect the distinct typefaces used by the block's styled spans.
    fn parse_typefaces(&self, block: &Block) -> BTreeSet<String> {
        block
            .styled_spans()
            .filter_map(Span::json)
            .filter_map(|json| self.parse_json_style(json))
            .filter_map(|style| style.typeface)
            .collect()
    }
}

/// Default [`AttributedTextDelegate`] backed by `serde_json`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AttributedTextParser;

impl AttributedTextParser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Decode a full style container, reporting failures.
    pub fn decode_style_container(json: &str) -> Result<StyleContainer, StyleError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl AttributedTextDelegate for AttributedTextParser {
    fn find_all_matches<'a>(&self, markdown: &'a str) -> Vec<StyledMatch<'a>> {
        STYLED_MATCH
            .captures_iter(markdown)
            .filter_map(|caps| {
                Some(StyledMatch {
                    range: caps.get(0)?.range(),
                    text: caps.get(1)?.as_str(),
                    json: caps.get(2)?.as_str(),
                })
            })
            .collect()
    }

    fn parse_json_style(&self, json: &str) -> Option<TextStyle> {
        match Self::decode_style_container(json) {
            Ok(container) => container.style.and_then(|style| style.text),
            Err(e) => {
                tracing::error!(error = %e, "Failed to parse styled text JSON");
                None
            }
        }
    }
}
