//! Parse results: blocks and their spans.

use serde::Serialize;

use crate::TextAttributes;

/// One typed fragment of a processed markdown string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Span {
    /// Regular markdown that still needs a CommonMark pass.
    ///
    /// The text is wrapped in zero-width-space guards.
    Markdown {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        attributes: Option<TextAttributes>,
    },
    /// Styled text whose look is described by a JSON payload.
    StyledMarkdown {
        text: String,
        json: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        attributes: Option<TextAttributes>,
    },
}

impl Span {
    /// Span text, guards included for markdown spans.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Markdown { text, .. } | Self::StyledMarkdown { text, .. } => text,
        }
    }

    /// Formatting attributes of either variant.
    #[must_use]
    pub fn attributes(&self) -> Option<TextAttributes> {
        match self {
            Self::Markdown { attributes, .. } | Self::StyledMarkdown { attributes, .. } => {
                *attributes
            }
        }
    }

    /// JSON style payload of a styled span.
    #[must_use]
    pub fn json(&self) -> Option<&str> {
        match self {
            Self::Markdown { .. } => None,
            Self::StyledMarkdown { json, .. } => Some(json),
        }
    }
}

/// Result of processing one markdown string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Block {
    /// Spans in source order.
    pub spans: Vec<Span>,
    /// Attributes of a delimiter pair wrapping the whole string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<TextAttributes>,
}

impl Block {
    /// Iterate over styled spans only.
    pub fn styled_spans(&self) -> impl Iterator<Item = &Span> {
        self.spans
            .iter()
            .filter(|span| matches!(span, Span::StyledMarkdown { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_accessors() {
        let span = Span::StyledMarkdown {
            text: "word".to_owned(),
            json: "{}".to_owned(),
            attributes: Some(TextAttributes::italic()),
        };
        assert_eq!(span.text(), "word");
        assert_eq!(span.json(), Some("{}"));
        assert_eq!(span.attributes(), Some(TextAttributes::italic()));

        let span = Span::Markdown {
            text: "plain".to_owned(),
            attributes: None,
        };
        assert_eq!(span.json(), None);
        assert_eq!(span.attributes(), None);
    }

    #[test]
    fn test_serialize_tags_variants() {
        let block = Block {
            spans: vec![
                Span::Markdown {
                    text: "a".to_owned(),
                    attributes: None,
                },
                Span::StyledMarkdown {
                    text: "b".to_owned(),
                    json: "{}".to_owned(),
                    attributes: Some(TextAttributes::bold()),
                },
            ],
            attributes: None,
        };

        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "spans": [
                    {"type": "markdown", "text": "a"},
                    {
                        "type": "styled_markdown",
                        "text": "b",
                        "json": "{}",
                        "attributes": {"bold": true, "italic": false, "strikethrough": false}
                    }
                ]
            })
        );
    }

    #[test]
    fn test_styled_spans_filter() {
        let block = Block {
            spans: vec![
                Span::Markdown {
                    text: "a".to_owned(),
                    attributes: None,
                },
                Span::StyledMarkdown {
                    text: "b".to_owned(),
                    json: "{}".to_owned(),
                    attributes: None,
                },
            ],
            attributes: None,
        };
        assert_eq!(block.styled_spans().count(), 1);
    }
}
