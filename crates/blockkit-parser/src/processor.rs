//! Markdown to span tokenization.
//!
//! Processing runs in four stages:
//!
//! 1. Strip emphasis that wraps the entire string into block attributes.
//! 2. Cut out styled spans `^[text](json)` as atomic tokens.
//! 3. Cut out standard links `[label](url)` as atomic tokens, then split the
//!    remaining text on emphasis delimiters.
//! 4. Fold the tokens into spans, toggling attributes at each delimiter.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::{Block, Marker, Span, TextAttributes};

/// Boundary guard placed around every markdown span.
///
/// Keeps a CommonMark renderer from pairing syntax across span edges.
pub const ZERO_WIDTH_SPACE: char = '\u{200B}';

// Whitespace is ASCII only (`[ \t\n\x0B\f\r]`) and "any character" stops at
// every line terminator, `\r` included (`[^\n\r\x{85}\x{2028}\x{2029}]`).

/// Styled span: `^[text](json)`.
static STYLED_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\^\[([^\n\r\x{85}\x{2028}\x{2029}]*?)\]\([ \t\n\x0B\f\r]*(\{[^\n\r\x{85}\x{2028}\x{2029}]*?\}[ \t\n\x0B\f\r]*)\)",
    )
    .expect("invalid styled span regex")
});

/// Standard link or image: `!?[label](url)`.
static STANDARD_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"!?\[([^\n\r\x{85}\x{2028}\x{2029}]*?)\]\(([^\n\r\x{85}\x{2028}\x{2029}]*?)\)",
    )
    .expect("invalid standard link regex")
});

/// Emphasis delimiters, two-character markers first.
static DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*|__|[*_]|~~").expect("invalid delimiter regex"));

static BOLD_WRAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\A(?P<lead>[ \t\n\x0B\f\r]*)(?:\*\*|__)(?P<inner>[^\n\r\x{85}\x{2028}\x{2029}]*?)(?:\*\*|__)(?P<trail>[ \t\n\x0B\f\r]*)\z",
    )
    .expect("invalid bold wrap regex")
});

static ITALIC_WRAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\A(?P<lead>[ \t\n\x0B\f\r]*)[*_](?P<inner>[^\n\r\x{85}\x{2028}\x{2029}]*?)[*_](?P<trail>[ \t\n\x0B\f\r]*)\z",
    )
    .expect("invalid italic wrap regex")
});

static STRIKETHROUGH_WRAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\A(?P<lead>[ \t\n\x0B\f\r]*)~~(?P<inner>[^\n\r\x{85}\x{2028}\x{2029}]*?)~~(?P<trail>[ \t\n\x0B\f\r]*)\z",
    )
    .expect("invalid strikethrough wrap regex")
});

/// Whole-string wrap patterns in the order they are checked.
fn full_wraps() -> [(&'static Regex, Marker); 3] {
    [
        (&*BOLD_WRAP, Marker::Bold),
        (&*ITALIC_WRAP, Marker::Italic),
        (&*STRIKETHROUGH_WRAP, Marker::Strikethrough),
    ]
}

/// Splits block-kit markdown into spans.
///
/// The processor holds no state; all patterns are compiled once and shared,
/// so one instance can serve any number of threads.
///
/// # Example
///
/// ```
/// use blockkit_parser::{Span, SpanProcessor, TextAttributes};
///
/// let block = SpanProcessor::new().process("**Full string bolded**");
/// assert_eq!(block.attributes, Some(TextAttributes::bold()));
/// assert_eq!(
///     block.spans,
///     vec![Span::Markdown {
///         text: "\u{200B}Full string bolded\u{200B}".to_owned(),
///         attributes: None,
///     }]
/// );
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct SpanProcessor;

impl SpanProcessor {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Process a markdown string into a [`Block`].
    ///
    /// Never fails: unmatched delimiters and malformed styled spans stay in
    /// the output as literal text.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn process(&self, markdown: &str) -> Block {
        let mut working = markdown.to_owned();
        let mut block_attributes: Option<TextAttributes> = None;

        // Each check sees the result of the previous strip, so `***x***`
        // yields bold and then italic.
        for (pattern, marker) in full_wraps() {
            if let Some(stripped) = strip_full_wrap(&working, pattern) {
                block_attributes =
                    Some(block_attributes.unwrap_or_default().merge(marker.attributes()));
                working = stripped;
            }
        }

        let tokens = tokenize(&working);
        let spans = resolve_spans(&tokens);

        tracing::trace!(
            token_count = tokens.len(),
            span_count = spans.len(),
            "Processed markdown block"
        );

        Block {
            spans,
            attributes: block_attributes,
        }
    }
}

/// Remove ZWSP guards from span text.
#[must_use]
pub fn strip_guards(text: &str) -> String {
    text.replace(ZERO_WIDTH_SPACE, "")
}

/// Trim leading and trailing characters up to and including U+0020.
fn trim_control(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}

/// Replace a whole-string wrap with `lead + inner + trail`.
fn strip_full_wrap(text: &str, pattern: &Regex) -> Option<String> {
    let caps = pattern.captures(text)?;
    Some(format!("{}{}{}", &caps["lead"], &caps["inner"], &caps["trail"]))
}

/// Attributes implied by whole-string wraps, checked without stripping.
///
/// Every pattern is tried against the same text, so `**x**` reports both
/// bold and italic.
fn full_wrap_attributes(text: &str) -> Option<TextAttributes> {
    full_wraps()
        .into_iter()
        .filter(|(pattern, _)| pattern.is_match(text))
        .map(|(_, marker)| marker.attributes())
        .reduce(TextAttributes::merge)
}

/// Intermediate token. Styled spans and links are atomic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Text(&'a str),
    Delimiter(&'a str),
    Styled { text: &'a str, json: &'a str },
    StandardLink(&'a str),
}

fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    split_on_matches(input, &STYLED_SPAN, &mut tokens, |caps| Token::Styled {
        text: caps.get(1).map_or("", |m| m.as_str()),
        json: caps.get(2).map_or("", |m| trim_control(m.as_str())),
    });

    let tokens = split_text_tokens(tokens, &STANDARD_LINK, |caps| {
        Token::StandardLink(caps.get(0).map_or("", |m| m.as_str()))
    });

    let mut tokens = split_text_tokens(tokens, &DELIMITER, |caps| {
        Token::Delimiter(caps.get(0).map_or("", |m| m.as_str()))
    });

    tokens.retain(|token| !matches!(token, Token::Text(text) if text.is_empty()));
    tokens
}

/// Split every [`Token::Text`] on `pattern`, passing other tokens through.
fn split_text_tokens<'a>(
    tokens: Vec<Token<'a>>,
    pattern: &Regex,
    to_token: impl Fn(&Captures<'a>) -> Token<'a>,
) -> Vec<Token<'a>> {
    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token {
            Token::Text(text) => split_on_matches(text, pattern, &mut out, &to_token),
            other => out.push(other),
        }
    }
    out
}

/// Push text between matches as [`Token::Text`] and each match via `to_token`.
fn split_on_matches<'a>(
    text: &'a str,
    pattern: &Regex,
    out: &mut Vec<Token<'a>>,
    to_token: impl Fn(&Captures<'a>) -> Token<'a>,
) {
    let mut cursor = 0;
    for caps in pattern.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > cursor {
            out.push(Token::Text(&text[cursor..whole.start()]));
        }
        out.push(to_token(&caps));
        cursor = whole.end();
    }
    if cursor < text.len() {
        out.push(Token::Text(&text[cursor..]));
    }
}

fn resolve_spans(tokens: &[Token<'_>]) -> Vec<Span> {
    let mut spans = Vec::with_capacity(tokens.len());
    let mut current = TextAttributes::default();

    for token in tokens {
        match *token {
            Token::Delimiter(delimiter) => {
                if let Some(marker) = Marker::from_delimiter(delimiter) {
                    current = current.toggle(marker);
                }
            }
            Token::Text(text) | Token::StandardLink(text) => spans.push(Span::Markdown {
                text: format!("{ZERO_WIDTH_SPACE}{text}{ZERO_WIDTH_SPACE}"),
                attributes: current.non_empty(),
            }),
            Token::Styled { text, json } => {
                let merged = full_wrap_attributes(text).map_or(current, |inner| current.merge(inner));
                let json = if json.is_empty() { "{}" } else { json };
                spans.push(Span::StyledMarkdown {
                    text: text.to_owned(),
                    json: json.to_owned(),
                    attributes: merged.non_empty(),
                });
            }
        }
    }

    spans.retain(|span| !matches!(span, Span::Markdown { text, .. } if text.is_empty()));
    spans
}
