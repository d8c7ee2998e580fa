//! Span tokenizer for block-kit attributed markdown.
//!
//! Block-kit content arrives as markdown extended with styled spans:
//! `^[text]({"style": {...}})`. This crate splits such a string into a
//! [`Block`] of ordered [`Span`]s with resolved [`TextAttributes`], ready for a
//! CommonMark renderer (for [`Span::Markdown`]) and a style renderer (for
//! [`Span::StyledMarkdown`]).
//!
//! # Architecture
//!
//! - [`SpanProcessor`]: strips whole-string emphasis, tokenizes styled spans,
//!   links and delimiters, then folds the tokens into spans.
//! - [`AttributedTextParser`]: scans styled-span occurrences and decodes their
//!   JSON payloads into [`TextStyle`] values.
//!
//! # Example
//!
//! ```
//! use blockkit_parser::{Span, SpanProcessor};
//!
//! let block = SpanProcessor::new().process("Hello ^[world]({}) and **friends**");
//! assert_eq!(block.spans.len(), 4);
//! assert!(matches!(block.spans[1], Span::StyledMarkdown { .. }));
//! ```

mod attributed;
mod attributes;
mod error;
mod processor;
mod span;
mod style;

pub use attributed::{AttributedTextDelegate, AttributedTextParser, StyledMatch};
pub use attributes::{Marker, TextAttributes};
pub use error::StyleError;
pub use processor::{SpanProcessor, ZERO_WIDTH_SPACE, strip_guards};
pub use span::{Block, Span};
pub use style::{BlockStyle, StyleContainer, TextAlign, TextOffset, TextSize, TextStyle};
