//! Block reports and their text and JSON renderings.

use std::io::Write;

use blockkit_parser::{AttributedTextDelegate, Block, Span, TextAttributes, TextStyle, strip_guards};
use serde::Serialize;

use crate::error::CliError;

/// What to include when reporting a block.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RenderOptions {
    /// Remove ZWSP guards from markdown span text.
    pub strip_guards: bool,
    /// Decode styled-span JSON into text styles.
    pub resolve_styles: bool,
}

/// One processed block, ready for output.
#[derive(Debug, Serialize)]
pub(crate) struct BlockReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    attributes: Option<TextAttributes>,
    spans: Vec<SpanReport>,
}

#[derive(Debug, Serialize)]
struct SpanReport {
    #[serde(flatten)]
    span: Span,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<TextStyle>,
}

impl BlockReport {
    pub(crate) fn new(
        block: Block,
        options: RenderOptions,
        delegate: &dyn AttributedTextDelegate,
    ) -> Self {
        let spans = block
            .spans
            .into_iter()
            .map(|span| {
                let style = match &span {
                    Span::StyledMarkdown { json, .. } if options.resolve_styles => {
                        delegate.parse_json_style(json)
                    }
                    _ => None,
                };
                let span = match span {
                    Span::Markdown { text, attributes } if options.strip_guards => {
                        Span::Markdown {
                            text: strip_guards(&text),
                            attributes,
                        }
                    }
                    other => other,
                };
                SpanReport { span, style }
            })
            .collect();

        Self {
            attributes: block.attributes,
            spans,
        }
    }
}

/// Write reports as a human-readable listing.
pub(crate) fn write_text(out: &mut impl Write, reports: &[BlockReport]) -> Result<(), CliError> {
    for (index, report) in reports.iter().enumerate() {
        write!(out, "block {}", index + 1)?;
        write_attributes(out, report.attributes)?;
        writeln!(out)?;

        for entry in &report.spans {
            match &entry.span {
                Span::Markdown { text, attributes } => {
                    write!(out, "  markdown {text:?}")?;
                    write_attributes(out, *attributes)?;
                }
                Span::StyledMarkdown {
                    text,
                    json,
                    attributes,
                } => {
                    write!(out, "  styled {text:?} {json}")?;
                    write_attributes(out, *attributes)?;
                    if let Some(typeface) = entry.style.as_ref().and_then(|s| s.typeface.as_ref()) {
                        write!(out, " typeface={typeface}")?;
                    }
                }
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_attributes(
    out: &mut impl Write,
    attributes: Option<TextAttributes>,
) -> Result<(), CliError> {
    if let Some(attributes) = attributes {
        write!(out, " [{attributes}]")?;
    }
    Ok(())
}

/// Write reports as a JSON document: `{"blocks": [...]}`.
pub(crate) fn write_json(
    out: &mut impl Write,
    reports: &[BlockReport],
    pretty: bool,
) -> Result<(), CliError> {
    #[derive(Serialize)]
    struct Document<'a> {
        blocks: &'a [BlockReport],
    }

    let document = Document { blocks: reports };
    if pretty {
        serde_json::to_writer_pretty(&mut *out, &document)?;
    } else {
        serde_json::to_writer(&mut *out, &document)?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockkit_parser::{AttributedTextParser, SpanProcessor};
    use pretty_assertions::assert_eq;

    const SAMPLE: &str =
        r#"Hi *there* ^[friend]({"style": {"text": {"typeface": "Lato"}}})"#;

    fn report(markdown: &str, options: RenderOptions) -> BlockReport {
        let block = SpanProcessor::new().process(markdown);
        BlockReport::new(block, options, &AttributedTextParser::new())
    }

    #[test]
    fn test_write_text() {
        let options = RenderOptions {
            strip_guards: true,
            resolve_styles: true,
        };
        let reports = vec![report(SAMPLE, options), report("**all bold**", options)];

        let mut out = Vec::new();
        write_text(&mut out, &reports).unwrap();

        let expected = concat!(
            "block 1\n",
            "  markdown \"Hi \"\n",
            "  markdown \"there\" [italic]\n",
            "  markdown \" \"\n",
            "  styled \"friend\" {\"style\": {\"text\": {\"typeface\": \"Lato\"}}} typeface=Lato\n",
            "block 2 [bold]\n",
            "  markdown \"all bold\"\n",
        );
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_write_json_keeps_guards_by_default() {
        let reports = vec![report("plain", RenderOptions::default())];

        let mut out = Vec::new();
        write_json(&mut out, &reports, false).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "blocks": [{
                    "spans": [{"type": "markdown", "text": "\u{200B}plain\u{200B}"}]
                }]
            })
        );
    }

    #[test]
    fn test_write_json_includes_resolved_style() {
        let options = RenderOptions {
            strip_guards: false,
            resolve_styles: true,
        };
        let reports = vec![report(SAMPLE, options)];

        let mut out = Vec::new();
        write_json(&mut out, &reports, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let styled = &value["blocks"][0]["spans"][3];
        assert_eq!(styled["type"], "styled_markdown");
        assert_eq!(styled["text"], "friend");
        assert_eq!(styled["style"], serde_json::json!({"typeface": "Lato"}));
    }

    #[test]
    fn test_unresolved_styles_are_omitted() {
        let reports = vec![report(SAMPLE, RenderOptions::default())];

        let mut out = Vec::new();
        write_json(&mut out, &reports, false).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(value["blocks"][0]["spans"][3].get("style").is_none());
    }
}
