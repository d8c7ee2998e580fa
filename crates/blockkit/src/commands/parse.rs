//! `blockkit parse` command implementation.

use std::path::PathBuf;

use blockkit_config::{CliSettings, Config, OutputFormat};
use blockkit_parser::{AttributedTextParser, SpanProcessor};
use clap::{Args, ValueEnum};

use crate::error::CliError;
use crate::input;
use crate::render::{self, BlockReport, RenderOptions};

/// Output format accepted on the command line.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Arguments for the parse command.
#[derive(Args)]
#[allow(clippy::struct_excessive_bools)]
pub(crate) struct ParseArgs {
    /// Markdown file to read (default: stdin).
    file: Option<PathBuf>,

    /// Process each non-empty line as its own block (overrides config).
    #[arg(long)]
    split_lines: bool,

    /// Output format (overrides config).
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Pretty-print JSON output (overrides config).
    #[arg(long)]
    pretty: bool,

    /// Remove zero-width-space guards from markdown spans (overrides config).
    #[arg(long)]
    strip_guards: bool,

    /// Do not decode styled-span JSON (overrides config).
    #[arg(long)]
    no_styles: bool,

    /// Path to configuration file (default: auto-discover blockkit.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ParseArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            split_lines: self.split_lines.then_some(true),
            format: self.format.map(OutputFormat::from),
            pretty: self.pretty.then_some(true),
            strip_guards: self.strip_guards.then_some(true),
            resolve_styles: self.no_styles.then_some(false),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let source = input::read_source(self.file.as_deref())?;
        let blocks = input::blocks(&source, config.input.split_lines);

        let processor = SpanProcessor::new();
        let parser = AttributedTextParser::new();
        let options = RenderOptions {
            strip_guards: config.output.strip_guards,
            resolve_styles: config.styles.resolve,
        };
        let reports: Vec<_> = blocks
            .iter()
            .map(|markdown| BlockReport::new(processor.process(markdown), options, &parser))
            .collect();

        tracing::info!(block_count = reports.len(), "Processed input");

        let mut stdout = std::io::stdout().lock();
        match config.output.format {
            OutputFormat::Text => render::write_text(&mut stdout, &reports),
            OutputFormat::Json => render::write_json(&mut stdout, &reports, config.output.pretty),
        }
    }
}
