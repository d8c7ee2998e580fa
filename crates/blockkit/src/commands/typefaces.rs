//! `blockkit typefaces` command implementation.

use std::collections::BTreeSet;
use std::io::Write;
use std::path::PathBuf;

use blockkit_config::{CliSettings, Config};
use blockkit_parser::{AttributedTextDelegate, AttributedTextParser, SpanProcessor};
use clap::Args;

use crate::error::CliError;
use crate::input;
use crate::output::Output;

/// Arguments for the typefaces command.
#[derive(Args)]
pub(crate) struct TypefacesArgs {
    /// Markdown file to read (default: stdin).
    file: Option<PathBuf>,

    /// Process each non-empty line as its own block (overrides config).
    #[arg(long)]
    split_lines: bool,

    /// Path to configuration file (default: auto-discover blockkit.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl TypefacesArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            split_lines: self.split_lines.then_some(true),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let source = input::read_source(self.file.as_deref())?;
        let typefaces = collect_typefaces(
            &input::blocks(&source, config.input.split_lines),
            &AttributedTextParser::new(),
        );

        if typefaces.is_empty() {
            output.warning("No typefaces found in styled spans");
            return Ok(());
        }

        let mut stdout = std::io::stdout().lock();
        for typeface in &typefaces {
            writeln!(stdout, "{typeface}")?;
        }
        Ok(())
    }
}

/// Distinct typefaces across all blocks.
fn collect_typefaces(blocks: &[&str], delegate: &dyn AttributedTextDelegate) -> BTreeSet<String> {
    let processor = SpanProcessor::new();
    blocks
        .iter()
        .flat_map(|markdown| delegate.parse_typefaces(&processor.process(markdown)))
        .collect()
}
