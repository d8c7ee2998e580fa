//! Configuration management for blockkit.
//!
//! Parses `blockkit.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Example
//!
//! ```toml
//! [input]
//! split_lines = true
//!
//! [output]
//! format = "json"
//! pretty = true
//! strip_guards = false
//!
//! [styles]
//! resolve = true
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override line splitting.
    pub split_lines: Option<bool>,
    /// Override output format.
    pub format: Option<OutputFormat>,
    /// Override JSON pretty printing.
    pub pretty: Option<bool>,
    /// Override guard stripping.
    pub strip_guards: Option<bool>,
    /// Override style resolution.
    pub resolve_styles: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "blockkit.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input handling.
    pub input: InputConfig,
    /// Output rendering.
    pub output: OutputConfig,
    /// Style payload handling.
    pub styles: StylesConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Input configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Treat each non-empty line as a separate block.
    pub split_lines: bool,
}

/// Output format.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable span listing.
    #[default]
    Text,
    /// JSON document per run.
    Json,
}

/// Output configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format.
    pub format: OutputFormat,
    /// Pretty-print JSON output.
    pub pretty: bool,
    /// Remove zero-width-space guards from markdown span text.
    pub strip_guards: bool,
}

/// Style payload configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StylesConfig {
    /// Decode styled-span JSON into text styles.
    pub resolve: bool,
}

impl Default for StylesConfig {
    fn default() -> Self {
        Self { resolve: true }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `blockkit.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values. Validation runs last.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            tracing::debug!(path = %discovered.display(), "Discovered config file");
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(split_lines) = settings.split_lines {
            self.input.split_lines = split_lines;
        }
        if let Some(format) = settings.format {
            self.output.format = format;
        }
        if let Some(pretty) = settings.pretty {
            self.output.pretty = pretty;
        }
        if let Some(strip_guards) = settings.strip_guards {
            self.output.strip_guards = strip_guards;
        }
        if let Some(resolve) = settings.resolve_styles {
            self.styles.resolve = resolve;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_config_from(&current)
    }

    /// Search for config file in `start` and its parents.
    fn discover_config_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.pretty && self.output.format == OutputFormat::Text {
            return Err(ConfigError::Validation(
                "output.pretty requires output.format = \"json\"".to_owned(),
            ));
        }
        Ok(())
    }
}
