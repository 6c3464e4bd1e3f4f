//! Configuration loading
//!
//! Tokenizer options and the output format come from `defaults/shallow.default.toml`, which
//! is compiled in, with [`Loader`] stacking a directory's `shallow.toml`, explicit files and
//! command-line switches over it.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

use crate::xml::MatcherOptions;

const DEFAULT_TOML: &str = include_str!("../defaults/shallow.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ShallowConfig {
    pub tokenizer: MatcherOptions,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One line per token: kind, range, quoted lexeme.
    Simple,
    Json,
    Yaml,
}

impl OutputFormat {
    pub const NAMES: &'static [&'static str] = &["simple", "json", "yaml"];

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "simple" => Some(OutputFormat::Simple),
            "json" => Some(OutputFormat::Json),
            "yaml" => Some(OutputFormat::Yaml),
            _ => None,
        }
    }
}

/// Per-directory config file, layered when present.
pub const LOCAL_FILE: &str = "shallow.toml";

/// Builds a [`ShallowConfig`] from, lowest precedence first: the embedded defaults, an
/// optional [`LOCAL_FILE`], explicit config files, then command-line switches.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Defaults plus `dir/shallow.toml` if that file exists.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new().layer(&dir.as_ref().join(LOCAL_FILE), false)
    }

    /// Layer a TOML file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Switch on each tokenizer option set in `options`. Options left off keep their
    /// layered value.
    pub fn with_options(mut self, options: MatcherOptions) -> Result<Self, ConfigError> {
        let MatcherOptions {
            markup_only,
            merge_markers,
        } = options;

        for (key, on) in [
            ("tokenizer.markup_only", markup_only),
            ("tokenizer.merge_markers", merge_markers),
        ] {
            if on {
                self.builder = self.builder.set_override(key, true)?;
            }
        }
        Ok(self)
    }

    pub fn with_format(mut self, format: OutputFormat) -> Result<Self, ConfigError> {
        self.builder = self.builder.set_override("output.format", format.name())?;
        Ok(self)
    }

    pub fn build(self) -> Result<ShallowConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
