//! Configuration for the tinylang binary.
//!
//! `defaults/tinylang.default.toml` is embedded into the crate so docs and
//! runtime behavior stay in sync. [`TinyConfig::load`] layers, lowest first:
//! the embedded defaults, an optional user file given with `--config`, and the
//! output format named on the command line.

use crate::processor::{ProcessingError, ProcessingSpec};
use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/tinylang.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TinyConfig {
    pub output: OutputConfig,
    pub check: CheckConfig,
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
}

impl OutputConfig {
    /// Parse the configured format string
    pub fn spec(&self) -> Result<ProcessingSpec, ProcessingError> {
        ProcessingSpec::from_string(&self.format)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckConfig {
    pub show_summary: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    pub show_tokens: bool,
}

impl TinyConfig {
    /// Build the configuration for one invocation.
    ///
    /// A `config_file` that does not exist is an error, since the user asked
    /// for it explicitly. `format` overrides `output.format` from every file.
    pub fn load(config_file: Option<&Path>, format: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));

        if let Some(path) = config_file {
            let source = File::from(path).format(FileFormat::Toml).required(true);
            builder = builder.add_source(source);
        }
        if let Some(format) = format {
            builder = builder.set_override("output.format", format)?;
        }

        builder.build()?.try_deserialize()
    }
}
