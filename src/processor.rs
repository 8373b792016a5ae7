//! Processing API for tinylang sources
//!
//! Runs a source through a stage (token, check) and renders the result in a
//! format (simple, json). A spec is written as `<stage>-<format>`, e.g.
//! `token-simple` or `check-json`.

use crate::error::Error;
use crate::lexer::{lex, Token};
use crate::parser::{recognize, Summary};
use std::fmt;
use std::fs;
use std::path::Path;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Check,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "check-json"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "check" => ProcessingStage::Check,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        Ok(ProcessingSpec { stage, format })
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        let mut specs = Vec::new();
        for stage in [ProcessingStage::Token, ProcessingStage::Check] {
            for format in [OutputFormat::Simple, OutputFormat::Json] {
                specs.push(ProcessingSpec { stage, format });
            }
        }
        specs
    }
}

impl fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self.stage {
            ProcessingStage::Token => "token",
            ProcessingStage::Check => "check",
        };
        let format = match self.format {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
        };
        write!(f, "{}-{}", stage, format)
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    InvalidFormat(String),
    InvalidStage(String),
    InvalidFormatType(String),
    IoError(String),
    Serialization(String),
    Analysis(Error),
    /// Tokenization stopped early; `output` renders the tokens lexed before it
    Incomplete { output: String, error: Error },
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::InvalidStage(stage) => write!(f, "Invalid stage: {}", stage),
            ProcessingError::InvalidFormatType(format_type) => {
                write!(f, "Invalid format type: {}", format_type)
            }
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
            ProcessingError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            ProcessingError::Analysis(error) => write!(f, "{}", error),
            ProcessingError::Incomplete { error, .. } => write!(f, "{}", error),
        }
    }
}

impl From<Error> for ProcessingError {
    fn from(error: Error) -> Self {
        ProcessingError::Analysis(error)
    }
}

/// Process source text according to the given specification
pub fn process_source(source: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    match spec.stage {
        ProcessingStage::Token => match lex(source) {
            Ok(tokens) => format_tokens(&tokens, spec.format),
            Err(failure) => Err(ProcessingError::Incomplete {
                output: format_tokens(&failure.tokens, spec.format)?,
                error: failure.into(),
            }),
        },
        ProcessingStage::Check => {
            let tokens = lex(source).map_err(Error::from)?;
            let summary = recognize(&tokens).map_err(Error::Parse)?;
            format_summary(&summary, spec.format)
        }
    }
}

/// Process a tinylang file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();
    let content = fs::read_to_string(file_path).map_err(|e| {
        ProcessingError::IoError(format!("Failed to read {}: {}", file_path.display(), e))
    })?;
    process_source(&content, spec)
}

/// Format tokens according to the specified format
pub fn format_tokens(
    tokens: &[Token<'_>],
    format: OutputFormat,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            for token in tokens {
                result.push_str(&token.to_string());
                result.push('\n');
            }
            Ok(result)
        }
        OutputFormat::Json => serde_json::to_string_pretty(tokens)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
    }
}

/// Format a recognition summary according to the specified format
pub fn format_summary(
    summary: &Summary,
    format: OutputFormat,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => Ok(format!(
            "ok: {} statement(s) ({} declaration(s), {} assignment(s), {} conditional(s)), max depth {}\n",
            summary.statements,
            summary.declarations,
            summary.assignments,
            summary.conditionals,
            summary.max_depth
        )),
        OutputFormat::Json => serde_json::to_string_pretty(summary)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ProcessingSpec::to_string)
        .collect()
}
