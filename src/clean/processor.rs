//! File processing API for the CLEAN format
//!
//! This module runs the pipeline up to a chosen stage and renders that stage's
//! result in a chosen format. Specifications are written `<stage>-<format>`:
//!
//! | Format         | Output                                     |
//! |----------------|--------------------------------------------|
//! | `indent-text`  | normalized text with INDENT/UNDENT lines   |
//! | `token-simple` | token stream, one source line per line     |
//! | `token-json`   | token stream as JSON                       |
//! | `ast-json`     | parse tree as JSON                         |
//! | `ast-treeviz`  | parse tree as a box-drawing tree           |
//! | `akn-xml`      | Akoma Ntoso document                       |
//!
//! # Sample Sources
//!
//! The [`clean_sources`] module gives access to the sample documents under
//! `docs/samples/`, which tests use as canonical inputs.

use crate::clean::error::CleanError;
use crate::clean::formats::{generate_act, to_treeviz_str};
use crate::clean::lexer::{lex, normalize_indentation, Token};
use crate::clean::parser::parse_document;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Represents the processing stage (how far to run the pipeline)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Indent,
    Token,
    Ast,
    Akn,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Simple,
    Json,
    Treeviz,
    Xml,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
    pub pretty_json: bool,
}

impl ProcessingStage {
    fn name(&self) -> &'static str {
        match self {
            ProcessingStage::Indent => "indent",
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
            ProcessingStage::Akn => "akn",
        }
    }
}

impl OutputFormat {
    fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Xml => "xml",
        }
    }
}

impl ProcessingSpec {
    pub fn new(stage: ProcessingStage, format: OutputFormat) -> Self {
        Self {
            stage,
            format,
            pretty_json: true,
        }
    }

    pub fn with_pretty_json(mut self, pretty_json: bool) -> Self {
        self.pretty_json = pretty_json;
        self
    }

    /// Parse a format string like "token-simple" or "akn-xml"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let Some((stage, format)) = format_str.split_once('-') else {
            return Err(ProcessingError::InvalidFormat(format_str.to_string()));
        };

        let stage = match stage {
            "indent" => ProcessingStage::Indent,
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            "akn" => ProcessingStage::Akn,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "text" => OutputFormat::Text,
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "treeviz" => OutputFormat::Treeviz,
            "xml" => OutputFormat::Xml,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        let spec = ProcessingSpec::new(stage, format);
        if Self::available_specs().contains(&spec) {
            Ok(spec)
        } else {
            Err(ProcessingError::InvalidFormatType(format!(
                "format '{}' is not supported for the {} stage",
                format.name(),
                stage.name()
            )))
        }
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            ProcessingSpec::new(ProcessingStage::Indent, OutputFormat::Text),
            ProcessingSpec::new(ProcessingStage::Token, OutputFormat::Simple),
            ProcessingSpec::new(ProcessingStage::Token, OutputFormat::Json),
            ProcessingSpec::new(ProcessingStage::Ast, OutputFormat::Json),
            ProcessingSpec::new(ProcessingStage::Ast, OutputFormat::Treeviz),
            ProcessingSpec::new(ProcessingStage::Akn, OutputFormat::Xml),
        ]
    }

    /// The `<stage>-<format>` string of this spec
    pub fn name(&self) -> String {
        format!("{}-{}", self.stage.name(), self.format.name())
    }
}

/// Errors that can occur during processing
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid stage: {0}")]
    InvalidStage(String),
    #[error("Invalid format type: {0}")]
    InvalidFormatType(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Clean(#[from] CleanError),
}

/// Process CLEAN source text according to the given specification
pub fn process_str(source: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    tracing::debug!(spec = %spec.name(), "processing source");

    match spec.stage {
        ProcessingStage::Indent => Ok(normalize_indentation(source)?.text),
        ProcessingStage::Token => {
            let lexed = lex(source)?;
            let tokens: Vec<Token> = lexed.tokens.into_iter().map(|(t, _)| t).collect();
            format_tokens(&tokens, spec)
        }
        ProcessingStage::Ast => {
            let act = parse_document(source)?;
            match spec.format {
                OutputFormat::Treeviz => Ok(to_treeviz_str(&act)),
                _ => to_json(&act, spec.pretty_json),
            }
        }
        ProcessingStage::Akn => {
            let act = parse_document(source)?;
            Ok(generate_act(&act)?)
        }
    }
}

/// Process a CLEAN file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(ProcessingError::FileNotFound(
            file_path.display().to_string(),
        ));
    }

    let content = fs::read_to_string(file_path)?;
    process_str(&content, spec)
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, ProcessingError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Format tokens according to the specified format
pub fn format_tokens(tokens: &[Token], spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    match spec.format {
        OutputFormat::Simple => {
            let mut result = String::new();
            for token in tokens {
                result.push_str(&format!("{}", token));
                if matches!(
                    token,
                    Token::Newline | Token::BlankLine | Token::Indent | Token::Undent
                ) {
                    result.push('\n');
                }
            }
            Ok(result)
        }
        OutputFormat::Json => to_json(tokens, spec.pretty_json),
        _ => Err(ProcessingError::InvalidFormatType(format!(
            "{} format only works with other stages",
            spec.format.name()
        ))),
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .into_iter()
        .map(|spec| spec.name())
        .collect()
}

/// Sample sources module for accessing the bundled CLEAN documents
pub mod clean_sources {
    use super::*;

    /// Available sample files (canonical sources)
    pub const AVAILABLE_SAMPLES: &[&str] = &["rps.clean", "kitchen-sink.clean"];

    /// Main interface for accessing CLEAN sample files
    pub struct CleanSources;

    impl CleanSources {
        /// Get the full path to a sample file
        fn sample_path(filename: &str) -> String {
            format!("docs/samples/{}", filename)
        }

        /// Validate that a sample file exists and is available
        fn validate_sample(filename: &str) -> Result<(), ProcessingError> {
            if !AVAILABLE_SAMPLES.contains(&filename) {
                return Err(ProcessingError::FileNotFound(format!(
                    "sample '{}' is not available (known samples: {})",
                    filename,
                    AVAILABLE_SAMPLES.join(", ")
                )));
            }
            Ok(())
        }

        /// Get the raw content of a sample
        pub fn get_string(filename: &str) -> Result<String, ProcessingError> {
            Self::validate_sample(filename)?;
            Ok(fs::read_to_string(Self::sample_path(filename))?)
        }

        /// Get a sample processed with a `<stage>-<format>` string
        pub fn get_processed(filename: &str, format: &str) -> Result<String, ProcessingError> {
            let spec = ProcessingSpec::from_string(format)?;
            process_str(&Self::get_string(filename)?, &spec)
        }
    }
}
