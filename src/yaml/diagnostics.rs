//! Diagnostic error types for YAML entry files
//!
//! Syntax errors keep the source text so miette can render a snippet with the
//! offending line highlighted.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A YAML syntax or shape error with the source it came from
#[derive(Debug, Error, Diagnostic)]
#[error("invalid YAML in {filename}: {message}")]
#[diagnostic(
    code(stackup::yaml::syntax),
    help("entry files look like:\n  features:\n    - length: 10.0\n      tolerance: 0.1")
)]
pub struct YamlSyntaxError {
    /// File name shown in the report
    pub filename: String,

    /// Message from the YAML parser
    pub message: String,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("here")]
    pub span: Option<SourceSpan>,
}

impl YamlSyntaxError {
    /// Build a diagnostic from a serde_yml error and the text that produced it
    pub fn from_serde_error(err: &serde_yml::Error, content: &str, filename: &str) -> Self {
        let span = err.location().map(|loc| {
            let offset = loc.index().min(content.len());
            SourceSpan::from((offset, 1usize.min(content.len() - offset)))
        });

        Self {
            filename: filename.to_string(),
            message: err.to_string(),
            src: NamedSource::new(filename, content.to_string()),
            span,
        }
    }
}

/// Errors from parsing YAML content
#[derive(Debug, Error, Diagnostic)]
pub enum YamlError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(YamlSyntaxError),
}
