//! Entry intake - inline arguments and entries files
//!
//! Entries files come in three shapes, chosen by extension:
//!
//! ```yaml
//! # gap.yaml / gap.json
//! title: Housing gap
//! features:
//!   - length: 10.0
//!     tolerance: 0.1
//! ```
//!
//! ```text
//! # gap.csv
//! length,tolerance
//! 10.0,0.1
//! ```

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::entities::stackup::FeatureEntry;
use crate::yaml::{parse_yaml, YamlError};

/// Separators accepted between length and tolerance in inline entries
const ENTRY_SEPARATORS: [&str; 4] = ["±", "+/-", ":", ","];

/// Errors raised while collecting entries
#[derive(Debug, Error, Diagnostic)]
pub enum InputError {
    #[error("invalid entry '{input}': {reason}")]
    #[diagnostic(
        code(stackup::input::entry),
        help("write entries as LENGTH:TOL, e.g. 10.0:0.1 or -3:0.05")
    )]
    InvalidEntry { input: String, reason: String },

    #[error("unsupported entries file '{}'", path.display())]
    #[diagnostic(
        code(stackup::input::format),
        help("use a .yaml, .yml, .json or .csv file, or '-' for YAML on stdin")
    )]
    UnsupportedFormat { path: PathBuf },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Yaml(#[from] YamlError),

    #[error("invalid JSON in {filename}: {source}")]
    #[diagnostic(code(stackup::input::json))]
    Json {
        filename: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid CSV in {filename}: {source}")]
    #[diagnostic(
        code(stackup::input::csv),
        help("CSV files need a 'length,tolerance' header row")
    )]
    Csv {
        filename: String,
        #[source]
        source: csv::Error,
    },

    #[error("feature {index} has negative tolerance {value}")]
    #[diagnostic(
        code(stackup::input::negative_tolerance),
        help("tolerances are ± magnitudes; pass --policy absolute to use |tol|, or --policy accept to keep it")
    )]
    NegativeTolerance { index: usize, value: f64 },

    #[error("feature {index} has non-finite {field} ({value})")]
    #[diagnostic(code(stackup::input::non_finite))]
    NonFinite {
        index: usize,
        field: &'static str,
        value: f64,
    },

    #[error("failed to read {}", path.display())]
    #[diagnostic(code(stackup::input::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Entries file contents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StackupInput {
    /// Optional name for the chain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Features in chain order; `features:` with no value means none
    #[serde(default, deserialize_with = "null_as_empty")]
    pub features: Vec<FeatureEntry>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<FeatureEntry>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<FeatureEntry>>::deserialize(deserializer)?.unwrap_or_default())
}

/// True when YAML text holds no document, only blank lines and comments
fn is_blank_yaml(content: &str) -> bool {
    content
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#') || line == "---")
}

/// On-disk format of an entries file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Yaml,
    Json,
    Csv,
}

impl InputFormat {
    /// Pick a format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, InputError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(InputFormat::Yaml),
            Some("json") => Ok(InputFormat::Json),
            Some("csv") => Ok(InputFormat::Csv),
            _ => Err(InputError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

impl FromStr for FeatureEntry {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (length, tolerance) = ENTRY_SEPARATORS
            .iter()
            .find_map(|sep| trimmed.split_once(*sep))
            .ok_or_else(|| InputError::InvalidEntry {
                input: s.to_string(),
                reason: "expected a length and a tolerance separated by ':'".to_string(),
            })?;

        Ok(FeatureEntry::new(
            parse_number(length, s, "length")?,
            parse_number(tolerance, s, "tolerance")?,
        ))
    }
}

fn parse_number(text: &str, input: &str, field: &str) -> Result<f64, InputError> {
    text.trim()
        .parse::<f64>()
        .map_err(|e| InputError::InvalidEntry {
            input: input.to_string(),
            reason: format!("{} '{}' is not a number ({})", field, text.trim(), e),
        })
}

/// Parse entries file contents in the given format
pub fn parse_input(
    content: &str,
    format: InputFormat,
    filename: &str,
) -> Result<StackupInput, InputError> {
    match format {
        InputFormat::Yaml if is_blank_yaml(content) => Ok(StackupInput::default()),
        InputFormat::Yaml => Ok(parse_yaml(content, filename)?),
        InputFormat::Json => serde_json::from_str(content).map_err(|source| InputError::Json {
            filename: filename.to_string(),
            source,
        }),
        InputFormat::Csv => {
            let mut reader = csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_reader(content.as_bytes());
            let features = reader
                .deserialize::<FeatureEntry>()
                .collect::<Result<Vec<_>, _>>()
                .map_err(|source| InputError::Csv {
                    filename: filename.to_string(),
                    source,
                })?;
            Ok(StackupInput {
                title: None,
                features,
            })
        }
    }
}

/// Load an entries file; `-` reads YAML from stdin
pub fn load_input(path: &Path) -> Result<StackupInput, InputError> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|source| InputError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        return parse_input(&content, InputFormat::Yaml, "<stdin>");
    }

    let format = InputFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let input = parse_input(&content, format, &path.display().to_string())?;
    tracing::debug!(
        path = %path.display(),
        features = input.features.len(),
        "loaded entries file"
    );
    Ok(input)
}

/// Write entries as a YAML entries file
pub fn save_input(path: &Path, input: &StackupInput) -> Result<(), InputError> {
    let yaml = serde_yml::to_string(input).map_err(|e| InputError::InvalidEntry {
        input: path.display().to_string(),
        reason: e.to_string(),
    })?;
    std::fs::write(path, yaml).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })
}
