//! Error types for JSON/YAML conversion.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while converting a file.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// `--from` was not exactly `json` or `yaml`.
    ///
    /// Raised before any file is opened, so no destination is created.
    #[error("unrecognized source format '{}': expected 'json' or 'yaml'", .value.as_deref().unwrap_or("<none>"))]
    UnrecognizedFormat { value: Option<String> },

    /// The source file could not be opened or read as UTF-8 text.
    #[error("failed to read input file '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The destination file could not be created or written.
    #[error("failed to write output file '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source file's content failed to parse or convert.
    #[error("failed to convert content of '{}'", .path.display())]
    Content {
        path: PathBuf,
        #[source]
        source: Box<ConvertError>,
    },

    #[error("invalid JSON: {0}")]
    ParseJson(serde_json::Error),

    #[error("invalid YAML: {0}")]
    ParseYaml(serde_yaml::Error),

    #[error("failed to emit JSON: {0}")]
    EmitJson(serde_json::Error),

    #[error("failed to emit YAML: {0}")]
    EmitYaml(serde_yaml::Error),

    /// JSON has no representation for NaN or infinities.
    #[error("number {0} cannot be represented in JSON")]
    NonFiniteNumber(f64),

    /// A YAML mapping key that has no JSON object key equivalent.
    #[error("mapping key of type {0} cannot be used as a JSON object key")]
    UnsupportedKey(&'static str),
}
