//! JSON/YAML file conversion

pub mod error;
pub mod transform;

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::cli::{ConversionRequest, SourceFormat};
use crate::utils::print_conversion_status;

pub use error::ConvertError;
pub use transform::{json_to_yaml, yaml_to_json, Transform};

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub from: SourceFormat,
    pub input: PathBuf,
    pub output: PathBuf,
    pub bytes_read: usize,
    pub bytes_written: usize,
}

impl SourceFormat {
    /// The transform for this direction, or an error for an unrecognized format.
    pub fn transform(&self) -> Result<Transform, ConvertError> {
        match self {
            SourceFormat::FromJson => Ok(json_to_yaml as Transform),
            SourceFormat::FromYaml => Ok(yaml_to_json as Transform),
            SourceFormat::Unspecified(value) => Err(ConvertError::UnrecognizedFormat {
                value: value.clone(),
            }),
        }
    }
}

/// Run a conversion request.
///
/// An unrecognized `--from` is rejected before any file is touched.
/// Otherwise a status line is printed and the input is read, transformed
/// and written to the output.
pub fn convert(request: &ConversionRequest) -> Result<ConversionReport, ConvertError> {
    debug!("Requested conversion from '{}'", request.from);
    let transform = request.from.transform()?;

    if let (Some(source), Some(target)) = (request.from.source_name(), request.from.target_name()) {
        print_conversion_status(source, &request.input, target, &request.output);
    }

    let (bytes_read, bytes_written) = process(&request.input, &request.output, transform)?;
    info!(
        "Converted {} ({} bytes) to {} ({} bytes)",
        request.input.display(),
        bytes_read,
        request.output.display(),
        bytes_written
    );

    Ok(ConversionReport {
        from: request.from.clone(),
        input: request.input.clone(),
        output: request.output.clone(),
        bytes_read,
        bytes_written,
    })
}

/// Read `input` fully, apply `transform` and write the result to `output`.
///
/// The output file is only created once the transform has succeeded, so a
/// parse failure leaves any existing destination untouched. Returns the
/// number of bytes read and written.
pub fn process(input: &Path, output: &Path, transform: Transform) -> Result<(usize, usize), ConvertError> {
    let content = read_input(input)?;
    debug!("Read {} bytes from {}", content.len(), input.display());

    let converted = transform(&content).map_err(|e| ConvertError::Content {
        path: input.to_path_buf(),
        source: Box::new(e),
    })?;

    write_output(output, &converted)?;
    Ok((content.len(), converted.len()))
}

fn read_input(path: &Path) -> Result<String, ConvertError> {
    let read_err = |source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::open(path).map_err(read_err)?;
    let mut content = String::new();
    file.read_to_string(&mut content).map_err(read_err)?;
    Ok(content)
}

fn write_output(path: &Path, content: &str) -> Result<(), ConvertError> {
    let write_err = |source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(write_err)?;
    file.write_all(content.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;
    Ok(())
}
