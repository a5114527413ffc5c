//! Routing of parsed switches to either a conversion or the help text

use std::fmt;
use std::path::PathBuf;

use log::debug;

use super::switches::SwitchMap;

/// Switches that must all be present for a conversion to run.
pub const CONVERT_SWITCHES: [&str; 3] = ["in", "out", "from"];

/// Switches that request the help text. Takes priority over a conversion.
pub const HELP_SWITCHES: [&str; 1] = ["help"];

/// Format of the source file named by `--from`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceFormat {
    /// Source is JSON, destination is YAML
    FromJson,
    /// Source is YAML, destination is JSON
    FromYaml,
    /// `--from` held something other than `json` or `yaml` (or no value)
    Unspecified(Option<String>),
}

impl SourceFormat {
    /// Resolve the raw `--from` value. Matching is exact and case-sensitive.
    pub fn from_switch(value: Option<&str>) -> Self {
        match value {
            Some("json") => Self::FromJson,
            Some("yaml") => Self::FromYaml,
            other => Self::Unspecified(other.map(str::to_string)),
        }
    }

    /// Name of the source format, if recognized.
    pub fn source_name(&self) -> Option<&'static str> {
        match self {
            Self::FromJson => Some("JSON"),
            Self::FromYaml => Some("YAML"),
            Self::Unspecified(_) => None,
        }
    }

    /// Name of the destination format, if recognized.
    pub fn target_name(&self) -> Option<&'static str> {
        match self {
            Self::FromJson => Some("YAML"),
            Self::FromYaml => Some("JSON"),
            Self::Unspecified(_) => None,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FromJson => write!(f, "json"),
            Self::FromYaml => write!(f, "yaml"),
            Self::Unspecified(Some(raw)) => write!(f, "{}", raw),
            Self::Unspecified(None) => write!(f, "<none>"),
        }
    }
}

/// A fully resolved conversion: source path, destination path and direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub from: SourceFormat,
}

impl ConversionRequest {
    /// Build a request from switches already known to contain every
    /// [`CONVERT_SWITCHES`] entry. A valueless `--in`/`--out` becomes an
    /// empty path, which fails when opened.
    fn from_switches(switches: &SwitchMap) -> Self {
        Self {
            input: PathBuf::from(switches.get("in").unwrap_or_default()),
            output: PathBuf::from(switches.get("out").unwrap_or_default()),
            from: SourceFormat::from_switch(switches.get("from")),
        }
    }
}

/// What the program should do for a given set of switches
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Convert(ConversionRequest),
    Help,
}

/// Decide between conversion and help.
///
/// Conversion needs every switch in [`CONVERT_SWITCHES`] and no `--help`.
/// Everything else, including unknown or incomplete input, shows help.
pub fn dispatch(switches: &SwitchMap) -> Route {
    let has_convert = CONVERT_SWITCHES.iter().all(|s| switches.contains(s));
    let has_help = HELP_SWITCHES.iter().all(|s| switches.contains(s));

    debug!("Dispatch: has_convert={}, has_help={}", has_convert, has_help);

    if has_convert && !has_help {
        Route::Convert(ConversionRequest::from_switches(switches))
    } else {
        Route::Help
    }
}
