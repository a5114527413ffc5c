//! Pure text-to-text transforms between JSON and YAML

use serde::Deserialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Number, Value as JsonValue};
use serde_yaml::Value as YamlValue;

use super::error::ConvertError;

/// Indentation used for each nesting level of emitted JSON.
pub const JSON_INDENT: &[u8] = b"\t";

/// Signature shared by both transforms.
pub type Transform = fn(&str) -> Result<String, ConvertError>;

/// Parse `input` as JSON and emit it as a YAML document.
///
/// Object key order is preserved.
pub fn json_to_yaml(input: &str) -> Result<String, ConvertError> {
    let value: JsonValue = serde_json::from_str(input).map_err(ConvertError::ParseJson)?;
    serde_yaml::to_string(&value).map_err(ConvertError::EmitYaml)
}

/// Parse the first YAML document in `input` and emit it as pretty JSON,
/// one tab per nesting level and one entry per line.
///
/// Merge keys (`<<: *anchor`) are expanded. An input without any document
/// converts to `null`.
pub fn yaml_to_json(input: &str) -> Result<String, ConvertError> {
    let mut yaml = match serde_yaml::Deserializer::from_str(input).next() {
        Some(document) => YamlValue::deserialize(document).map_err(ConvertError::ParseYaml)?,
        None => YamlValue::Null,
    };
    yaml.apply_merge().map_err(ConvertError::ParseYaml)?;
    let json = yaml_value_to_json(yaml)?;
    to_tab_indented_json(&json)
}

/// Serialize a JSON value with [`JSON_INDENT`] indentation.
pub fn to_tab_indented_json(value: &JsonValue) -> Result<String, ConvertError> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    serde::Serialize::serialize(value, &mut ser).map_err(ConvertError::EmitJson)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Convert a YAML value into the JSON value universe.
///
/// Tags are dropped, scalar mapping keys are rendered as text and
/// non-finite floats are rejected.
pub fn yaml_value_to_json(value: YamlValue) -> Result<JsonValue, ConvertError> {
    Ok(match value {
        YamlValue::Null => JsonValue::Null,
        YamlValue::Bool(b) => JsonValue::Bool(b),
        YamlValue::Number(n) => JsonValue::Number(yaml_number_to_json(&n)?),
        YamlValue::String(s) => JsonValue::String(s),
        YamlValue::Sequence(items) => JsonValue::Array(
            items
                .into_iter()
                .map(yaml_value_to_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        YamlValue::Mapping(mapping) => {
            let mut object = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                object.insert(mapping_key(key)?, yaml_value_to_json(value)?);
            }
            JsonValue::Object(object)
        }
        YamlValue::Tagged(tagged) => yaml_value_to_json(tagged.value)?,
    })
}

fn yaml_number_to_json(n: &serde_yaml::Number) -> Result<Number, ConvertError> {
    if let Some(i) = n.as_i64() {
        Ok(Number::from(i))
    } else if let Some(u) = n.as_u64() {
        Ok(Number::from(u))
    } else {
        let f = n.as_f64().unwrap_or(f64::NAN);
        Number::from_f64(f).ok_or(ConvertError::NonFiniteNumber(f))
    }
}

fn mapping_key(key: YamlValue) -> Result<String, ConvertError> {
    match key {
        YamlValue::String(s) => Ok(s),
        YamlValue::Null => Ok(String::new()),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Tagged(tagged) => mapping_key(tagged.value),
        YamlValue::Sequence(_) => Err(ConvertError::UnsupportedKey("sequence")),
        YamlValue::Mapping(_) => Err(ConvertError::UnsupportedKey("mapping")),
    }
}
