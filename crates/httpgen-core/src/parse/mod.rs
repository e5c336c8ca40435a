pub mod components;
pub mod media_type;
pub mod operation;
pub mod ref_resolve;
pub mod request_body;
pub mod spec;

use serde_json::Value;

use crate::error::ParseError;
use spec::{OpenApiSpec, SpecDocument};

/// Parse an OpenAPI spec from YAML.
pub fn from_yaml(input: &str) -> Result<SpecDocument, ParseError> {
    let raw: Value = serde_yaml_ng::from_str(input)?;
    from_value(raw)
}

/// Parse an OpenAPI spec from JSON.
pub fn from_json(input: &str) -> Result<SpecDocument, ParseError> {
    let raw: Value = serde_json::from_str(input)?;
    from_value(raw)
}

/// Parse by file extension: `.json` is JSON, everything else YAML.
pub fn from_extension(input: &str, extension: Option<&str>) -> Result<SpecDocument, ParseError> {
    match extension {
        Some("json") => from_json(input),
        _ => from_yaml(input),
    }
}

/// Build the typed view over an already parsed document.
fn from_value(raw: Value) -> Result<SpecDocument, ParseError> {
    let spec: OpenApiSpec = serde_json::from_value(raw.clone()).map_err(ParseError::Shape)?;
    validate_version(&spec)?;
    Ok(SpecDocument { spec, raw })
}

fn validate_version(spec: &OpenApiSpec) -> Result<(), ParseError> {
    if !spec.openapi.starts_with("3.") {
        return Err(ParseError::UnsupportedVersion(spec.openapi.clone()));
    }
    Ok(())
}
