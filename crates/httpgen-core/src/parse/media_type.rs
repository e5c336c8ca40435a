use serde::Deserialize;

/// A media type object.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MediaType {
    pub schema: Option<serde_json::Value>,
}
