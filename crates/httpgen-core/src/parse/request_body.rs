use indexmap::IndexMap;
use serde::Deserialize;

use super::media_type::MediaType;

/// The only content type request bodies are rendered for.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A request body definition.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RequestBody {
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

impl RequestBody {
    /// Schema of the `application/json` content, if declared.
    pub fn json_schema(&self) -> Option<&serde_json::Value> {
        self.content
            .get(JSON_CONTENT_TYPE)
            .and_then(|media| media.schema.as_ref())
    }
}

/// A reference or inline request body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RequestBodyOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    RequestBody(RequestBody),
}
