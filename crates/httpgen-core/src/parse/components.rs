use indexmap::IndexMap;
use serde::Deserialize;

use super::request_body::RequestBodyOrRef;

/// Components object holding reusable definitions.
///
/// Schemas stay untyped: example synthesis walks them as plain JSON.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, serde_json::Value>,

    #[serde(rename = "requestBodies", default)]
    pub request_bodies: IndexMap<String, RequestBodyOrRef>,
}
