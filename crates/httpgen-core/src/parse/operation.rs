use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use super::request_body::RequestBodyOrRef;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
    Trace,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Trace => "TRACE",
        }
    }

    /// Parse a lower-case path item key such as `get`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "get" => Some(HttpMethod::Get),
            "post" => Some(HttpMethod::Post),
            "put" => Some(HttpMethod::Put),
            "delete" => Some(HttpMethod::Delete),
            "patch" => Some(HttpMethod::Patch),
            "options" => Some(HttpMethod::Options),
            "head" => Some(HttpMethod::Head),
            "trace" => Some(HttpMethod::Trace),
            _ => None,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An API operation.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Operation {
    pub summary: Option<String>,

    pub description: Option<String>,

    #[serde(rename = "requestBody")]
    pub request_body: Option<RequestBodyOrRef>,
}

/// A path item, containing operations keyed by HTTP method.
///
/// Methods keep the order they are declared in. Non-method keys such as
/// `parameters` or `summary` are ignored.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(try_from = "IndexMap<String, Value>")]
pub struct PathItem {
    operations: IndexMap<HttpMethod, Operation>,
}

impl PathItem {
    /// Declared operations in document order.
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> {
        self.operations.iter().map(|(method, op)| (*method, op))
    }

    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        self.operations.get(&method)
    }
}

impl TryFrom<IndexMap<String, Value>> for PathItem {
    type Error = serde_json::Error;

    fn try_from(entries: IndexMap<String, Value>) -> Result<Self, Self::Error> {
        let mut operations = IndexMap::new();
        for (key, value) in entries {
            let Some(method) = HttpMethod::from_key(&key) else {
                continue;
            };
            if value.is_null() {
                continue;
            }
            operations.insert(method, serde_json::from_value(value)?);
        }
        Ok(Self { operations })
    }
}

/// One (path, method) pair drawn from the spec's `paths` map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApiOperation<'a> {
    /// Path key exactly as written in the spec, API prefix included.
    pub url: &'a str,
    pub method: HttpMethod,
    pub operation: &'a Operation,
}
