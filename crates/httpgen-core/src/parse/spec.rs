use indexmap::IndexMap;
use serde::Deserialize;

use super::components::Components;
use super::operation::{ApiOperation, PathItem};

/// Top-level OpenAPI 3.x specification, limited to what request generation reads.
///
/// `info` and every other section are left to [`SpecDocument::raw`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OpenApiSpec {
    pub openapi: String,

    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,

    pub components: Option<Components>,
}

impl OpenApiSpec {
    /// Every operation in path order, then method order within a path.
    pub fn operations(&self) -> Vec<ApiOperation<'_>> {
        self.paths
            .iter()
            .flat_map(|(url, item)| {
                item.operations()
                    .map(move |(method, operation)| ApiOperation {
                        url: url.as_str(),
                        method,
                        operation,
                    })
            })
            .collect()
    }
}

/// A parsed spec together with the untyped document it came from.
///
/// `raw` is kept so `$ref` pointers can be followed into any part of the
/// document, not only the sections modelled by [`OpenApiSpec`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpecDocument {
    pub spec: OpenApiSpec,
    pub raw: serde_json::Value,
}
