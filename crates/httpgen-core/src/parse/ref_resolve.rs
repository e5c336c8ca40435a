use log::warn;
use serde_json::Value;

use super::request_body::{RequestBody, RequestBodyOrRef};
use super::spec::SpecDocument;

/// Follow an internal `$ref` such as `#/components/schemas/Forms.Form`
/// through the raw document.
///
/// Any depth of nesting is accepted. External references (anything not
/// starting with `#/`) and dangling pointers resolve to `None`.
pub fn resolve_pointer<'a>(document: &'a Value, ref_path: &str) -> Option<&'a Value> {
    let pointer = ref_path.strip_prefix('#')?;
    if !pointer.starts_with('/') {
        return None;
    }
    document.pointer(pointer)
}

/// Resolve a request body, following a `$ref` into `components.requestBodies`.
///
/// Chains of references are followed until an inline body is reached.
/// A dangling reference yields `None`.
pub fn resolve_request_body<'a>(
    document: &'a SpecDocument,
    body: &'a RequestBodyOrRef,
) -> Option<&'a RequestBody> {
    let mut current = body;
    // A body can only refer to another named body, so the chain is bounded by their count.
    let limit = document
        .spec
        .components
        .as_ref()
        .map_or(0, |c| c.request_bodies.len());

    for _ in 0..=limit {
        match current {
            RequestBodyOrRef::RequestBody(rb) => return Some(rb),
            RequestBodyOrRef::Ref { ref_path } => {
                let name = ref_path.strip_prefix("#/components/requestBodies/");
                let next = name.and_then(|name| {
                    document
                        .spec
                        .components
                        .as_ref()
                        .and_then(|c| c.request_bodies.get(name))
                });
                match next {
                    Some(next) => current = next,
                    None => {
                        warn!("request body reference target not found: {ref_path}");
                        return None;
                    }
                }
            }
        }
    }

    warn!("circular request body reference");
    None
}
