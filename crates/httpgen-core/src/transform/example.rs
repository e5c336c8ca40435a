use std::collections::HashSet;

use log::{debug, warn};
use serde_json::{Map, Value};

use crate::parse::ref_resolve::resolve_pointer;

/// Recursion cap for example synthesis.
pub const MAX_EXAMPLE_DEPTH: usize = 32;

/// Placeholder for `format: uuid` strings without an example.
pub const NIL_UUID: &str = "00000000-0000-0000-0000-000000000000";

/// Synthesizes a representative example value for a schema node.
///
/// Resolution order, first applicable wins: follow `$ref`, first entry of
/// `examples`, `example`, then an object built from `properties`. An object
/// property without an example of its own falls back to a zero value for
/// its primitive `type`. Objects with no contributing properties have no
/// example.
///
/// A `$ref` already being expanded further up the current branch yields no
/// example, so mutually referential schemas terminate.
#[derive(Debug, Clone, Copy)]
pub struct ExampleResolver<'a> {
    document: &'a Value,
}

impl<'a> ExampleResolver<'a> {
    /// `document` is the whole spec; `$ref` pointers are resolved against it.
    pub fn new(document: &'a Value) -> Self {
        Self { document }
    }

    pub fn example_for(&self, schema: &Value) -> Option<Value> {
        let mut expanding = HashSet::new();
        self.resolve(schema, 0, &mut expanding)
    }

    fn resolve<'s>(
        &self,
        schema: &'s Value,
        depth: usize,
        expanding: &mut HashSet<&'s str>,
    ) -> Option<Value>
    where
        'a: 's,
    {
        if depth > MAX_EXAMPLE_DEPTH {
            debug!("example depth limit reached");
            return None;
        }

        if let Some(ref_path) = schema.get("$ref").and_then(Value::as_str) {
            if !expanding.insert(ref_path) {
                debug!("circular reference cut: {ref_path}");
                return None;
            }
            let example = match resolve_pointer(self.document, ref_path) {
                Some(target) => self.resolve(target, depth + 1, expanding),
                None => {
                    warn!("unresolved schema reference: {ref_path}");
                    None
                }
            };
            expanding.remove(ref_path);
            return example;
        }

        if let Some(first) = schema
            .get("examples")
            .and_then(Value::as_array)
            .and_then(|examples| examples.first())
        {
            return non_null(first);
        }

        if let Some(example) = schema.get("example") {
            return non_null(example);
        }

        if schema.get("type").and_then(Value::as_str) == Some("object") {
            if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
                let mut object = Map::new();
                for (name, property) in properties {
                    let value = self
                        .resolve(property, depth + 1, expanding)
                        .or_else(|| primitive_default(property));
                    if let Some(value) = value {
                        object.insert(name.clone(), value);
                    }
                }
                return (!object.is_empty()).then_some(Value::Object(object));
            }
        }

        None
    }
}

fn non_null(value: &Value) -> Option<Value> {
    (!value.is_null()).then(|| value.clone())
}

/// Zero value for a primitive-typed property lacking an example.
fn primitive_default(property: &Value) -> Option<Value> {
    match property.get("type").and_then(Value::as_str)? {
        "string" => {
            if property.get("format").and_then(Value::as_str) == Some("uuid") {
                Some(Value::String(NIL_UUID.to_string()))
            } else {
                Some(Value::String(String::new()))
            }
        }
        "number" | "integer" => Some(Value::from(0)),
        "boolean" => Some(
            property
                .get("default")
                .filter(|v| !v.is_null())
                .cloned()
                .unwrap_or(Value::Bool(false)),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc() -> Value {
        json!({
            "components": {
                "schemas": {
                    "Forms.Form": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string", "format": "uuid" },
                            "title": { "type": "string", "example": "Club Signup" },
                            "section": { "$ref": "#/components/schemas/Forms.Section" }
                        }
                    },
                    "Forms.Section": {
                        "type": "object",
                        "properties": {
                            "order": { "type": "integer" }
                        }
                    },
                    "Alias": { "$ref": "#/components/schemas/Forms.Section" },
                    "Node": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string" },
                            "parent": { "$ref": "#/components/schemas/Node" },
                            "partner": { "$ref": "#/components/schemas/Partner" }
                        }
                    },
                    "Partner": {
                        "type": "object",
                        "properties": {
                            "node": { "$ref": "#/components/schemas/Node" },
                            "active": { "type": "boolean", "default": true }
                        }
                    }
                }
            }
        })
    }

    #[test]
    fn synthesizes_uuid_and_integer_defaults() {
        let doc = doc();
        let resolver = ExampleResolver::new(&doc);
        let schema = json!({
            "type": "object",
            "properties": {
                "id": { "type": "string", "format": "uuid" },
                "count": { "type": "integer" }
            }
        });
        assert_eq!(
            resolver.example_for(&schema),
            Some(json!({ "id": NIL_UUID, "count": 0 }))
        );
    }

    #[test]
    fn primitive_defaults() {
        let doc = doc();
        let resolver = ExampleResolver::new(&doc);
        let schema = json!({
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "price": { "type": "number" },
                "open": { "type": "boolean" },
                "pinned": { "type": "boolean", "default": true },
                "tags": { "type": "array", "items": { "type": "string" } }
            }
        });
        assert_eq!(
            resolver.example_for(&schema),
            Some(json!({ "name": "", "price": 0, "open": false, "pinned": true }))
        );
    }

    #[test]
    fn follows_refs_and_keeps_property_order() {
        let doc = doc();
        let resolver = ExampleResolver::new(&doc);
        let example = resolver
            .example_for(&json!({ "$ref": "#/components/schemas/Forms.Form" }))
            .unwrap();
        assert_eq!(
            example,
            json!({ "id": NIL_UUID, "title": "Club Signup", "section": { "order": 0 } })
        );
        let keys: Vec<&String> = example.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["id", "title", "section"]);
    }

    #[test]
    fn follows_transitive_refs() {
        let doc = doc();
        let resolver = ExampleResolver::new(&doc);
        assert_eq!(
            resolver.example_for(&json!({ "$ref": "#/components/schemas/Alias" })),
            Some(json!({ "order": 0 }))
        );
    }

    #[test]
    fn examples_list_wins_over_example() {
        let doc = doc();
        let resolver = ExampleResolver::new(&doc);
        let schema = json!({
            "type": "object",
            "examples": [{ "a": 1 }, { "a": 2 }],
            "example": { "a": 3 },
            "properties": { "a": { "type": "integer" } }
        });
        assert_eq!(resolver.example_for(&schema), Some(json!({ "a": 1 })));
    }

    #[test]
    fn explicit_example_is_taken_verbatim() {
        let doc = doc();
        let resolver = ExampleResolver::new(&doc);
        let schema = json!({ "type": "string", "example": "hello" });
        assert_eq!(resolver.example_for(&schema), Some(json!("hello")));
        assert_eq!(resolver.example_for(&json!({ "example": null })), None);
        assert_eq!(resolver.example_for(&json!({ "examples": [] })), None);
    }

    #[test]
    fn no_resolvable_properties_is_no_example() {
        let doc = doc();
        let resolver = ExampleResolver::new(&doc);
        let schema = json!({
            "type": "object",
            "properties": {
                "items": { "type": "array" },
                "missing": { "$ref": "#/components/schemas/Missing" }
            }
        });
        assert_eq!(resolver.example_for(&schema), None);
        assert_eq!(
            resolver.example_for(&json!({ "type": "object", "properties": {} })),
            None
        );
    }

    #[test]
    fn dangling_ref_is_no_example() {
        let doc = doc();
        let resolver = ExampleResolver::new(&doc);
        assert_eq!(
            resolver.example_for(&json!({ "$ref": "#/components/schemas/Missing" })),
            None
        );
    }

    #[test]
    fn bare_primitive_has_no_example() {
        let doc = doc();
        let resolver = ExampleResolver::new(&doc);
        assert_eq!(resolver.example_for(&json!({ "type": "string" })), None);
    }

    #[test]
    fn cycles_terminate() {
        let doc = doc();
        let resolver = ExampleResolver::new(&doc);
        let example = resolver
            .example_for(&json!({ "$ref": "#/components/schemas/Node" }))
            .unwrap();
        assert_eq!(example, json!({ "name": "", "partner": { "active": true } }));
    }

    #[test]
    fn resolution_is_idempotent() {
        let doc = doc();
        let resolver = ExampleResolver::new(&doc);
        let schema = json!({ "$ref": "#/components/schemas/Node" });
        assert_eq!(resolver.example_for(&schema), resolver.example_for(&schema));
    }

    #[test]
    fn deep_inline_nesting_is_bounded() {
        let doc = doc();
        let resolver = ExampleResolver::new(&doc);
        let mut schema = json!({
            "type": "object",
            "properties": { "leaf": { "type": "integer" } }
        });
        for _ in 0..(MAX_EXAMPLE_DEPTH + 4) {
            schema = json!({ "type": "object", "properties": { "next": schema } });
        }
        // The innermost levels fall past the cap and contribute nothing,
        // which empties every enclosing object.
        assert_eq!(resolver.example_for(&schema), None);
    }
}
