use log::warn;

use super::variables::PATH_PARAM;
use crate::parse::operation::ApiOperation;
use crate::parse::ref_resolve::resolve_request_body;
use crate::parse::request_body::JSON_CONTENT_TYPE;
use crate::parse::spec::SpecDocument;
use crate::routes::strip_api_prefix;
use crate::transform::ExampleResolver;

/// Separator line opening every request block.
pub const BLOCK_SEPARATOR: &str = "###";

/// Renders operations as `.http` request blocks.
#[derive(Debug, Clone, Copy)]
pub struct RequestRenderer<'a> {
    document: &'a SpecDocument,
    examples: ExampleResolver<'a>,
    api_prefix: &'a str,
    base_url_variable: &'a str,
}

impl<'a> RequestRenderer<'a> {
    pub fn new(
        document: &'a SpecDocument,
        api_prefix: &'a str,
        base_url_variable: &'a str,
    ) -> Self {
        Self {
            document,
            examples: ExampleResolver::new(&document.raw),
            api_prefix,
            base_url_variable,
        }
    }

    /// Render one request block. Every line, including the last, ends in `\n`.
    ///
    /// ```text
    /// ###
    ///
    /// # @title Create form
    /// POST {{BASE_URL}}/orgs/{{slug}}/forms
    /// Content-Type: application/json
    ///
    /// { ... }
    /// ```
    pub fn render(&self, op: &ApiOperation<'_>) -> String {
        let mut out = String::new();
        out.push_str(BLOCK_SEPARATOR);
        out.push_str("\n\n");

        if let Some(summary) = op.operation.summary.as_deref().filter(|s| !s.is_empty()) {
            out.push_str(&format!("# @title {summary}\n"));
        }
        if let Some(description) = op
            .operation
            .description
            .as_deref()
            .filter(|s| !s.is_empty())
        {
            out.push_str(&format!("# @description {description}\n"));
        }

        out.push_str(&format!(
            "{} {{{{{}}}}}{}\n",
            op.method,
            self.base_url_variable,
            self.request_target(op.url)
        ));

        if let Some(ref body) = op.operation.request_body {
            out.push_str(&format!("Content-Type: {JSON_CONTENT_TYPE}\n"));

            let example = resolve_request_body(self.document, body)
                .and_then(|rb| rb.json_schema())
                .and_then(|schema| self.examples.example_for(schema));
            if let Some(example) = example {
                match serde_json::to_string_pretty(&example) {
                    Ok(json) => {
                        out.push('\n');
                        out.push_str(&json);
                        out.push('\n');
                    }
                    Err(e) => {
                        warn!("failed to serialize example for {} {}: {e}", op.method, op.url)
                    }
                }
            }
        }

        out
    }

    /// Path with the API prefix removed and `{param}` turned into `{{param}}`.
    fn request_target(&self, url: &str) -> String {
        let path = strip_api_prefix(url, self.api_prefix);
        PATH_PARAM.replace_all(path, "{{$1}}").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use crate::parse::operation::HttpMethod;

    const SPEC: &str = r##"
openapi: 3.0.0
info:
  title: Core System
  version: 1.0.0
paths:
  /api/orgs/{slug}/forms:
    get:
      summary: List forms
      description: Lists every form owned by the organization.
    post:
      summary: Create form
      requestBody:
        required: true
        content:
          application/json:
            schema:
              $ref: "#/components/schemas/Forms.FormRequest"
  /api/forms/{id}/cover:
    post:
      requestBody:
        content:
          multipart/form-data:
            schema:
              type: object
  /api/forms/{id}/archive:
    post:
      requestBody:
        $ref: "#/components/requestBodies/Archive"
  /api/forms/{id}:
    post:
      requestBody:
        $ref: "#/components/requestBodies/Missing"
components:
  schemas:
    Forms.FormRequest:
      type: object
      properties:
        title:
          type: string
        unitId:
          type: string
          format: uuid
        deadline:
          type: integer
  requestBodies:
    Archive:
      content:
        application/json:
          schema:
            type: object
            properties:
              reason:
                type: string
                example: duplicate
"##;

    fn render(url: &str, method: HttpMethod) -> String {
        let doc = parse::from_yaml(SPEC).unwrap();
        let renderer = RequestRenderer::new(&doc, "/api", "BASE_URL");
        let op = doc
            .spec
            .operations()
            .into_iter()
            .find(|op| op.url == url && op.method == method)
            .unwrap();
        renderer.render(&op)
    }

    #[test]
    fn get_without_body() {
        let out = render("/api/orgs/{slug}/forms", HttpMethod::Get);
        insta::assert_snapshot!(&out, @r"
        ###

        # @title List forms
        # @description Lists every form owned by the organization.
        GET {{BASE_URL}}/orgs/{{slug}}/forms
        ");
        assert!(!out.contains("Content-Type"));
        assert!(out.ends_with("/forms\n"));
    }

    #[test]
    fn post_with_synthesized_body() {
        let out = render("/api/orgs/{slug}/forms", HttpMethod::Post);
        insta::assert_snapshot!(&out, @r#"
        ###

        # @title Create form
        POST {{BASE_URL}}/orgs/{{slug}}/forms
        Content-Type: application/json

        {
          "title": "",
          "unitId": "00000000-0000-0000-0000-000000000000",
          "deadline": 0
        }
        "#);
    }

    #[test]
    fn non_json_body_gets_header_only() {
        let out = render("/api/forms/{id}/cover", HttpMethod::Post);
        assert_eq!(
            out,
            "###\n\nPOST {{BASE_URL}}/forms/{{id}}/cover\nContent-Type: application/json\n"
        );
    }

    #[test]
    fn request_body_refs_are_followed() {
        let out = render("/api/forms/{id}/archive", HttpMethod::Post);
        assert!(
            out.ends_with("Content-Type: application/json\n\n{\n  \"reason\": \"duplicate\"\n}\n")
        );
    }

    #[test]
    fn dangling_request_body_ref_keeps_header() {
        let out = render("/api/forms/{id}", HttpMethod::Post);
        assert_eq!(
            out,
            "###\n\nPOST {{BASE_URL}}/forms/{{id}}\nContent-Type: application/json\n"
        );
    }

    #[test]
    fn custom_base_url_variable() {
        let doc = parse::from_yaml(SPEC).unwrap();
        let renderer = RequestRenderer::new(&doc, "/api", "HOST");
        let op = doc.spec.operations()[0];
        assert!(renderer.render(&op).contains("GET {{HOST}}/orgs/{{slug}}/forms\n"));
    }
}
