use serde_json::{Map, Value, json};

use crate::catalog::ERROR_RESPONSE_MESSAGES;
use crate::config::OafConfig;
use crate::error::PatchError;
use crate::example::{ExampleSynthesizer, is_informative};
use crate::operations::{json_media_type_mut, operations_mut};
use crate::{Pass, PassId, PassReport};

/// Adds `example` payloads to shared error responses and to inline JSON
/// responses.
pub struct ResponseExamplesPass;

impl Pass for ResponseExamplesPass {
    fn id(&self) -> PassId {
        PassId::ResponseExamples
    }

    fn apply(&self, spec: &mut Value, config: &OafConfig) -> Result<PassReport, PatchError> {
        let shared = patch_error_responses(spec);
        let inline = patch_inline_responses(spec, config.examples.response_max_depth);
        log::info!("response examples: {shared} shared, {inline} inline");
        Ok(PassReport::count(self.id(), shared + inline))
    }
}

/// Canned `{"message": ...}` examples for `components.responses.<code>`.
fn patch_error_responses(spec: &mut Value) -> usize {
    let Some(responses) = spec
        .pointer_mut("/components/responses")
        .and_then(Value::as_object_mut)
    else {
        return 0;
    };

    let mut added = 0;
    for (code, message) in ERROR_RESPONSE_MESSAGES {
        let Some(media) = responses
            .get_mut(*code)
            .and_then(Value::as_object_mut)
            .and_then(json_media_type_mut)
        else {
            continue;
        };
        if has_example(media) {
            continue;
        }
        media.insert("example".to_string(), json!({ "message": message }));
        added += 1;
    }
    added
}

fn patch_inline_responses(spec: &mut Value, max_depth: usize) -> usize {
    let schemas = spec
        .pointer("/components/schemas")
        .and_then(Value::as_object)
        .cloned();
    let synth = ExampleSynthesizer::with_schemas(schemas.as_ref(), max_depth);

    let mut added = 0;
    for (path, method, op) in operations_mut(spec) {
        let Some(responses) = op.get_mut("responses").and_then(Value::as_object_mut) else {
            continue;
        };
        for (status, response) in responses.iter_mut() {
            let Some(response) = response.as_object_mut() else {
                continue;
            };
            if response.contains_key("$ref") {
                continue;
            }
            let Some(media) = json_media_type_mut(response) else {
                continue;
            };
            if fill_example(media, &synth) {
                log::debug!("{method} {path} {status}: example added");
                added += 1;
            }
        }
    }
    added
}

/// `example` and `examples` are mutually exclusive in a media type object.
pub(crate) fn has_example(media: &Map<String, Value>) -> bool {
    media.contains_key("example") || media.contains_key("examples")
}

/// Synthesize an example from the media type's schema. Returns whether one
/// was written.
pub(crate) fn fill_example(media: &mut Map<String, Value>, synth: &ExampleSynthesizer<'_>) -> bool {
    if has_example(media) {
        return false;
    }
    let Some(example) = media
        .get("schema")
        .and_then(|schema| synth.synthesize(schema))
        .filter(is_informative)
    else {
        return false;
    };
    media.insert("example".to_string(), example);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(spec: &mut Value) -> PassReport {
        ResponseExamplesPass.apply(spec, &OafConfig::default()).unwrap()
    }

    #[test]
    fn test_shared_error_responses() {
        let mut spec = json!({"components": {"responses": {
            "400": {"description": "Bad request", "content": {"application/json": {"schema": {}}}},
            "404": {"description": "Not found", "content": {"application/json": {"example": {"message": "custom"}}}},
            "418": {"description": "Teapot", "content": {"application/json": {"schema": {}}}},
            "500": {"description": "Fatal error"}
        }}});
        let report = apply(&mut spec);
        assert_eq!(report.changed, 1);

        let responses = &spec["components"]["responses"];
        assert!(responses["400"]["content"]["application/json"]["example"]["message"].is_string());
        assert_eq!(responses["404"]["content"]["application/json"]["example"], json!({"message": "custom"}));
        assert!(responses["418"]["content"]["application/json"].get("example").is_none());
        assert!(responses["500"].get("content").is_none());
    }

    #[test]
    fn test_inline_response_example() {
        let mut spec = json!({"paths": {"/api/v1/chart/{pk}": {"get": {"responses": {
            "200": {"content": {"application/json": {"schema": {
                "type": "object",
                "properties": {
                    "id": {"type": "integer", "minimum": 7},
                    "name": {"type": "string", "format": "email"}
                }
            }}}}
        }}}}});
        let report = apply(&mut spec);
        assert_eq!(report.changed, 1);

        let example = &spec["paths"]["/api/v1/chart/{pk}"]["get"]["responses"]["200"]["content"]["application/json"]["example"];
        insta::assert_json_snapshot!(example, @r#"
        {
          "id": 7,
          "name": "user@example.com"
        }
        "#);
    }

    #[test]
    fn test_skips_refs_existing_and_empty() {
        let mut spec = json!({"paths": {"/api/v1/chart/": {"get": {"responses": {
            "200": {"content": {"application/json": {"schema": {"type": "object"}}}},
            "201": {"content": {"application/json": {"schema": {"type": "null"}}}},
            "202": {"content": {"application/json": {"schema": {"type": "integer"}, "example": 9}}},
            "203": {"content": {"application/json": {"schema": {"type": "integer"}, "examples": {}}}},
            "400": {"$ref": "#/components/responses/400"},
            "204": {"description": "No content"}
        }}}}});
        let before = spec.clone();
        let report = apply(&mut spec);
        assert!(report.is_noop());
        assert_eq!(spec, before);
    }

    #[test]
    fn test_untyped_one_of_gets_no_example() {
        let mut spec = json!({"paths": {"/api/v1/chart/": {"get": {"responses": {
            "200": {"content": {"application/json": {"schema": {
                "oneOf": [{"type": "integer"}, {"type": "string"}]
            }}}}
        }}}}});
        let before = spec.clone();
        let report = apply(&mut spec);
        assert!(report.is_noop());
        assert_eq!(spec, before);
    }

    #[test]
    fn test_response_depth_bound_applies() {
        let mut spec = json!({
            "components": {"schemas": {
                "Node": {"type": "object", "properties": {
                    "id": {"type": "integer"},
                    "child": {"$ref": "#/components/schemas/Node"}
                }}
            }},
            "paths": {"/api/v1/tree/": {"get": {"responses": {
                "200": {"content": {"application/json": {"schema": {"$ref": "#/components/schemas/Node"}}}}
            }}}}
        });
        apply(&mut spec);
        let example = &spec["paths"]["/api/v1/tree/"]["get"]["responses"]["200"]["content"]["application/json"]["example"];
        assert_eq!(
            example,
            &json!({"id": 1, "child": {"id": 1, "child": {"id": 1}}})
        );
    }
}
