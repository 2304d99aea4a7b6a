use serde_json::Value;

use crate::config::OafConfig;
use crate::error::PatchError;
use crate::example::ExampleSynthesizer;
use crate::operations::{json_media_type_mut, operations_mut};
use crate::{Pass, PassId, PassReport};

use super::responses::fill_example;

/// Adds `example` payloads to inline JSON request bodies of post, put and
/// patch operations.
pub struct RequestBodyExamplesPass;

impl Pass for RequestBodyExamplesPass {
    fn id(&self) -> PassId {
        PassId::RequestBodyExamples
    }

    fn apply(&self, spec: &mut Value, config: &OafConfig) -> Result<PassReport, PatchError> {
        let schemas = spec
            .pointer("/components/schemas")
            .and_then(Value::as_object)
            .cloned();
        let synth =
            ExampleSynthesizer::with_schemas(schemas.as_ref(), config.examples.request_max_depth);

        let mut added = 0;
        for (path, method, op) in operations_mut(spec) {
            if !method.accepts_body() {
                continue;
            }
            let Some(body) = op.get_mut("requestBody").and_then(Value::as_object_mut) else {
                continue;
            };
            if body.contains_key("$ref") {
                continue;
            }
            let Some(media) = json_media_type_mut(body) else {
                continue;
            };
            if fill_example(media, &synth) {
                log::debug!("{method} {path}: request example added");
                added += 1;
            }
        }
        Ok(PassReport::count(self.id(), added))
    }
}
