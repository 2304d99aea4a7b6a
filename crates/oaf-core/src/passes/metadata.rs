use serde_json::Value;

use crate::config::OafConfig;
use crate::error::PatchError;
use crate::naming::derive;
use crate::operations::operations_mut;
use crate::{Pass, PassId, PassReport};

/// Derives `operationId` and `summary` for operations that have neither.
pub struct OperationMetadataPass;

impl Pass for OperationMetadataPass {
    fn id(&self) -> PassId {
        PassId::OperationMetadata
    }

    fn apply(&self, spec: &mut Value, _config: &OafConfig) -> Result<PassReport, PatchError> {
        let mut named = Vec::new();
        for (path, method, op) in operations_mut(spec) {
            if op.contains_key("summary") || op.contains_key("operationId") {
                continue;
            }
            let names = derive(path, method);
            log::debug!("{method} {path} -> {}", names.operation_id);
            op.insert("operationId".to_string(), Value::String(names.operation_id.clone()));
            op.insert("summary".to_string(), Value::String(names.summary));
            named.push(names.operation_id);
        }
        Ok(PassReport::count(self.id(), named.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_names_bare_operation() {
        let mut spec = json!({"paths": {"/api/v1/chart/{pk}/data": {"get": {}}}});
        let report = OperationMetadataPass.apply(&mut spec, &OafConfig::default()).unwrap();
        assert_eq!(report.changed, 1);
        let op = &spec["paths"]["/api/v1/chart/{pk}/data"]["get"];
        assert_eq!(op["operationId"], "get_chart_by_pk_data");
        assert_eq!(op["summary"], "Get chart by pk data");
    }

    #[test]
    fn test_either_field_blocks_derivation() {
        let mut spec = json!({"paths": {"/api/v1/chart/": {
            "get": {"summary": "List charts"},
            "post": {"operationId": "make_chart"}
        }}});
        let before = spec.clone();
        let report = OperationMetadataPass.apply(&mut spec, &OafConfig::default()).unwrap();
        assert!(report.is_noop());
        assert_eq!(spec, before);
    }

    #[test]
    fn test_ignores_non_operation_keys() {
        let mut spec = json!({"paths": {"/api/v1/chart/": {
            "parameters": [],
            "options": {},
            "delete": {"responses": {}}
        }}});
        OperationMetadataPass.apply(&mut spec, &OafConfig::default()).unwrap();
        let item = &spec["paths"]["/api/v1/chart/"];
        assert_eq!(item["options"], json!({}));
        assert_eq!(item["delete"]["operationId"], "delete_chart");
        assert_eq!(item["delete"]["responses"], json!({}));
    }
}
