use serde_json::Value;

use crate::catalog::server_catalogue;
use crate::config::OafConfig;
use crate::error::PatchError;
use crate::{Pass, PassId, PassReport};

/// Installs the local and templated custom server entries.
pub struct ServersPass;

impl Pass for ServersPass {
    fn id(&self) -> PassId {
        PassId::Servers
    }

    fn apply(&self, spec: &mut Value, _config: &OafConfig) -> Result<PassReport, PatchError> {
        if has_server_catalogue(spec) {
            return Ok(PassReport::count(self.id(), 0));
        }
        let Some(root) = spec.as_object_mut() else {
            return Ok(PassReport::count(self.id(), 0));
        };
        let servers = server_catalogue();
        let installed = servers.as_array().map_or(0, Vec::len);
        root.insert("servers".to_string(), servers);
        Ok(PassReport::count(self.id(), installed))
    }
}

/// At least two servers, one of them templated.
fn has_server_catalogue(spec: &Value) -> bool {
    spec.get("servers")
        .and_then(Value::as_array)
        .is_some_and(|servers| {
            servers.len() >= 2 && servers.iter().any(|s| s.get("variables").is_some())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_installs_on_empty_spec() {
        let mut spec = json!({});
        let report = ServersPass.apply(&mut spec, &OafConfig::default()).unwrap();
        assert_eq!(report.changed, 2);
        assert_eq!(spec["servers"][0]["url"], "http://localhost:8088");
        assert_eq!(spec["servers"][1]["variables"]["protocol"]["enum"], json!(["http", "https"]));
        assert_eq!(spec["servers"][1]["variables"]["host"]["default"], "localhost");
    }

    #[test]
    fn test_replaces_single_plain_server() {
        let mut spec = json!({"servers": [{"url": "/api/v1"}]});
        let report = ServersPass.apply(&mut spec, &OafConfig::default()).unwrap();
        assert_eq!(report.changed, 2);
        assert_eq!(spec["servers"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_templated_catalogue_preserved() {
        let servers = json!([
            {"url": "https://superset.example.org"},
            {"url": "{scheme}://{host}", "variables": {"scheme": {"default": "https"}, "host": {"default": "x"}}}
        ]);
        let mut spec = json!({"servers": servers.clone()});
        let report = ServersPass.apply(&mut spec, &OafConfig::default()).unwrap();
        assert!(report.is_noop());
        assert_eq!(spec["servers"], servers);
    }
}
