use std::collections::HashMap;

use indexmap::IndexMap;
use serde_json::Value;

use crate::config::{OafConfig, UniquenessKey};
use crate::error::PatchError;
use crate::naming::path_slug;
use crate::operations::{HttpMethod, operations, operations_mut};
use crate::{Pass, PassId, PassReport};

type OperationKey = (String, HttpMethod);

/// Makes duplicate summaries unique by appending the path slug.
///
/// A summary that already mentions its suffix (case-insensitively) is left
/// alone, which keeps repeated runs stable without any marker. Duplicates
/// sharing a path also get the method: `Get info (chart-pk, get)`.
pub struct UniqueSummariesPass;

impl Pass for UniqueSummariesPass {
    fn id(&self) -> PassId {
        PassId::UniqueSummaries
    }

    fn apply(&self, spec: &mut Value, config: &OafConfig) -> Result<PassReport, PatchError> {
        let mut renames = plan_renames(spec, config.summaries.uniqueness_key);
        if renames.is_empty() {
            return Ok(PassReport::count(self.id(), 0));
        }

        let mut renamed = 0;
        for (path, method, op) in operations_mut(spec) {
            let Some(summary) = renames.remove(&(path.to_string(), method)) else {
                continue;
            };
            log::debug!("{method} {path}: summary -> {summary:?}");
            op.insert("summary".to_string(), Value::String(summary));
            renamed += 1;
        }
        Ok(PassReport::count(self.id(), renamed))
    }
}

fn plan_renames(spec: &Value, key: UniquenessKey) -> HashMap<OperationKey, String> {
    let mut groups: IndexMap<(&str, Option<HttpMethod>), Vec<(&str, HttpMethod)>> =
        IndexMap::new();
    for (path, method, op) in operations(spec) {
        let Some(summary) = op.get("summary").and_then(Value::as_str) else {
            continue;
        };
        let method_key = match key {
            UniquenessKey::Summary => None,
            UniquenessKey::SummaryAndMethod => Some(method),
        };
        groups
            .entry((summary, method_key))
            .or_default()
            .push((path, method));
    }

    let mut renames = HashMap::new();
    for ((summary, _), members) in groups.iter().filter(|(_, members)| members.len() > 1) {
        let slugs: Vec<String> = members.iter().map(|(path, _)| path_slug(path)).collect();
        let lowered = summary.to_lowercase();

        for ((path, method), slug) in members.iter().zip(&slugs) {
            let shared_slug = slugs.iter().filter(|other| *other == slug).count() > 1;
            let suffix = if shared_slug {
                format!("{slug}, {}", method.as_key())
            } else {
                slug.clone()
            };
            if lowered.contains(&suffix.to_lowercase()) {
                continue;
            }
            renames.insert((path.to_string(), *method), format!("{summary} ({suffix})"));
        }
    }
    renames
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn summary<'a>(spec: &'a Value, path: &str, method: &str) -> &'a str {
        spec["paths"][path][method]["summary"].as_str().unwrap()
    }

    #[test]
    fn test_appends_slugs() {
        let mut spec = json!({"paths": {
            "/api/v1/chart/{pk}": {"get": {"summary": "Get info"}},
            "/api/v1/dashboard/{pk}": {"get": {"summary": "Get info"}},
            "/api/v1/dataset/{pk}": {"get": {"summary": "Get a dataset"}}
        }});
        let report = UniqueSummariesPass.apply(&mut spec, &OafConfig::default()).unwrap();
        assert_eq!(report.changed, 2);
        assert_eq!(summary(&spec, "/api/v1/chart/{pk}", "get"), "Get info (chart-pk)");
        assert_eq!(summary(&spec, "/api/v1/dashboard/{pk}", "get"), "Get info (dashboard-pk)");
        assert_eq!(summary(&spec, "/api/v1/dataset/{pk}", "get"), "Get a dataset");
    }

    #[test]
    fn test_stable_across_runs() {
        let mut spec = json!({"paths": {
            "/api/v1/chart/{pk}": {"get": {"summary": "Get info"}},
            "/api/v1/dashboard/{pk}": {"get": {"summary": "Get info"}}
        }});
        UniqueSummariesPass.apply(&mut spec, &OafConfig::default()).unwrap();
        let once = spec.clone();
        for _ in 0..2 {
            let report = UniqueSummariesPass.apply(&mut spec, &OafConfig::default()).unwrap();
            assert!(report.is_noop());
        }
        assert_eq!(spec, once);
    }

    #[test]
    fn test_slug_already_mentioned() {
        let mut spec = json!({"paths": {
            "/api/v1/chart/{pk}": {"get": {"summary": "Export CHART-PK"}},
            "/api/v1/dashboard/{pk}": {"get": {"summary": "Export CHART-PK"}}
        }});
        UniqueSummariesPass.apply(&mut spec, &OafConfig::default()).unwrap();
        assert_eq!(summary(&spec, "/api/v1/chart/{pk}", "get"), "Export CHART-PK");
        assert_eq!(
            summary(&spec, "/api/v1/dashboard/{pk}", "get"),
            "Export CHART-PK (dashboard-pk)"
        );
    }

    #[test]
    fn test_same_path_duplicates_get_method() {
        let mut spec = json!({"paths": {
            "/api/v1/chart/{pk}": {
                "get": {"summary": "Chart"},
                "put": {"summary": "Chart"}
            }
        }});
        UniqueSummariesPass.apply(&mut spec, &OafConfig::default()).unwrap();
        assert_eq!(summary(&spec, "/api/v1/chart/{pk}", "get"), "Chart (chart-pk, get)");
        assert_eq!(summary(&spec, "/api/v1/chart/{pk}", "put"), "Chart (chart-pk, put)");

        let again = UniqueSummariesPass.apply(&mut spec, &OafConfig::default()).unwrap();
        assert!(again.is_noop());
    }

    #[test]
    fn test_same_path_duplicates_mentioning_slug() {
        let mut spec = json!({"paths": {
            "/api/v1/chart/": {
                "get": {"summary": "Chart"},
                "post": {"summary": "Chart"}
            }
        }});
        let report = UniqueSummariesPass.apply(&mut spec, &OafConfig::default()).unwrap();
        assert_eq!(report.changed, 2);
        assert_eq!(summary(&spec, "/api/v1/chart/", "get"), "Chart (chart, get)");
        assert_eq!(summary(&spec, "/api/v1/chart/", "post"), "Chart (chart, post)");

        let again = UniqueSummariesPass.apply(&mut spec, &OafConfig::default()).unwrap();
        assert!(again.is_noop());
    }

    #[test]
    fn test_root_paths_are_disambiguated() {
        let mut spec = json!({"paths": {
            "/api/v1/": {"get": {"summary": "Index"}},
            "/api/v1/chart/": {"get": {"summary": "Index"}}
        }});
        UniqueSummariesPass.apply(&mut spec, &OafConfig::default()).unwrap();
        assert_eq!(summary(&spec, "/api/v1/", "get"), "Index (root)");
        assert_eq!(summary(&spec, "/api/v1/chart/", "get"), "Index (chart)");

        let again = UniqueSummariesPass.apply(&mut spec, &OafConfig::default()).unwrap();
        assert!(again.is_noop());
    }

    #[test]
    fn test_summary_and_method_key() {
        let mut config = OafConfig::default();
        config.summaries.uniqueness_key = UniquenessKey::SummaryAndMethod;
        let mut spec = json!({"paths": {
            "/api/v1/chart/": {"get": {"summary": "List"}, "post": {"summary": "List"}},
            "/api/v1/dashboard/": {"get": {"summary": "List"}}
        }});
        let report = UniqueSummariesPass.apply(&mut spec, &config).unwrap();
        assert_eq!(report.changed, 2);
        assert_eq!(summary(&spec, "/api/v1/chart/", "get"), "List (chart)");
        assert_eq!(summary(&spec, "/api/v1/chart/", "post"), "List");
        assert_eq!(summary(&spec, "/api/v1/dashboard/", "get"), "List (dashboard)");
    }

    #[test]
    fn test_operations_without_summary_ignored() {
        let mut spec = json!({"paths": {
            "/api/v1/chart/": {"get": {}},
            "/api/v1/dashboard/": {"get": {"summary": 3}}
        }});
        let report = UniqueSummariesPass.apply(&mut spec, &OafConfig::default()).unwrap();
        assert!(report.is_noop());
    }
}
