use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Top-level configuration loaded from `.oaf.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OafConfig {
    /// Overrides the spec path derived from the executable location.
    pub input: Option<String>,
    pub examples: ExampleConfig,
    pub summaries: SummaryConfig,
}

/// Depth bounds for synthesized examples.
///
/// Request bodies get one more level than responses: a richer request payload
/// is the more useful piece of documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExampleConfig {
    pub response_max_depth: usize,
    pub request_max_depth: usize,
}

impl Default for ExampleConfig {
    fn default() -> Self {
        Self {
            response_max_depth: 3,
            request_max_depth: 4,
        }
    }
}

/// Summary disambiguation options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    pub uniqueness_key: UniquenessKey,
}

/// What two operations must share to count as duplicates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UniquenessKey {
    #[default]
    Summary,
    SummaryAndMethod,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".oaf.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<OafConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: OafConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# oaf configuration
# input: ../static/resources/openapi.json   # defaults to <binary-dir>/../static/resources/openapi.json

examples:
  response_max_depth: 3   # nesting bound for inline response examples
  request_max_depth: 4    # nesting bound for request body examples

summaries:
  uniqueness_key: summary   # summary | summary_and_method
"#
}
