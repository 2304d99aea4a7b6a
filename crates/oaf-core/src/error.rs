use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("OpenAPI spec not found: {}", .0.display())]
    InputMissing(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse JSON in {}: {source}", path.display())]
    MalformedInput {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize spec: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to render code sample: {0}")]
    Template(#[from] minijinja::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml_ng::Error,
    },
}
