use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocalizationError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse YAML in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml_ng::Error,
    },
}
