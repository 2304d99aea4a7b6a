use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::PatchError;

/// Location of the spec relative to the directory holding the executable.
pub const DEFAULT_SPEC_PATH: &str = "../static/resources/openapi.json";

/// Resolve the default spec path for a binary living in `driver_dir`.
pub fn default_spec_path(driver_dir: &Path) -> PathBuf {
    driver_dir.join(DEFAULT_SPEC_PATH)
}

/// Read and parse the spec at `path`.
pub fn load(path: &Path) -> Result<Value, PatchError> {
    if !path.exists() {
        return Err(PatchError::InputMissing(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(|source| PatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| PatchError::MalformedInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize with two-space indentation and a trailing newline.
pub fn to_pretty_string(spec: &Value) -> Result<String, PatchError> {
    let mut out = serde_json::to_string_pretty(spec)?;
    out.push('\n');
    Ok(out)
}

/// Write the spec back to `path`.
///
/// The content goes to a sibling temporary file first and is renamed over the
/// target, so a failed write leaves the previous file in place.
pub fn store(path: &Path, spec: &Value) -> Result<(), PatchError> {
    let content = to_pretty_string(spec)?;
    let tmp = temp_path(path);
    let write_failure = |source| PatchError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };
    fs::write(&tmp, content).map_err(write_failure)?;
    fs::rename(&tmp, path).map_err(|source| {
        let _ = fs::remove_file(&tmp);
        write_failure(source)
    })
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "openapi.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}
