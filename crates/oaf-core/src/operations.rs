use std::fmt;

use serde_json::{Map, Value};

/// An operation object under `paths.<path>.<method>`.
pub type Operation = Map<String, Value>;

/// HTTP methods the passes recognise under a path item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
    ];

    /// Parse a path-item key. Only lowercase verbs are operations.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "get" => Some(HttpMethod::Get),
            "post" => Some(HttpMethod::Post),
            "put" => Some(HttpMethod::Put),
            "delete" => Some(HttpMethod::Delete),
            "patch" => Some(HttpMethod::Patch),
            _ => None,
        }
    }

    /// The key used under a path item.
    pub fn as_key(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }

    /// Methods whose request bodies receive synthesized examples.
    pub fn accepts_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every `(path, method, operation)` in document order.
///
/// Path items and operations that are not mappings are skipped, as are keys
/// outside the recognised verb set (`parameters`, `summary`, `head`, ...).
pub fn operations<'a>(
    spec: &'a Value,
) -> impl Iterator<Item = (&'a str, HttpMethod, &'a Operation)> + 'a {
    spec.get("paths")
        .and_then(Value::as_object)
        .into_iter()
        .flat_map(|paths| paths.iter())
        .filter_map(|(path, item)| item.as_object().map(|item| (path, item)))
        .flat_map(|(path, item)| {
            item.iter().filter_map(move |(key, op)| {
                let method = HttpMethod::from_key(key)?;
                op.as_object().map(|op| (path.as_str(), method, op))
            })
        })
}

/// Mutable counterpart of [`operations`].
pub fn operations_mut<'a>(
    spec: &'a mut Value,
) -> impl Iterator<Item = (&'a str, HttpMethod, &'a mut Operation)> + 'a {
    spec.get_mut("paths")
        .and_then(Value::as_object_mut)
        .into_iter()
        .flat_map(|paths| paths.iter_mut())
        .filter_map(|(path, item)| item.as_object_mut().map(|item| (path, item)))
        .flat_map(|(path, item)| {
            item.iter_mut().filter_map(move |(key, op)| {
                let method = HttpMethod::from_key(key)?;
                op.as_object_mut().map(|op| (path.as_str(), method, op))
            })
        })
}

/// `content.application/json` of a request body or response, if present.
pub fn json_media_type_mut(container: &mut Map<String, Value>) -> Option<&mut Map<String, Value>> {
    container
        .get_mut("content")?
        .get_mut("application/json")?
        .as_object_mut()
}
