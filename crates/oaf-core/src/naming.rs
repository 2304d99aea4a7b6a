use crate::operations::HttpMethod;

/// Prefix shared by every Superset REST endpoint.
pub const API_PREFIX: &str = "/api/v1/";

const ROOT_SLUG: &str = "root";

/// Identifiers derived from an operation's route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedNames {
    pub operation_id: String,
    pub summary: String,
    pub slug: String,
}

/// Derive `operationId`, summary, and slug from HTTP method + path.
///
/// Examples:
/// - `GET /api/v1/chart/{pk}/data` → `get_chart_by_pk_data`, `Get chart by pk data`, `chart-pk-data`
/// - `POST /api/v1/dashboard/` → `create_dashboard`, `Create dashboard`, `dashboard`
/// - `PUT /api/v1/dataset/{pk}/refresh` → `update_dataset_by_pk_refresh`, `Update dataset by pk refresh`, `dataset-pk-refresh`
pub fn derive(path: &str, method: HttpMethod) -> DerivedNames {
    let cleaned = clean_path(path);
    DerivedNames {
        operation_id: operation_id(cleaned, method),
        summary: summary(cleaned, method),
        slug: slug(cleaned),
    }
}

/// Path slug used to tell apart operations sharing a summary.
pub fn path_slug(path: &str) -> String {
    slug(clean_path(path))
}

/// Strip the API prefix and surrounding slashes.
fn clean_path(path: &str) -> &str {
    path.strip_prefix(API_PREFIX)
        .unwrap_or(path)
        .trim_matches('/')
}

fn id_prefix(method: HttpMethod) -> &'static str {
    match method {
        HttpMethod::Get => "get",
        HttpMethod::Post => "create",
        HttpMethod::Put => "update",
        HttpMethod::Delete => "delete",
        HttpMethod::Patch => "patch",
    }
}

fn summary_verb(method: HttpMethod) -> &'static str {
    match method {
        HttpMethod::Get => "Get",
        HttpMethod::Post => "Create",
        HttpMethod::Put | HttpMethod::Patch => "Update",
        HttpMethod::Delete => "Delete",
    }
}

fn operation_id(cleaned: &str, method: HttpMethod) -> String {
    let body = cleaned.replace('{', "by_").replace('}', "").to_lowercase();
    let prefix = id_prefix(method);
    let joined = if body.is_empty() {
        prefix.to_string()
    } else {
        format!("{prefix}_{body}")
    };
    joined.replace(['/', '-'], "_")
}

fn summary(cleaned: &str, method: HttpMethod) -> String {
    let mut words = vec![summary_verb(method).to_string()];
    for token in cleaned.split('/').filter(|t| !t.is_empty()) {
        match token.strip_prefix('{').and_then(|t| t.strip_suffix('}')) {
            Some(param) => words.push(format!("by {param}")),
            None => words.push(token.replace(['_', '-'], " ")),
        }
    }
    words.join(" ")
}

/// Root paths, whose slug would be empty, use `root`.
fn slug(cleaned: &str) -> String {
    if cleaned.is_empty() {
        return ROOT_SLUG.to_string();
    }
    cleaned.replace(['{', '}'], "").replace(['/', '_'], "-")
}
