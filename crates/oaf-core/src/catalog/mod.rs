//! Canned data the passes write into the document.

pub mod schemas;

use serde_json::{Value, json};

/// Descriptions for the tags Superset's REST API uses.
pub const TAG_DESCRIPTIONS: &[(&str, &str)] = &[
    ("Advanced Data Type", "Endpoints related to advanced data type conversions."),
    ("Annotation Layers", "Manage annotation layers and the annotations they contain."),
    ("AsyncEventsRestApi", "Poll for the results of asynchronous queries and chart renders."),
    ("Available Domains", "List the domains available for domain sharding."),
    ("CSS Templates", "Manage reusable CSS templates for dashboards."),
    ("CacheRestApi", "Invalidate cached query results."),
    ("Charts", "Create, read, update and delete charts, and export or render their data."),
    ("Current User", "Information about the authenticated user."),
    ("Dashboard Filter State", "Store and retrieve transient native filter state for a dashboard."),
    ("Dashboard Permanent Link", "Create and resolve permanent links to dashboard states."),
    ("Dashboards", "Create, read, update and delete dashboards, and manage their layout and embedding."),
    ("Database", "Manage database connections and inspect their schemas, tables and metadata."),
    ("Datasets", "Manage datasets, their columns and metrics."),
    ("Embedded Dashboard", "Configure dashboards for embedding in external applications."),
    ("Explore", "Load the form data and metadata used by the Explore view."),
    ("Explore Form Data", "Store and retrieve transient Explore form data."),
    ("Explore Permanent Link", "Create and resolve permanent links to Explore states."),
    ("Import/export", "Import and export Superset assets as bundles."),
    ("LogRestApi", "Read the action log."),
    ("Menu", "Retrieve the navigation menu for the current user."),
    ("OpenApi", "Retrieve the OpenAPI specification."),
    ("Queries", "Inspect queries executed through SQL Lab."),
    ("Report Schedules", "Manage scheduled reports and alerts."),
    ("Row Level Security", "Manage row level security filters."),
    ("SQL Lab", "Execute, format and export SQL Lab queries."),
    ("SQL Lab Permanent Link", "Create and resolve permanent links to SQL Lab states."),
    ("Saved Queries", "Manage saved SQL Lab queries."),
    ("Security", "Authentication, CSRF tokens and guest tokens."),
    ("Security Permissions", "List and inspect permissions."),
    ("Security Roles", "Manage roles and their permissions."),
    ("Security Users", "Manage users."),
    ("Tags", "Tag assets and search assets by tag."),
    ("Themes", "Manage UI themes."),
];

/// Fallback description for tags missing from [`TAG_DESCRIPTIONS`].
pub fn tag_description(name: &str) -> String {
    TAG_DESCRIPTIONS
        .iter()
        .find(|(tag, _)| *tag == name)
        .map(|(_, description)| description.to_string())
        .unwrap_or_else(|| format!("Endpoints related to {name}."))
}

/// `message` payloads for the shared error responses under
/// `components.responses`.
pub const ERROR_RESPONSE_MESSAGES: &[(&str, &str)] = &[
    ("400", "Bad request: the request payload or parameters are invalid."),
    ("401", "Not authenticated: a valid access token is required."),
    ("403", "Forbidden: you do not have permission to access this resource."),
    ("404", "Not found: the requested resource does not exist."),
    ("422", "Could not process entity: the request is well-formed but semantically invalid."),
    ("500", "Fatal error: the server encountered an unexpected condition."),
];

pub const LOCAL_SERVER_URL: &str = "http://localhost:8088";
pub const LOCAL_SERVER_DESCRIPTION: &str = "Local development server";
pub const CUSTOM_SERVER_URL: &str = "{protocol}://{host}:{port}";
pub const CUSTOM_SERVER_DESCRIPTION: &str = "Custom server";

/// The server list installed by the server pass.
pub fn server_catalogue() -> Value {
    json!([
        {
            "url": LOCAL_SERVER_URL,
            "description": LOCAL_SERVER_DESCRIPTION
        },
        {
            "url": CUSTOM_SERVER_URL,
            "description": CUSTOM_SERVER_DESCRIPTION,
            "variables": {
                "protocol": {
                    "default": "http",
                    "enum": ["http", "https"],
                    "description": "Scheme the server is reachable on"
                },
                "host": {
                    "default": "localhost",
                    "description": "Superset host name"
                },
                "port": {
                    "default": "8088",
                    "description": "Superset port"
                }
            }
        }
    ])
}
