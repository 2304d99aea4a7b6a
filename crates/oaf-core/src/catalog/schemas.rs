//! Schema definitions the OpenAPI generator is known to leave out.
//!
//! Each entry is referenced from an endpoint but never registered under
//! `components.schemas`, so documentation tooling reports dangling refs.

use serde_json::Value;

/// `(name, definition)` pairs, definitions as JSON text.
pub const MISSING_SCHEMAS: &[(&str, &str)] = &[
    (
        "DashboardScreenshotPostSchema",
        r#"{
  "type": "object",
  "properties": {
    "dataMask": {
      "type": "object",
      "description": "An object representing the data mask.",
      "additionalProperties": true
    },
    "activeTabs": {
      "type": "array",
      "description": "A list representing active tabs.",
      "items": {"type": "string"}
    },
    "anchor": {
      "type": "string",
      "description": "A string representing the anchor."
    },
    "urlParams": {
      "type": "array",
      "description": "A list of tuples, each containing two strings.",
      "items": {"type": "array", "items": {"type": "string"}}
    }
  }
}"#,
    ),
    (
        "DashboardNativeFiltersConfigUpdateSchema",
        r#"{
  "type": "object",
  "properties": {
    "deleted": {
      "type": "array",
      "description": "List of deleted filter IDs.",
      "items": {"type": "string"}
    },
    "modified": {
      "type": "array",
      "description": "List of modified native filter configurations.",
      "items": {"type": "object"}
    },
    "reordered": {
      "type": "array",
      "description": "List of filter IDs in the new order.",
      "items": {"type": "string"}
    }
  }
}"#,
    ),
    (
        "DashboardColorsConfigUpdateSchema",
        r#"{
  "type": "object",
  "properties": {
    "color_namespace": {
      "type": "string",
      "nullable": true,
      "description": "The color namespace."
    },
    "color_scheme": {
      "type": "string",
      "nullable": true,
      "description": "The color scheme name."
    },
    "map_label_colors": {
      "type": "object",
      "description": "A map of label names to colors.",
      "additionalProperties": {"type": "string"}
    },
    "shared_label_colors": {
      "type": "array",
      "description": "Labels sharing a color across charts.",
      "items": {"type": "string"}
    },
    "color_scheme_domain": {
      "type": "array",
      "description": "The colors of the scheme domain.",
      "items": {"type": "string"}
    },
    "label_colors": {
      "type": "object",
      "description": "Custom label colors.",
      "additionalProperties": {"type": "string"}
    }
  }
}"#,
    ),
    (
        "FormatQueryPayloadSchema",
        r#"{
  "type": "object",
  "required": ["sql"],
  "properties": {
    "sql": {
      "type": "string",
      "description": "The SQL query to format."
    },
    "engine": {
      "type": "string",
      "nullable": true,
      "description": "The database engine dialect."
    },
    "database_id": {
      "type": "integer",
      "nullable": true,
      "description": "The id of the database the query targets."
    },
    "template_params": {
      "type": "string",
      "nullable": true,
      "description": "Jinja template parameters as a JSON string."
    }
  }
}"#,
    ),
    (
        "get_slack_channels_schema",
        r#"{
  "type": "object",
  "properties": {
    "search_string": {
      "type": "string",
      "description": "Filter channels by name."
    },
    "types": {
      "type": "array",
      "description": "Channel types to include.",
      "items": {
        "type": "string",
        "enum": ["public_channel", "private_channel"]
      }
    },
    "exact_match": {
      "type": "boolean",
      "description": "Match the search string exactly."
    },
    "force": {
      "type": "boolean",
      "description": "Bypass the channel cache."
    }
  }
}"#,
    ),
];

/// Parse the catalogue into `(name, definition)` values.
pub fn missing_schemas() -> Result<Vec<(&'static str, Value)>, serde_json::Error> {
    MISSING_SCHEMAS
        .iter()
        .map(|(name, text)| serde_json::from_str(text).map(|schema| (*name, schema)))
        .collect()
}
