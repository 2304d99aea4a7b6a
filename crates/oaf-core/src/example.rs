use serde_json::{Map, Value, json};

/// Nesting bound used when a caller has no preference.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Only schema references are followed; anything else is treated as absent.
pub const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

pub const EXAMPLE_DATE_TIME: &str = "2024-01-15T10:30:00Z";
pub const EXAMPLE_DATE: &str = "2024-01-15";
pub const EXAMPLE_EMAIL: &str = "user@example.com";
pub const EXAMPLE_URI: &str = "https://example.com";
pub const EXAMPLE_UUID: &str = "550e8400-e29b-41d4-a716-446655440000";
pub const EXAMPLE_STRING: &str = "string";

/// Builds representative example values from schema fragments.
///
/// Synthesis is deterministic and side-effect free. `None` stands for JSON
/// null: unresolved references, `type: null`, and anything past the depth
/// bound all come back as `None` and are dropped by the enclosing object.
///
/// `max_depth` bounds container nesting: an object or array is only produced
/// while fewer than `max_depth` containers enclose it, so no result nests
/// deeper than `max_depth`, whatever cycles the schema graph contains.
pub struct ExampleSynthesizer<'a> {
    schemas: Option<&'a Map<String, Value>>,
    max_depth: usize,
}

impl<'a> ExampleSynthesizer<'a> {
    /// Synthesizer resolving references against `spec.components.schemas`.
    pub fn new(spec: &'a Value, max_depth: usize) -> Self {
        Self::with_schemas(
            spec.pointer("/components/schemas").and_then(Value::as_object),
            max_depth,
        )
    }

    pub fn with_schemas(schemas: Option<&'a Map<String, Value>>, max_depth: usize) -> Self {
        Self { schemas, max_depth }
    }

    pub fn synthesize(&self, schema: &Value) -> Option<Value> {
        self.walk(schema, 0, &mut Vec::new())
    }

    /// `depth` counts enclosing containers. `chain` holds the references
    /// followed since the last container; revisiting one of them is a cycle
    /// that would never descend, so it yields `None`.
    fn walk(&self, schema: &Value, depth: usize, chain: &mut Vec<String>) -> Option<Value> {
        let schema = schema.as_object()?;

        if let Some(ref_path) = schema.get("$ref") {
            return self.follow_ref(ref_path.as_str()?, depth, chain);
        }

        if let Some(example) = schema.get("example") {
            return (!example.is_null()).then(|| example.clone());
        }

        match schema_type(schema) {
            Some("object") => self.object(schema, depth),
            Some("array") => self.array(schema, depth),
            Some("string") => Some(string_example(schema)),
            Some("integer") => Some(
                first_enum(schema)
                    .or_else(|| schema.get("minimum").cloned())
                    .unwrap_or_else(|| json!(1)),
            ),
            Some("number") => Some(
                first_enum(schema)
                    .or_else(|| schema.get("minimum").cloned())
                    .unwrap_or_else(|| json!(1.0)),
            ),
            Some("boolean") => Some(Value::Bool(true)),
            Some("null") => None,
            None if has_all_of(schema) => self.all_of(schema, depth, chain),
            _ => self.first_alternative(schema, depth, chain),
        }
    }

    fn follow_ref(&self, ref_path: &str, depth: usize, chain: &mut Vec<String>) -> Option<Value> {
        let name = ref_path.strip_prefix(SCHEMA_REF_PREFIX)?;
        let target = self.schemas?.get(name)?;
        if chain.iter().any(|seen| seen == name) {
            log::debug!("reference cycle through {ref_path}, stopping");
            return None;
        }
        chain.push(name.to_string());
        let result = self.walk(target, depth, chain);
        chain.pop();
        result
    }

    fn object(&self, schema: &Map<String, Value>, depth: usize) -> Option<Value> {
        if depth >= self.max_depth {
            return None;
        }
        let properties = schema.get("properties").and_then(Value::as_object);

        let mut out = Map::new();
        for (name, prop) in properties.into_iter().flatten() {
            if let Some(value) = self.walk(prop, depth + 1, &mut Vec::new()) {
                out.insert(name.clone(), value);
            }
        }

        let no_properties = properties.is_none_or(Map::is_empty);
        if no_properties && schema.get("additionalProperties").is_some_and(truthy) {
            out.insert("key".to_string(), json!("value"));
        }
        Some(Value::Object(out))
    }

    fn array(&self, schema: &Map<String, Value>, depth: usize) -> Option<Value> {
        if depth >= self.max_depth {
            return None;
        }
        let item = schema
            .get("items")
            .and_then(|items| self.walk(items, depth + 1, &mut Vec::new()));
        Some(Value::Array(item.into_iter().collect()))
    }

    /// Untyped `allOf`: merge the object parts, otherwise take the first part
    /// that produced anything.
    fn all_of(&self, schema: &Map<String, Value>, depth: usize, chain: &mut Vec<String>) -> Option<Value> {
        let parts: Vec<Value> = schema
            .get("allOf")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|part| self.walk(part, depth, chain))
            .collect();

        if parts.iter().any(Value::is_object) {
            let mut merged = Map::new();
            for part in parts {
                if let Value::Object(fields) = part {
                    merged.extend(fields);
                }
            }
            return Some(Value::Object(merged));
        }
        parts.into_iter().next()
    }

    fn first_alternative(
        &self,
        schema: &Map<String, Value>,
        depth: usize,
        chain: &mut Vec<String>,
    ) -> Option<Value> {
        let first = ["oneOf", "anyOf"]
            .iter()
            .filter_map(|key| schema.get(*key).and_then(Value::as_array))
            .find_map(|alternatives| alternatives.first())?;
        self.walk(first, depth, chain)
    }
}

/// The effective `type`. Absent means object unless the schema is an
/// `allOf`; a 3.1 type list uses its first non-null entry.
fn schema_type(schema: &Map<String, Value>) -> Option<&str> {
    match schema.get("type") {
        Some(Value::String(t)) => Some(t.as_str()),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .find(|t| *t != "null")
            .or(Some("null")),
        Some(_) => None,
        None if has_all_of(schema) => None,
        None => Some("object"),
    }
}

fn has_all_of(schema: &Map<String, Value>) -> bool {
    schema
        .get("allOf")
        .and_then(Value::as_array)
        .is_some_and(|parts| !parts.is_empty())
}

fn string_example(schema: &Map<String, Value>) -> Value {
    if let Some(first) = first_enum(schema) {
        return first;
    }
    let text = match schema.get("format").and_then(Value::as_str) {
        Some("date-time") => EXAMPLE_DATE_TIME,
        Some("date") => EXAMPLE_DATE,
        Some("email") => EXAMPLE_EMAIL,
        Some("uri" | "url") => EXAMPLE_URI,
        Some("uuid") => EXAMPLE_UUID,
        _ => EXAMPLE_STRING,
    };
    Value::String(text.to_string())
}

fn first_enum(schema: &Map<String, Value>) -> Option<Value> {
    schema
        .get("enum")?
        .as_array()?
        .first()
        .filter(|v| !v.is_null())
        .cloned()
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Object(m) => !m.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::Null => false,
    }
}

/// Whether a synthesized example is worth writing into the document.
pub fn is_informative(example: &Value) -> bool {
    match example {
        Value::Null => false,
        Value::Object(fields) => !fields.is_empty(),
        _ => true,
    }
}
