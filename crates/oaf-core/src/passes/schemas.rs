use serde_json::{Map, Value};

use crate::catalog::schemas::missing_schemas;
use crate::config::OafConfig;
use crate::error::PatchError;
use crate::{Pass, PassId, PassReport};

/// Registers the canned schema definitions absent from `components.schemas`.
pub struct MissingSchemasPass;

impl Pass for MissingSchemasPass {
    fn id(&self) -> PassId {
        PassId::MissingSchemas
    }

    fn apply(&self, spec: &mut Value, _config: &OafConfig) -> Result<PassReport, PatchError> {
        let catalogue = missing_schemas()?;
        let Some(schemas) = schemas_container(spec) else {
            log::warn!("components.schemas is not a mapping, leaving it alone");
            return Ok(PassReport::count(self.id(), 0));
        };

        let mut inserted = Vec::new();
        for (name, schema) in catalogue {
            if schemas.contains_key(name) {
                continue;
            }
            log::debug!("adding schema {name}");
            schemas.insert(name.to_string(), schema);
            inserted.push(name.to_string());
        }
        Ok(PassReport::with_names(self.id(), inserted))
    }
}

/// `components.schemas`, created on demand. `None` when something in the way
/// is not a mapping.
fn schemas_container(spec: &mut Value) -> Option<&mut Map<String, Value>> {
    spec.as_object_mut()?
        .entry("components")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()?
        .entry("schemas")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
}
