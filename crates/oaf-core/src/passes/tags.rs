use std::collections::{BTreeSet, HashSet};

use serde_json::{Value, json};

use crate::catalog::tag_description;
use crate::config::OafConfig;
use crate::error::PatchError;
use crate::operations::operations;
use crate::{Pass, PassId, PassReport};

/// Rebuilds the top-level tag list from the tags operations actually use.
///
/// The list is rewritten only when it is missing, empty, or lacks a tag some
/// operation uses. Existing entries are carried over verbatim: used ones take
/// their sorted slot, unused ones follow the used ones.
pub struct TagsPass;

impl Pass for TagsPass {
    fn id(&self) -> PassId {
        PassId::Tags
    }

    fn apply(&self, spec: &mut Value, _config: &OafConfig) -> Result<PassReport, PatchError> {
        let used = used_tags(spec);
        if used.is_empty() {
            return Ok(PassReport::count(self.id(), 0));
        }

        let existing: Vec<Value> = spec
            .get("tags")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        let defined: HashSet<&str> = existing.iter().filter_map(tag_name).collect();

        let added: Vec<String> = used
            .iter()
            .filter(|name| !defined.contains(name.as_str()))
            .cloned()
            .collect();
        if !existing.is_empty() && added.is_empty() {
            return Ok(PassReport::count(self.id(), 0));
        }

        let mut tags: Vec<Value> = used
            .iter()
            .map(|name| {
                existing
                    .iter()
                    .find(|tag| tag_name(tag) == Some(name.as_str()))
                    .cloned()
                    .unwrap_or_else(|| json!({"name": name, "description": tag_description(name)}))
            })
            .collect();
        tags.extend(
            existing
                .iter()
                .filter(|tag| tag_name(tag).is_none_or(|name| !used.contains(name)))
                .cloned(),
        );

        let Some(root) = spec.as_object_mut() else {
            return Ok(PassReport::count(self.id(), 0));
        };
        log::debug!("defining tags: {}", added.join(", "));
        root.insert("tags".to_string(), Value::Array(tags));
        Ok(PassReport::with_names(self.id(), added))
    }
}

/// Sorted union of every operation's `tags`.
fn used_tags(spec: &Value) -> BTreeSet<String> {
    operations(spec)
        .filter_map(|(_, _, op)| op.get("tags").and_then(Value::as_array))
        .flatten()
        .filter_map(Value::as_str)
        .map(String::from)
        .collect()
}

fn tag_name(tag: &Value) -> Option<&str> {
    tag.get("name").and_then(Value::as_str)
}
