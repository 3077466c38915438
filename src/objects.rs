// src/objects.rs

//! Loading resolved objects in batch order.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::config::model::{Description, ObjectName, ObjectTable};
use crate::dag::Batch;

/// Objects loaded by [`load_objects`], with their descriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectRegistry {
    load_order: Vec<ObjectName>,
    descriptions: BTreeMap<ObjectName, Description>,
}

impl ObjectRegistry {
    pub fn load_order(&self) -> &[ObjectName] {
        &self.load_order
    }

    pub fn description(&self, name: &str) -> Option<&Description> {
        self.descriptions.get(name)
    }

    pub fn len(&self) -> usize {
        self.load_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.load_order.is_empty()
    }

    /// Loaded objects in load order, with their description if any.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Description>)> {
        self.load_order
            .iter()
            .map(|name| (name.as_str(), self.descriptions.get(name)))
    }
}

/// Load every object named in `batches`, in order.
///
/// Names without a declaration (which a valid schedule never produces) are
/// skipped with a warning.
pub fn load_objects(table: &ObjectTable, batches: &[Batch]) -> ObjectRegistry {
    let mut registry = ObjectRegistry::default();

    for name in batches.iter().flatten() {
        let Some(decl) = table.get(name) else {
            warn!(object = %name, table = %table.name, "scheduled object has no declaration");
            continue;
        };

        registry.load_order.push(name.clone());
        if let Some(desc) = decl.description.as_ref() {
            registry.descriptions.insert(name.clone(), desc.clone());
        }
    }

    debug!(
        loaded = registry.len(),
        described = registry.descriptions.len(),
        "loaded objects"
    );
    registry
}
