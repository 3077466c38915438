// src/dag/dep_map.rs

//! Dependency map construction from decoded declarations.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use crate::config::model::{ObjectDecl, ObjectName, ObjectTable};

/// Object name -> names it directly depends on.
///
/// Ordered so that every consumer (batches, reports, DOT output) is
/// deterministic.
pub type DepMap = BTreeMap<ObjectName, BTreeSet<ObjectName>>;

/// Build the dependency map for an object table.
///
/// Every declared object gets an entry, even with no dependencies.
pub fn build_dep_map(table: &ObjectTable) -> DepMap {
    build_dep_map_from_decls(table.objects.values())
}

/// Build a dependency map from a sequence of declarations.
///
/// Repeated names use insert-or-fetch semantics: their `inherits` lists are
/// unioned into a single entry.
pub fn build_dep_map_from_decls<'a, I>(decls: I) -> DepMap
where
    I: IntoIterator<Item = &'a ObjectDecl>,
{
    let mut dep_map = DepMap::new();

    for decl in decls {
        let deps = dep_map.entry(decl.name.clone()).or_default();
        for dep in decl.inherits.iter() {
            if dep == &decl.name {
                // Kept so that diagnosis reports it as circular.
                warn!(object = %decl.name, "object inherits from itself");
            }
            deps.insert(dep.clone());
        }
    }

    debug!(
        objects = dep_map.len(),
        edges = dep_map.values().map(BTreeSet::len).sum::<usize>(),
        "built dependency map"
    );

    dep_map
}
