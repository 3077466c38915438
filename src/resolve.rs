// src/resolve.rs

//! Resolution entry point: declarations in, batches and diagnostics out.

use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::config::model::{ConfigDocument, ObjectName, ObjectTable};
use crate::dag::{
    Batch, DepMap, DependencyError, ReverseGraph, build_batches, build_dep_map, classify,
    find_cycles, reduce,
};
use crate::errors::Result;

/// Everything produced by one resolution run.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Load batches, in order.
    pub batches: Vec<Batch>,
    /// Per-object breakdown of why the remainder is stuck (empty on success).
    pub errors: BTreeMap<ObjectName, DependencyError>,
    /// Exact cycles among the stuck objects.
    pub cycles: Vec<Vec<ObjectName>>,
    /// Transitively reduced reverse graph of the full declaration set.
    pub reverse_graph: ReverseGraph,
    /// Frozen copy of the dependency map as declared.
    pub declared: DepMap,
}

impl Resolution {
    /// `true` if every declared object was scheduled.
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of objects that made it into a batch.
    pub fn scheduled_count(&self) -> usize {
        self.batches.iter().map(Vec::len).sum()
    }

    /// `true` if `name` was declared (as opposed to only referenced).
    pub fn is_declared(&self, name: &str) -> bool {
        self.declared.contains_key(name)
    }
}

/// Resolve the object table `table` of a loaded config document.
///
/// Errors only when the table cannot be found; dependency problems are
/// reported on the returned [`Resolution`].
pub fn resolve(doc: &ConfigDocument, table: &str) -> Result<Resolution> {
    let objects = doc.object_table(table)?;
    Ok(resolve_table(&objects))
}

/// Resolve an already decoded object table.
pub fn resolve_table(objects: &ObjectTable) -> Resolution {
    let dep_map = build_dep_map(objects);

    // Scheduling consumes the map, so the diagnostic copy is taken first.
    let declared = dep_map.clone();
    let reverse_graph = reduce(&declared);

    let schedule = build_batches(dep_map);
    let errors = classify(&schedule.remainder);
    let cycles = find_cycles(&schedule.remainder);

    if errors.is_empty() {
        info!(
            table = %objects.name,
            objects = declared.len(),
            batches = schedule.batches.len(),
            "resolved all objects"
        );
    } else {
        warn!(
            table = %objects.name,
            scheduled = schedule.batches.iter().map(Vec::len).sum::<usize>(),
            stuck = errors.len(),
            cycles = cycles.len(),
            "resolution incomplete"
        );
    }

    Resolution {
        batches: schedule.batches,
        errors,
        cycles,
        reverse_graph,
        declared,
    }
}
