// src/dag/diagnose.rs

//! Classification of a stalled remainder into unresolved and circular
//! dependencies.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;

use crate::config::model::ObjectName;
use crate::dag::dep_map::DepMap;

/// Why one stuck object could not be scheduled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyError {
    pub object: ObjectName,
    /// Dependencies that are not objects in the remainder at all.
    pub unresolved: BTreeSet<ObjectName>,
    /// Dependencies that are themselves stuck (directly or transitively).
    pub circular: BTreeSet<ObjectName>,
}

impl DependencyError {
    /// `true` if the object lists itself among its dependencies.
    pub fn is_self_dependent(&self) -> bool {
        self.circular.contains(&self.object)
    }
}

impl fmt::Display for DependencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dependency error in {}", self.object)?;
        if !self.circular.is_empty() {
            writeln!(f, "  Found upstream dependency error:")?;
            for name in self.circular.iter() {
                writeln!(f, "   - {name}")?;
            }
        }
        if !self.unresolved.is_empty() {
            writeln!(f, "  Found unresolved dependencies:")?;
            for name in self.unresolved.iter() {
                writeln!(f, "   - {name}")?;
            }
        }
        Ok(())
    }
}

/// Classify every remaining dependency of every stuck object.
///
/// A dependency that is a key of `remainder` is circular ("stuck together
/// with"); anything else is unresolved. This is a component-level
/// classification, see [`find_cycles`] for the exact cycles.
pub fn classify(remainder: &DepMap) -> BTreeMap<ObjectName, DependencyError> {
    remainder
        .iter()
        .map(|(name, deps)| {
            let (circular, unresolved): (BTreeSet<_>, BTreeSet<_>) = deps
                .iter()
                .cloned()
                .partition(|dep| remainder.contains_key(dep));

            let error = DependencyError {
                object: name.clone(),
                unresolved,
                circular,
            };
            (name.clone(), error)
        })
        .collect()
}

/// Exact cycles among the stuck objects.
///
/// Returns every strongly connected component of the remainder that has
/// more than one member or a self-loop, members sorted by name and
/// components sorted by their first member.
pub fn find_cycles(remainder: &DepMap) -> Vec<Vec<ObjectName>> {
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for name in remainder.keys() {
        graph.add_node(name.as_str());
    }
    for (name, deps) in remainder.iter() {
        for dep in deps.iter().filter(|d| remainder.contains_key(*d)) {
            graph.add_edge(name.as_str(), dep.as_str(), ());
        }
    }

    let mut cycles: Vec<Vec<ObjectName>> = tarjan_scc(&graph)
        .into_iter()
        .filter(|component| {
            component.len() > 1 || graph.contains_edge(component[0], component[0])
        })
        .map(|component| {
            let mut members: Vec<ObjectName> =
                component.into_iter().map(str::to_string).collect();
            members.sort();
            members
        })
        .collect();

    cycles.sort();
    cycles
}
