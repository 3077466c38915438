// src/dag/reduce.rs

//! Reverse ("depended upon by") graph and its transitive reduction.
//!
//! Edges run from a dependency to its dependents: if `B` inherits from `A`,
//! the reverse graph holds `A -> B`.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use petgraph::algo::is_cyclic_directed;
use petgraph::dot::{Config, Dot};
use petgraph::graphmap::DiGraphMap;
use tracing::{debug, warn};

use crate::config::model::ObjectName;
use crate::dag::dep_map::DepMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReverseGraph {
    successors: BTreeMap<ObjectName, BTreeSet<ObjectName>>,
}

impl ReverseGraph {
    /// Invert a dependency map.
    ///
    /// Declared objects and referenced-but-undeclared names both become
    /// nodes.
    pub fn from_dep_map(dep_map: &DepMap) -> Self {
        let mut successors: BTreeMap<ObjectName, BTreeSet<ObjectName>> = BTreeMap::new();

        for (name, deps) in dep_map.iter() {
            successors.entry(name.clone()).or_default();
            for dep in deps.iter() {
                successors
                    .entry(dep.clone())
                    .or_default()
                    .insert(name.clone());
            }
        }

        Self { successors }
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.successors.keys().map(|s| s.as_str())
    }

    pub fn node_count(&self) -> usize {
        self.successors.len()
    }

    pub fn edge_count(&self) -> usize {
        self.successors.values().map(BTreeSet::len).sum()
    }

    /// Direct dependents of `name`.
    pub fn successors_of(&self, name: &str) -> Option<&BTreeSet<ObjectName>> {
        self.successors.get(name)
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.successors
            .get(from)
            .is_some_and(|succ| succ.contains(to))
    }

    pub fn is_cyclic(&self) -> bool {
        is_cyclic_directed(&self.to_graphmap())
    }

    /// Every node reachable from `name`, not counting `name` itself.
    ///
    /// Terminates on cyclic graphs.
    pub fn descendants(&self, name: &str) -> BTreeSet<ObjectName> {
        self.reachable(name, None)
    }

    /// Remove every edge `n0 -> n3` that is implied by a longer path
    /// `n0 -> n1 -> ... -> n3`.
    ///
    /// The walk from `n1` never passes through `n0`, so each removed edge has
    /// a witness path that does not use it and reachability is unchanged,
    /// cyclic input included. Self-loops are kept. Returns the number of
    /// removed edges.
    pub fn reduce(&mut self) -> usize {
        if self.is_cyclic() {
            warn!("reverse dependency graph contains cycles; reduction is not unique");
        }

        let nodes: Vec<ObjectName> = self.successors.keys().cloned().collect();
        let mut removed = 0;

        for n0 in nodes.iter() {
            let direct: Vec<ObjectName> = match self.successors.get(n0) {
                Some(succ) => succ.iter().cloned().collect(),
                None => continue,
            };

            for n1 in direct.iter() {
                // n0 -> n1 may already have been removed in this pass.
                if n1 == n0 || !self.has_edge(n0, n1) {
                    continue;
                }

                let implied = self.reachable(n1, Some(n0.as_str()));
                if let Some(succ) = self.successors.get_mut(n0) {
                    for n3 in implied.iter() {
                        if succ.remove(n3) {
                            debug!(from = %n0, to = %n3, via = %n1, "removed implied edge");
                            removed += 1;
                        }
                    }
                }
            }
        }

        debug!(removed, remaining = self.edge_count(), "reduced reverse graph");
        removed
    }

    /// Render as Graphviz DOT.
    pub fn to_dot(&self) -> String {
        let graph = self.to_graphmap();
        format!("{}", Dot::with_config(&graph, &[Config::EdgeNoLabel]))
    }

    fn to_graphmap(&self) -> DiGraphMap<&str, &str> {
        let mut graph: DiGraphMap<&str, &str> = DiGraphMap::new();
        for (from, succ) in self.successors.iter() {
            graph.add_node(from.as_str());
            for to in succ.iter() {
                graph.add_edge(from.as_str(), to.as_str(), "");
            }
        }
        graph
    }

    /// Iterative DFS from `start` with a visited set. `start` is excluded
    /// from the result and `avoid` is never entered.
    fn reachable(&self, start: &str, avoid: Option<&str>) -> BTreeSet<ObjectName> {
        let mut visited: BTreeSet<&str> = BTreeSet::new();
        visited.insert(start);
        if let Some(avoid) = avoid {
            visited.insert(avoid);
        }

        let mut stack: Vec<&str> = vec![start];
        let mut found: BTreeSet<ObjectName> = BTreeSet::new();

        while let Some(current) = stack.pop() {
            let Some(succ) = self.successors.get(current) else {
                continue;
            };
            for next in succ.iter() {
                if visited.insert(next.as_str()) {
                    found.insert(next.clone());
                    stack.push(next.as_str());
                }
            }
        }

        found
    }
}

impl fmt::Display for ReverseGraph {
    /// Nodes with at least one dependent, each followed by its dependents.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, succ) in self.successors.iter().filter(|(_, s)| !s.is_empty()) {
            writeln!(f, "{name}")?;
            for child in succ.iter() {
                writeln!(f, "    {child}")?;
            }
        }
        Ok(())
    }
}

/// Build the reverse graph of `dep_map` and transitively reduce it.
pub fn reduce(dep_map: &DepMap) -> ReverseGraph {
    let mut graph = ReverseGraph::from_dep_map(dep_map);
    graph.reduce();
    graph
}
