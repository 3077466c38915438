// src/dag/scheduler.rs

//! Batch scheduling: a batched variant of Kahn's algorithm.

use tracing::{debug, warn};

use crate::config::model::ObjectName;
use crate::dag::dep_map::DepMap;

/// A set of objects that were all ready in the same round, in ascending name
/// order.
pub type Batch = Vec<ObjectName>;

/// Result of [`build_batches`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    /// Batches in load order.
    pub batches: Vec<Batch>,
    /// What was left of the map when scheduling stalled (empty on success).
    pub remainder: DepMap,
}

impl Schedule {
    /// `true` if every object was scheduled.
    pub fn is_complete(&self) -> bool {
        self.remainder.is_empty()
    }

    /// `true` if scheduling stopped with objects left over.
    pub fn is_stalled(&self) -> bool {
        !self.remainder.is_empty()
    }

    /// All scheduled objects, batches concatenated in order.
    pub fn load_order(&self) -> impl Iterator<Item = &str> {
        self.batches.iter().flatten().map(|s| s.as_str())
    }

    /// Index of the batch that contains `name`.
    pub fn batch_index_of(&self, name: &str) -> Option<usize> {
        self.batches
            .iter()
            .position(|batch| batch.iter().any(|n| n == name))
    }
}

/// Destructively reduce `dep_map` to a series of mutually independent batches.
///
/// Each round takes every object whose dependency set is empty, removes it as
/// a key and from every remaining dependency set, and appends it as the next
/// batch. A round with nothing ready while objects remain is a stall:
/// scheduling stops and the remainder is returned for diagnosis.
///
/// This never fails and always terminates, whatever the shape of the graph.
pub fn build_batches(mut dep_map: DepMap) -> Schedule {
    let mut batches: Vec<Batch> = Vec::new();

    while !dep_map.is_empty() {
        let ready: Batch = dep_map
            .iter()
            .filter(|(_, deps)| deps.is_empty())
            .map(|(name, _)| name.clone())
            .collect();

        if ready.is_empty() {
            warn!(
                remaining = dep_map.len(),
                scheduled_batches = batches.len(),
                "dependency resolution stalled"
            );
            break;
        }

        for name in ready.iter() {
            dep_map.remove(name);
        }
        for deps in dep_map.values_mut() {
            for name in ready.iter() {
                deps.remove(name);
            }
        }

        debug!(batch = batches.len(), objects = ?ready, "scheduled batch");
        batches.push(ready);
    }

    Schedule {
        batches,
        remainder: dep_map,
    }
}
