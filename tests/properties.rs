use std::collections::{BTreeSet, HashSet};

use loadorder::dag::{DepMap, ReverseGraph, build_batches};
use proptest::prelude::*;

fn name(i: usize) -> String {
    format!("obj_{i:02}")
}

// Acyclic by construction: object i may only depend on objects 0..i.
fn dag_from_picks(raw: Vec<Vec<usize>>) -> DepMap {
    raw.into_iter()
        .enumerate()
        .map(|(i, picks)| {
            let deps: BTreeSet<String> = if i == 0 {
                BTreeSet::new()
            } else {
                picks.into_iter().map(|p| name(p % i)).collect()
            };
            (name(i), deps)
        })
        .collect()
}

// Anything goes: cycles, self-loops and undeclared names (indices >= n).
fn graph_from_picks(raw: Vec<Vec<usize>>) -> DepMap {
    raw.into_iter()
        .enumerate()
        .map(|(i, picks)| {
            let deps: BTreeSet<String> = picks.into_iter().map(name).collect();
            (name(i), deps)
        })
        .collect()
}

fn dag_strategy(max_objects: usize) -> impl Strategy<Value = DepMap> {
    (1..=max_objects).prop_flat_map(|n| {
        proptest::collection::vec(proptest::collection::vec(any::<usize>(), 0..4), n)
            .prop_map(dag_from_picks)
    })
}

fn any_graph_strategy(max_objects: usize) -> impl Strategy<Value = DepMap> {
    (1..=max_objects).prop_flat_map(|n| {
        proptest::collection::vec(proptest::collection::vec(0..n + 2, 0..4), n)
            .prop_map(graph_from_picks)
    })
}

proptest! {
    #[test]
    fn batches_form_a_topological_order(deps in dag_strategy(12)) {
        let schedule = build_batches(deps.clone());

        prop_assert!(schedule.is_complete());
        for (object, object_deps) in deps.iter() {
            let at = schedule.batch_index_of(object).unwrap();
            for dep in object_deps {
                let dep_at = schedule.batch_index_of(dep).unwrap();
                prop_assert!(dep_at < at, "{} (batch {}) before {} (batch {})", dep, dep_at, object, at);
            }
        }
    }

    #[test]
    fn every_object_is_scheduled_or_left_over_exactly_once(deps in any_graph_strategy(12)) {
        let schedule = build_batches(deps.clone());

        let mut seen: HashSet<&str> = HashSet::new();
        for name in schedule.load_order().chain(schedule.remainder.keys().map(String::as_str)) {
            prop_assert!(seen.insert(name), "{} appears twice", name);
        }
        let expected: HashSet<&str> = deps.keys().map(String::as_str).collect();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn remainder_never_references_scheduled_objects(deps in any_graph_strategy(12)) {
        let schedule = build_batches(deps);
        let scheduled: HashSet<&str> = schedule.load_order().collect();

        for remaining in schedule.remainder.values() {
            for dep in remaining {
                prop_assert!(!scheduled.contains(dep.as_str()));
            }
        }
    }

    #[test]
    fn reduction_of_dag_is_minimal_and_idempotent(deps in dag_strategy(12)) {
        let before = ReverseGraph::from_dep_map(&deps);
        let mut after = before.clone();
        after.reduce();

        for node in before.nodes() {
            prop_assert_eq!(before.descendants(node), after.descendants(node));
        }

        // No kept edge u -> v is reachable through another successor of u.
        for u in after.nodes() {
            let succ = after.successors_of(u).unwrap();
            for v in succ {
                for w in succ.iter().filter(|w| *w != v) {
                    prop_assert!(!after.descendants(w).contains(v), "{} -> {} implied via {}", u, v, w);
                }
            }
        }

        let reduced = after.clone();
        prop_assert_eq!(after.reduce(), 0);
        prop_assert_eq!(after, reduced);
    }

    #[test]
    fn reduction_of_any_graph_keeps_reachability(deps in any_graph_strategy(10)) {
        let before = ReverseGraph::from_dep_map(&deps);
        let mut after = before.clone();
        after.reduce();

        prop_assert!(after.edge_count() <= before.edge_count());
        for node in before.nodes() {
            prop_assert_eq!(before.descendants(node), after.descendants(node));
        }
    }
}
