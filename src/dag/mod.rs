// src/dag/mod.rs

//! Dependency graph resolution.
//!
//! - [`dep_map`] turns declarations into a name -> dependencies map.
//! - [`scheduler`] destructively peels that map into load batches.
//! - [`diagnose`] explains a stalled remainder.
//! - [`reduce`] builds the transitively reduced reverse graph.

pub mod dep_map;
pub mod diagnose;
pub mod reduce;
pub mod scheduler;

pub use dep_map::{DepMap, build_dep_map, build_dep_map_from_decls};
pub use diagnose::{DependencyError, classify, find_cycles};
pub use reduce::{ReverseGraph, reduce};
pub use scheduler::{Batch, Schedule, build_batches};
