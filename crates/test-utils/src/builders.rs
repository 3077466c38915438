#![allow(dead_code)]

use std::collections::BTreeSet;

use loadorder::config::{Description, ObjectDecl, ObjectTable};
use loadorder::dag::DepMap;

/// Build a `DepMap` from `(name, deps)` pairs.
///
/// `dep_map(&[("B", &["A"]), ("A", &[])])`
pub fn dep_map(entries: &[(&str, &[&str])]) -> DepMap {
    entries
        .iter()
        .map(|(name, deps)| {
            let deps: BTreeSet<String> = deps.iter().map(|d| d.to_string()).collect();
            (name.to_string(), deps)
        })
        .collect()
}

/// Builder for `ObjectTable` to simplify test setup.
pub struct ObjectTableBuilder {
    table: ObjectTable,
}

impl ObjectTableBuilder {
    pub fn new() -> Self {
        Self {
            table: ObjectTable::new("objects"),
        }
    }

    pub fn with_object(mut self, decl: ObjectDecl) -> Self {
        self.table.insert(decl);
        self
    }

    pub fn build(self) -> ObjectTable {
        self.table
    }
}

impl Default for ObjectTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `ObjectDecl`.
pub struct ObjectDeclBuilder {
    decl: ObjectDecl,
}

impl ObjectDeclBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            decl: ObjectDecl::new(name),
        }
    }

    pub fn inherits(mut self, dep: &str) -> Self {
        self.decl.inherits.push(dep.to_string());
        self
    }

    pub fn description(mut self, short: &str, long: &str) -> Self {
        self.decl.description = Some(Description {
            short_desc: short.to_string(),
            long_desc: long.to_string(),
        });
        self
    }

    pub fn build(self) -> ObjectDecl {
        self.decl
    }
}
