// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

/// Canonical object name type used throughout the crate.
pub type ObjectName = String;

/// A parsed configuration document.
///
/// The document is kept untyped until a specific object table is requested
/// with [`ConfigDocument::object_table`]; other top-level tables may hold
/// unrelated settings.
///
/// ```toml
/// [objects.item]
/// description = { short = "An item", long = "Something you can carry." }
///
/// [objects.sword]
/// inherits = ["item", "weapon"]
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigDocument {
    pub(crate) root: toml::Table,
}

impl ConfigDocument {
    pub fn new(root: toml::Table) -> Self {
        Self { root }
    }

    /// Names of all top-level keys in the document.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(|k| k.as_str())
    }
}

/// Descriptive metadata attached to an object.
///
/// Missing `short` / `long` fields default to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Description {
    #[serde(default, rename = "short")]
    pub short_desc: String,
    #[serde(default, rename = "long")]
    pub long_desc: String,
}

/// One decoded `[<table>.<name>]` declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectDecl {
    pub name: ObjectName,
    /// Direct dependencies, in declaration order (`inherits = [...]`).
    pub inherits: Vec<ObjectName>,
    pub description: Option<Description>,
}

impl ObjectDecl {
    pub fn new(name: impl Into<ObjectName>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Why part of a declaration was skipped during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// The object's value is not a table; the object is kept with no
    /// dependencies.
    NotATable,
    /// `inherits` is present but not an array.
    InheritsNotList,
    /// Item `index` of `inherits` is not a string.
    NonStringDependency { index: usize },
    /// `description` is not a table of strings.
    MalformedDescription,
}

impl std::fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedReason::NotATable => write!(f, "declaration is not a table"),
            MalformedReason::InheritsNotList => write!(f, "`inherits` is not a list"),
            MalformedReason::NonStringDependency { index } => {
                write!(f, "`inherits[{index}]` is not a string")
            }
            MalformedReason::MalformedDescription => {
                write!(f, "`description` is not a table of strings")
            }
        }
    }
}

/// A skipped piece of a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedEntry {
    pub object: ObjectName,
    pub reason: MalformedReason,
}

/// All declarations of one object table, keyed by object name.
#[derive(Debug, Clone, Default)]
pub struct ObjectTable {
    /// Name of the top-level table these objects came from.
    pub name: String,
    pub objects: BTreeMap<ObjectName, ObjectDecl>,
    /// Entries skipped while decoding, in encounter order.
    pub malformed: Vec<MalformedEntry>,
}

impl ObjectTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Insert or replace a declaration (last write wins).
    pub fn insert(&mut self, decl: ObjectDecl) {
        self.objects.insert(decl.name.clone(), decl);
    }

    pub fn get(&self, name: &str) -> Option<&ObjectDecl> {
        self.objects.get(name)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
