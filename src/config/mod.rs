// src/config/mod.rs

//! Configuration source for loadorder.
//!
//! Responsibilities:
//! - Define the typed declaration records (`model.rs`).
//! - Load a TOML document from disk (`loader.rs`).
//! - Decode a named object table into declarations, skipping malformed
//!   entries (`decode.rs`).

pub mod decode;
pub mod loader;
pub mod model;

pub use decode::decode_object_table;
pub use loader::{default_config_path, load_from_path, parse_str};
pub use model::{
    ConfigDocument, Description, MalformedEntry, MalformedReason, ObjectDecl, ObjectName,
    ObjectTable,
};
