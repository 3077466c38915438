// src/config/decode.rs

//! Decoding of raw TOML values into [`ObjectDecl`] records.
//!
//! Declarations are decoded once here; everything downstream works on the
//! typed records. Malformed pieces are skipped and recorded, never fatal.

use tracing::warn;

use crate::config::model::{
    Description, MalformedEntry, MalformedReason, ObjectDecl, ObjectTable,
};

const INHERITS_KEY: &str = "inherits";
const DESCRIPTION_KEY: &str = "description";

/// Decode every entry of an object table.
pub fn decode_object_table(table_name: &str, table: &toml::Table) -> ObjectTable {
    let mut out = ObjectTable::new(table_name);

    for (name, value) in table.iter() {
        let mut malformed = Vec::new();
        let decl = decode_object(name, value, &mut malformed);

        for reason in malformed {
            warn!(
                table = table_name,
                object = %name,
                %reason,
                "skipping malformed declaration entry"
            );
            out.malformed.push(MalformedEntry {
                object: name.clone(),
                reason,
            });
        }

        out.insert(decl);
    }

    out
}

fn decode_object(
    name: &str,
    value: &toml::Value,
    malformed: &mut Vec<MalformedReason>,
) -> ObjectDecl {
    let mut decl = ObjectDecl::new(name);

    let Some(fields) = value.as_table() else {
        malformed.push(MalformedReason::NotATable);
        return decl;
    };

    if let Some(inherits) = fields.get(INHERITS_KEY) {
        decl.inherits = decode_inherits(inherits, malformed);
    }

    if let Some(description) = fields.get(DESCRIPTION_KEY) {
        decl.description = decode_description(description, malformed);
    }

    decl
}

fn decode_inherits(value: &toml::Value, malformed: &mut Vec<MalformedReason>) -> Vec<String> {
    let Some(items) = value.as_array() else {
        malformed.push(MalformedReason::InheritsNotList);
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match item.as_str() {
            Some(dep) => Some(dep.to_string()),
            None => {
                malformed.push(MalformedReason::NonStringDependency { index });
                None
            }
        })
        .collect()
}

fn decode_description(
    value: &toml::Value,
    malformed: &mut Vec<MalformedReason>,
) -> Option<Description> {
    match value.clone().try_into::<Description>() {
        Ok(desc) if value.is_table() => Some(desc),
        _ => {
            malformed.push(MalformedReason::MalformedDescription);
            None
        }
    }
}
