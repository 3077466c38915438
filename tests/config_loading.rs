use std::io::Write;
use std::path::PathBuf;

use loadorder::config::{MalformedReason, load_from_path, parse_str};
use loadorder::errors::LoadOrderError;
use loadorder_test_utils::init_tracing;
use tempfile::NamedTempFile;

fn demo(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(file)
}

#[test]
fn demo_items_decode() {
    init_tracing();

    let doc = load_from_path(demo("items.toml")).unwrap();
    let objects = doc.object_table("objects").unwrap();

    assert_eq!(objects.name, "objects");
    assert_eq!(objects.len(), 6);
    assert!(objects.malformed.is_empty());

    let sword = objects.get("sword").unwrap();
    assert_eq!(sword.inherits, vec!["blade", "weapon"]);
    assert_eq!(sword.description.as_ref().unwrap().short_desc, "A sword");
    assert!(objects.get("shield").unwrap().description.is_none());
}

#[test]
fn object_without_inherits_has_no_dependencies() {
    let doc = parse_str(
        r#"
[objects.base]
[objects.other]
name = "unrelated field"
"#,
    )
    .unwrap();
    let objects = doc.object_table("objects").unwrap();

    assert!(objects.get("base").unwrap().inherits.is_empty());
    assert!(objects.get("other").unwrap().inherits.is_empty());
    assert!(objects.malformed.is_empty());
}

#[test]
fn malformed_entries_are_skipped_not_fatal() {
    init_tracing();

    let doc = parse_str(
        r#"
[objects]
weird = 5

[objects.mixed]
inherits = ["a", 3, "b"]

[objects.scalar]
inherits = "a"

[objects.badesc]
description = "just text"

[objects.halfdesc]
description = { short = "s" }
"#,
    )
    .unwrap();
    let objects = doc.object_table("objects").unwrap();

    assert_eq!(objects.len(), 5);
    assert!(objects.get("weird").unwrap().inherits.is_empty());
    assert_eq!(objects.get("mixed").unwrap().inherits, vec!["a", "b"]);
    assert!(objects.get("scalar").unwrap().inherits.is_empty());
    assert!(objects.get("badesc").unwrap().description.is_none());

    let half = objects.get("halfdesc").unwrap().description.clone().unwrap();
    assert_eq!(half.short_desc, "s");
    assert_eq!(half.long_desc, "");

    let reasons: Vec<(&str, &MalformedReason)> = objects
        .malformed
        .iter()
        .map(|m| (m.object.as_str(), &m.reason))
        .collect();
    assert!(reasons.contains(&("weird", &MalformedReason::NotATable)));
    assert!(reasons.contains(&("mixed", &MalformedReason::NonStringDependency { index: 1 })));
    assert!(reasons.contains(&("scalar", &MalformedReason::InheritsNotList)));
    assert!(reasons.contains(&("badesc", &MalformedReason::MalformedDescription)));
    assert_eq!(reasons.len(), 4);
}

#[test]
fn missing_table_is_an_error() {
    let doc = parse_str("[things.a]\n").unwrap();

    match doc.object_table("objects") {
        Err(LoadOrderError::TableNotFound(name)) => assert_eq!(name, "objects"),
        other => panic!("Expected TableNotFound, got: {:?}", other),
    }
}

#[test]
fn non_table_object_root_is_config_error() {
    let doc = parse_str("objects = [1, 2]\n").unwrap();

    match doc.object_table("objects") {
        Err(LoadOrderError::ConfigError(msg)) => assert!(msg.contains("objects")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn invalid_toml_returns_structured_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[objects.a\ninherits = [").unwrap();

    match load_from_path(file.path()) {
        Err(LoadOrderError::TomlError(_)) => {}
        other => panic!("Expected TomlError, got: {:?}", other),
    }
}

#[test]
fn missing_file_returns_io_error() {
    let dir = tempfile::tempdir().unwrap();

    match load_from_path(dir.path().join("nope.toml")) {
        Err(LoadOrderError::IoError(_)) => {}
        other => panic!("Expected IoError, got: {:?}", other),
    }
}
