use std::path::PathBuf;

use clap::Parser;
use loadorder::cli::CliArgs;
use loadorder::config::default_config_path;
use loadorder::logging::parse_level_str;
use loadorder::run;

fn demo(file: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join(file)
        .display()
        .to_string()
}

#[test]
fn defaults_match_original_file_names() {
    let args = CliArgs::try_parse_from(["loadorder"]).unwrap();

    assert_eq!(PathBuf::from(&args.config), default_config_path());
    assert_eq!(args.table, "objects");
    assert!(!args.dry_run && !args.dot && !args.strict);
    assert!(args.log_level.is_none());
}

#[test]
fn strict_run_fails_on_partial_schedule() {
    let config = demo("broken.toml");
    let args =
        CliArgs::try_parse_from(["loadorder", "--config", config.as_str(), "--strict"]).unwrap();

    let err = run(args).unwrap_err();
    assert!(err.to_string().contains("could not be scheduled"));
}

#[test]
fn non_strict_run_reports_and_succeeds() {
    let config = demo("broken.toml");
    let args = CliArgs::try_parse_from(["loadorder", "--config", config.as_str()]).unwrap();

    assert!(run(args).is_ok());
}

#[test]
fn dot_and_dry_run_modes_succeed() {
    let config = demo("items.toml");
    for flag in ["--dot", "--dry-run"] {
        let args =
            CliArgs::try_parse_from(["loadorder", "--config", config.as_str(), flag]).unwrap();
        assert!(run(args).is_ok(), "{flag}");
    }
}

#[test]
fn log_level_names_parse() {
    assert_eq!(parse_level_str(" Debug "), Some(tracing::Level::DEBUG));
    assert_eq!(parse_level_str("warning"), Some(tracing::Level::WARN));
    assert_eq!(parse_level_str("loud"), None);
}
