// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod objects;
pub mod resolve;

use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::load_from_path;
use crate::config::model::ObjectTable;
use crate::errors::LoadOrderError;
use crate::objects::{ObjectRegistry, load_objects};
use crate::resolve::{Resolution, resolve_table};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and decoding
/// - dependency resolution
/// - object loading in batch order
/// - report output
pub fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let doc = load_from_path(&config_path)?;
    let objects = doc.object_table(&args.table)?;
    info!(
        config = %config_path.display(),
        table = %args.table,
        objects = objects.len(),
        "loaded object declarations"
    );

    if args.dry_run {
        print_dry_run(&objects);
        return Ok(());
    }

    let resolution = resolve_table(&objects);

    if args.dot {
        print!("{}", resolution.reverse_graph.to_dot());
    } else {
        let registry = load_objects(&objects, &resolution.batches);
        print_report(&resolution, &registry);
    }

    if args.strict && !resolution.is_complete() {
        return Err(LoadOrderError::Unresolvable(resolution.errors.len()).into());
    }

    Ok(())
}

/// Simple dry-run output: print objects and their declared dependencies.
fn print_dry_run(objects: &ObjectTable) {
    println!("loadorder dry-run");
    println!("objects ({}):", objects.len());
    for (name, decl) in objects.objects.iter() {
        println!("  - {name}");
        if !decl.inherits.is_empty() {
            println!("      inherits: {:?}", decl.inherits);
        }
        if let Some(ref desc) = decl.description {
            println!("      short: {}", desc.short_desc);
        }
    }

    if !objects.malformed.is_empty() {
        println!();
        println!("skipped entries ({}):", objects.malformed.len());
        for entry in objects.malformed.iter() {
            println!("  - {}: {}", entry.object, entry.reason);
        }
    }

    debug!("dry-run complete (nothing resolved)");
}

fn print_report(resolution: &Resolution, registry: &ObjectRegistry) {
    for (i, batch) in resolution.batches.iter().enumerate() {
        println!("Batch {i}");
        for name in batch.iter() {
            println!("    {name}");
        }
    }

    println!("---------- reduced ----------");
    print!("{}", resolution.reverse_graph);
    println!("=--");

    for error in resolution.errors.values() {
        print!("{error}");
    }
    for cycle in resolution.cycles.iter() {
        println!("Cycle: {}", cycle.join(" <-> "));
    }

    if !registry.is_empty() {
        println!("---------- objects ----------");
        for (name, desc) in registry.iter() {
            match desc {
                Some(desc) => println!("{name}: {}", desc.short_desc),
                None => println!("{name}"),
            }
        }
    }
}
