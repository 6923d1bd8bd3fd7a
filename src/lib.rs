// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod lightsail;
pub mod logging;
pub mod render;
pub mod types;

use std::fs;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{Definition, load_and_validate};
use crate::render::render_definition_json;

/// High-level entry point used by `main.rs`.
///
/// Loads and validates the definition file, then either prints a summary
/// (`--dry-run`) or renders the instance resources as JSON to stdout or
/// `--output`.
pub fn run(args: CliArgs) -> Result<()> {
    let definition = load_and_validate(&args.config)
        .with_context(|| format!("failed to load {}", args.config.display()))?;

    if args.dry_run {
        print_dry_run(&definition);
        return Ok(());
    }

    let json = render_definition_json(&definition, !args.compact)?;

    match args.output {
        Some(path) => {
            fs::write(&path, format!("{json}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote rendered resources");
        }
        None => println!("{json}"),
    }

    Ok(())
}

/// Simple dry-run output: one block per instance with its resolved facets.
fn print_dry_run(def: &Definition) {
    println!("lightsail-props dry-run");
    println!();

    println!("instances ({}):", def.len());
    for inst in def.instances() {
        println!("  - {}", inst.logical_id());
        println!("      instance_name: {}", inst.instance_name());
        println!(
            "      blueprint: {} ({:?})",
            inst.blueprint(),
            inst.blueprint().family()
        );
        println!("      bundle: {}", inst.bundle());
        if let Some(key) = inst.key_pair_name() {
            println!("      key_pair_name: {key}");
        }
        for add_on in inst.add_ons() {
            match &add_on.auto_snapshot_add_on_request {
                Some(req) => println!(
                    "      add_on: {} ({:?}, at {})",
                    add_on.add_on_type,
                    add_on.status,
                    req.snapshot_time_of_day()
                ),
                None => println!("      add_on: {} ({:?})", add_on.add_on_type, add_on.status),
            }
        }
        let ports: Vec<&str> = inst
            .networking()
            .ports
            .iter()
            .map(|p| p.common_name.as_str())
            .collect();
        if !ports.is_empty() {
            println!("      ports: {:?}", ports);
        }
        if let Some(disks) = inst.hardware().and_then(|h| h.disks.as_ref()) {
            for disk in disks {
                println!(
                    "      disk: {} at {} ({} GB)",
                    disk.disk_name,
                    disk.path,
                    disk.size_in_gb.as_deref().unwrap_or("?")
                );
            }
        }
        if !inst.user_data().is_empty() {
            println!("      user_data: {} bytes", inst.user_data().len());
        }
    }

    debug!("dry-run complete (nothing rendered)");
}
