//! zprune - prune world save files outside a retained map region
//!
//! Scans the save directories of a world, flags the map, chunk and zombie
//! population files whose coordinates lie outside the configured regions,
//! and deletes them when asked to.

mod cli;
mod display;
mod error;
mod events;
mod logging;

use crate::cli::{Cli, Commands, TargetArgs};
use crate::display::OutputRenderer;
use crate::error::CliError;
use crate::events::EventHandler;
use clap::Parser;
use std::panic;
use std::process;
use std::thread;
use tracing::{error, info};
use zprune_config::Config;
use zprune_retention::{Pruner, RetentionRules, ScanOptions, StdFs};
use zprune_types::{PruneMode, Region};

fn main() {
    // Parse command line arguments first to check for JSON mode
    let cli = Cli::parse();
    let json_mode = cli.global.json;

    init_tracing(json_mode, cli.global.debug);

    if let Err(e) = run(cli) {
        error!("Application error: {}", e);
        if json_mode {
            let value = serde_json::json!({
                "error": e.to_string(),
                "code": e.code(),
                "hint": e.hint(),
            });
            println!("{value}");
        } else {
            eprintln!("Error: {e}");
            if let Some(hint) = e.hint() {
                eprintln!("  Hint: {hint}");
            }
        }
        process::exit(1);
    }
}

/// Main application logic
fn run(cli: Cli) -> Result<(), CliError> {
    info!("Starting zprune v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration with proper precedence:
    // 1. Start with file config (or defaults)
    let mut config = Config::load_or_default(cli.global.config.as_deref())?;

    // 2. Merge environment variables
    config.merge_env()?;

    let renderer = OutputRenderer::new(cli.global.json);

    // 3. Apply CLI flags (highest precedence) and dispatch
    match cli.command {
        None => {
            let mode = config.scan.mode;
            execute_prune(&config, mode, &renderer, cli.global.json)
        }
        Some(Commands::Scan(target)) => {
            apply_target_args(&mut config, target);
            execute_prune(&config, PruneMode::DryRun, &renderer, cli.global.json)
        }
        Some(Commands::Prune { target, yes }) => {
            if !yes {
                return Err(CliError::InvalidArguments(
                    "prune deletes files; pass --yes to confirm, or use `zprune scan` for a dry run"
                        .to_string(),
                ));
            }
            apply_target_args(&mut config, target);
            execute_prune(&config, PruneMode::Execute, &renderer, cli.global.json)
        }
        Some(Commands::Region { x, y, chunk_size }) => {
            let cells = Region::new(x, y);
            let chunks = cells.containing_chunk_region(chunk_size);
            renderer.render_region(&cells, &chunks, chunk_size)?;
            Ok(())
        }
        Some(Commands::Config) => {
            renderer.render_config(&config)?;
            Ok(())
        }
    }
}

/// Apply per-command target overrides
fn apply_target_args(config: &mut Config, target: TargetArgs) {
    if let Some(save_root) = target.save_root {
        config.paths.save_root = save_root;
        // An explicit root on the command line wins over configured directories
        config.paths.directories = None;
    }
    if target.skip_missing {
        config.scan.skip_missing = true;
    }
}

/// Run a pruning pass and render its output
fn execute_prune(
    config: &Config,
    mode: PruneMode,
    renderer: &OutputRenderer,
    json_mode: bool,
) -> Result<(), CliError> {
    let rules = RetentionRules::new(config.category_regions()?);
    let targets = config.target_directories()?;
    let options = ScanOptions {
        mode,
        skip_missing: config.scan.skip_missing,
    };

    let (event_sender, event_receiver) = zprune_events::channel();
    let pruner = Pruner::new(rules, StdFs, options).with_event_sender(event_sender);
    let mut event_handler = EventHandler::new(json_mode);

    // The pass runs on a worker so lines are printed as entries are classified.
    // The receiver loop ends once the worker drops the pruner and its sender.
    let result = thread::scope(|scope| {
        let worker = scope.spawn(move || pruner.run(&targets));
        for event in &event_receiver {
            event_handler.handle_event(event);
        }
        worker
            .join()
            .unwrap_or_else(|payload| panic::resume_unwind(payload))
    });

    let report = result?;
    renderer.render_report(&report)?;

    info!("Command completed successfully");
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing(json_mode: bool, debug_enabled_flag: bool) {
    // Check if debug logging is enabled
    let debug_enabled = std::env::var("RUST_LOG").is_ok() || debug_enabled_flag;

    if json_mode && !debug_enabled {
        // JSON mode: suppress console logs to avoid contaminating JSON
        tracing_subscriber::fmt()
            .with_writer(std::io::sink)
            .with_env_filter("off")
            .init();
        return;
    }

    let default_filter = if debug_enabled_flag {
        "warn,zprune=debug,zprune_retention=debug,zprune_config=debug"
    } else {
        "warn"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    if json_mode {
        // Structured logs on stderr, stdout stays valid JSON
        tracing_subscriber::fmt()
            .json()
            .with_writer(std::io::stderr)
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(env_filter)
            .init();
    }
}
