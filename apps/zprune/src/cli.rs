//! Command line interface definition

use clap::{Args, Parser, Subcommand};
use std::num::NonZeroU16;
use std::ops::Range;
use std::path::PathBuf;

/// zprune - prune world save files outside a retained map region
#[derive(Parser)]
#[command(name = "zprune")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Prune world save files that fall outside a retained map region")]
#[command(long_about = None)]
pub struct Cli {
    // No command runs a pass in the configured mode (dry run by default)
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Global arguments available for all commands
#[derive(Parser)]
pub struct GlobalArgs {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Use alternate config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Which save to scan
#[derive(Args, Default)]
pub struct TargetArgs {
    /// World save directory; isoregiondata and the _player sibling are derived from it
    #[arg(long, value_name = "PATH")]
    pub save_root: Option<PathBuf>,

    /// Skip save directories that do not exist instead of failing
    #[arg(long)]
    pub skip_missing: bool,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Report files outside the retained region without deleting anything
    Scan(TargetArgs),

    /// Delete files outside the retained region
    Prune {
        #[command(flatten)]
        target: TargetArgs,

        /// Confirm deletion
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show the chunk region covering a cell region
    Region {
        /// Cell x range, half-open (e.g. 6596..6866)
        #[arg(long, value_parser = parse_range, allow_hyphen_values = true)]
        x: Range<i32>,

        /// Cell y range, half-open (e.g. 5286..5568)
        #[arg(long, value_parser = parse_range, allow_hyphen_values = true)]
        y: Range<i32>,

        /// Cells per chunk side
        #[arg(long, default_value = "300")]
        chunk_size: NonZeroU16,
    },

    /// Print the effective configuration
    Config,
}

/// Parse `start..end` into a half-open range
pub fn parse_range(s: &str) -> Result<Range<i32>, String> {
    let (start, end) = s
        .split_once("..")
        .ok_or_else(|| format!("expected START..END, got '{s}'"))?;
    let start: i32 = start
        .trim()
        .parse()
        .map_err(|e| format!("invalid range start '{start}': {e}"))?;
    let end: i32 = end
        .trim()
        .parse()
        .map_err(|e| format!("invalid range end '{end}': {e}"))?;
    if start >= end {
        return Err(format!("empty range {start}..{end}"));
    }
    Ok(start..end)
}
