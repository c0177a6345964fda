//! Output rendering and formatting

use comfy_table::{presets::UTF8_FULL, Attribute, Cell, ContentArrangement, Table};
use std::io;
use std::num::NonZeroU16;
use zprune_config::Config;
use zprune_types::{PruneReport, Region};

/// Output renderer for CLI results
#[derive(Clone)]
pub struct OutputRenderer {
    /// Use JSON output format
    json_output: bool,
}

impl OutputRenderer {
    /// Create new output renderer
    pub fn new(json_output: bool) -> Self {
        Self { json_output }
    }

    /// Render the report of a pruning pass
    ///
    /// In text mode the per-file lines have already been printed by the
    /// event handler, so only JSON mode prints anything here.
    pub fn render_report(&self, report: &PruneReport) -> io::Result<()> {
        if self.json_output {
            let json = report.to_json().map_err(io::Error::other)?;
            println!("{json}");
        }
        Ok(())
    }

    /// Render the effective configuration
    pub fn render_config(&self, config: &Config) -> io::Result<()> {
        if self.json_output {
            let json = serde_json::to_string_pretty(config).map_err(io::Error::other)?;
            println!("{json}");
        } else {
            let toml = config.to_toml().map_err(io::Error::other)?;
            print!("{toml}");
        }
        Ok(())
    }

    /// Render a cell region next to the chunk region covering it
    pub fn render_region(
        &self,
        cells: &Region,
        chunks: &Region,
        chunk_size: NonZeroU16,
    ) -> io::Result<()> {
        if self.json_output {
            let value = serde_json::json!({
                "chunk_size": chunk_size.get(),
                "cells": cells,
                "chunks": chunks,
            });
            let json = serde_json::to_string_pretty(&value).map_err(io::Error::other)?;
            println!("{json}");
            return Ok(());
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.set_header(vec![
            Cell::new("Region").add_attribute(Attribute::Bold),
            Cell::new("X").add_attribute(Attribute::Bold),
            Cell::new("Y").add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![
            Cell::new("cells"),
            Cell::new(format!("{}..{}", cells.x.start, cells.x.end)),
            Cell::new(format!("{}..{}", cells.y.start, cells.y.end)),
        ]);
        table.add_row(vec![
            Cell::new(format!("chunks ({chunk_size} cells)")),
            Cell::new(format!("{}..{}", chunks.x.start, chunks.x.end)),
            Cell::new(format!("{}..{}", chunks.y.start, chunks.y.end)),
        ]);

        println!("{table}");
        Ok(())
    }
}
