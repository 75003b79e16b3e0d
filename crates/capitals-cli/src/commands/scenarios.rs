//! Scenarios command handler running the default scenario suite.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::info;

use capitals_lib::output::{export_suite_csv, write_markdown_report};
use capitals_lib::{Graph, Relation, ScenarioSuite, DEFAULT_SCENARIOS};

use crate::commands::compare::comparator;
use crate::commands::friendly_error;
use crate::output::{format_suite_text, to_json, OutputFormat};
use crate::terminal::ColorPalette;

/// Arguments for the scenarios command.
#[derive(Debug, Clone)]
pub struct ScenariosCommandArgs {
    pub relation: Relation,
    pub cross_check: bool,
    /// Write the results as CSV to this file.
    pub csv: Option<PathBuf>,
    /// Write a timestamped Markdown report into this directory.
    pub report: Option<PathBuf>,
}

/// Handle the `scenarios` subcommand.
pub fn handle_scenarios_command(
    graph: &Graph,
    format: OutputFormat,
    args: &ScenariosCommandArgs,
) -> Result<()> {
    let suite = ScenarioSuite::run(
        graph,
        &comparator(args.cross_check),
        &DEFAULT_SCENARIOS,
        args.relation,
    )
    .map_err(friendly_error)?;

    match format {
        OutputFormat::Json => println!("{}", to_json(&suite)?),
        OutputFormat::Text => print!("{}", format_suite_text(&suite, &ColorPalette::detect())),
    }

    if let Some(path) = &args.csv {
        export_suite_csv(&suite, path)
            .with_context(|| format!("failed to write CSV to {}", path.display()))?;
        info!("wrote CSV export to {}", path.display());
        eprintln!("CSV written to {}", path.display());
    }

    if let Some(dir) = &args.report {
        let now = Local::now();
        let stamp = now.format("%Y%m%d_%H%M%S").to_string();
        let generated_at = now.format("%Y-%m-%d %H:%M:%S").to_string();
        let path = write_markdown_report(&suite, dir, &stamp, &generated_at)
            .with_context(|| format!("failed to write report into {}", dir.display()))?;
        eprintln!("Report written to {}", path.display());
    }

    Ok(())
}
