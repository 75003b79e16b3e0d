//! Compare command handler running every strategy on one query.

use anyhow::Result;

use capitals_lib::{Comparator, Graph, Relation};

use crate::commands::friendly_error;
use crate::output::{format_comparison_text, to_json, OutputFormat};
use crate::terminal::ColorPalette;

/// Arguments for the compare command.
#[derive(Debug, Clone)]
pub struct CompareCommandArgs {
    pub from: String,
    pub to: String,
    pub relation: Relation,
    /// Grade against an independent uniform-cost search.
    pub cross_check: bool,
}

/// Build the comparator selected by `--cross-check`.
pub(crate) fn comparator(cross_check: bool) -> Comparator {
    if cross_check {
        Comparator::with_cross_check()
    } else {
        Comparator::new()
    }
}

/// Handle the `compare` subcommand.
pub fn handle_compare_command(
    graph: &Graph,
    format: OutputFormat,
    args: &CompareCommandArgs,
) -> Result<()> {
    let comparison = comparator(args.cross_check)
        .compare_names(graph, &args.from, &args.to, args.relation)
        .map_err(friendly_error)?;

    match format {
        OutputFormat::Json => println!("{}", to_json(&comparison)?),
        OutputFormat::Text => print!(
            "{}",
            format_comparison_text(&comparison, &ColorPalette::detect())
        ),
    }
    Ok(())
}
