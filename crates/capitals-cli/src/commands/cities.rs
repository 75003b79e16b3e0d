//! Cities command handler listing the capitals of the loaded graph.

use anyhow::Result;

use capitals_lib::Graph;

use crate::output::{format_cities_text, to_json, CityRow, OutputFormat};
use crate::terminal::ColorPalette;

/// Handle the `cities` subcommand.
pub fn handle_cities(graph: &Graph, format: OutputFormat) -> Result<()> {
    let rows = CityRow::collect(graph);
    match format {
        OutputFormat::Json => println!("{}", to_json(&rows)?),
        OutputFormat::Text => print!("{}", format_cities_text(&rows, &ColorPalette::detect())),
    }
    Ok(())
}
