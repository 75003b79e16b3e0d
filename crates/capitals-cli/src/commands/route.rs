//! Route command handler for a single search or a best-transport query.

use anyhow::Result;

use capitals_lib::{best_transport, plan_route, Algorithm, Graph, Relation, RouteRequest};

use crate::commands::friendly_error;
use crate::output::{format_plan_text, format_transport_text, to_json, OutputFormat};
use crate::terminal::ColorPalette;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting capital.
    pub from: String,
    /// Destination capital.
    pub to: String,
    /// Search strategy.
    pub algorithm: Algorithm,
    /// Relation to search; `None` compares air and land.
    pub relation: Option<Relation>,
}

/// Handle the `route` subcommand.
///
/// With a relation, plans one route. Without one, runs the algorithm over
/// both relations and reports the cheaper.
pub fn handle_route_command(
    graph: &Graph,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let palette = ColorPalette::detect();

    let Some(relation) = args.relation else {
        let choice = best_transport(graph, args.algorithm, &args.from, &args.to)
            .map_err(friendly_error)?;
        match (format, choice) {
            (OutputFormat::Json, choice) => println!("{}", to_json(&choice)?),
            (OutputFormat::Text, Some(choice)) => {
                print!("{}", format_transport_text(&choice, &palette))
            }
            (OutputFormat::Text, None) => println!(
                "No route connects {} and {} over both air and land. Pass --relation to search one of them.",
                args.from, args.to
            ),
        }
        return Ok(());
    };

    let request = RouteRequest::new(
        args.from.as_str(),
        args.to.as_str(),
        args.algorithm,
        relation,
    );
    let plan = plan_route(graph, &request).map_err(friendly_error)?;
    match format {
        OutputFormat::Json => println!("{}", to_json(&plan)?),
        OutputFormat::Text => print!("{}", format_plan_text(&plan, &palette)),
    }
    Ok(())
}
