use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use capitals_cli::commands::cities::handle_cities;
use capitals_cli::commands::compare::{handle_compare_command, CompareCommandArgs};
use capitals_cli::commands::route::{handle_route_command, RouteCommandArgs};
use capitals_cli::commands::scenarios::{handle_scenarios_command, ScenariosCommandArgs};
use capitals_cli::output::OutputFormat;
use capitals_lib::{load_dataset, sample_graph, Algorithm, Dataset, DatasetSource, Relation};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Compare search algorithms on routes between Brazilian state capitals"
)]
struct Cli {
    /// Distance dataset (.json or .csv). Falls back to CAPITALS_DATA_PATH,
    /// then data/distances.json, then the built-in sample.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Use the built-in ten-capital sample graph.
    #[arg(long, global = true, conflicts_with = "data")]
    sample: bool,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the capitals in the loaded dataset.
    Cities,
    /// Search one route, or pick the cheaper relation when --relation is omitted.
    Route {
        /// Starting capital.
        #[arg(long = "from")]
        from: String,
        /// Destination capital.
        #[arg(long = "to")]
        to: String,
        /// Search strategy: bfs, dfs, ucs, greedy or astar.
        #[arg(long, default_value = "astar")]
        algorithm: Algorithm,
        /// Relation to search: air or land.
        #[arg(long)]
        relation: Option<Relation>,
    },
    /// Run all five strategies on one query and grade their results.
    Compare {
        #[arg(long = "from")]
        from: String,
        #[arg(long = "to")]
        to: String,
        #[arg(long, default_value = "air")]
        relation: Relation,
        /// Grade against an independent uniform-cost search.
        #[arg(long)]
        cross_check: bool,
    },
    /// Run the default scenario suite.
    Scenarios {
        #[arg(long, default_value = "air")]
        relation: Relation,
        #[arg(long)]
        cross_check: bool,
        /// Export the results as CSV.
        #[arg(long, value_name = "FILE")]
        csv: Option<PathBuf>,
        /// Write a timestamped Markdown report into this directory.
        #[arg(long, value_name = "DIR")]
        report: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let dataset = load(&cli)?;
    info!(
        source = %dataset.source,
        cities = dataset.graph.len(),
        "dataset ready"
    );
    let graph = &dataset.graph;

    match cli.command {
        Command::Cities => handle_cities(graph, cli.format),
        Command::Route {
            from,
            to,
            algorithm,
            relation,
        } => handle_route_command(
            graph,
            cli.format,
            &RouteCommandArgs {
                from,
                to,
                algorithm,
                relation,
            },
        ),
        Command::Compare {
            from,
            to,
            relation,
            cross_check,
        } => handle_compare_command(
            graph,
            cli.format,
            &CompareCommandArgs {
                from,
                to,
                relation,
                cross_check,
            },
        ),
        Command::Scenarios {
            relation,
            cross_check,
            csv,
            report,
        } => handle_scenarios_command(
            graph,
            cli.format,
            &ScenariosCommandArgs {
                relation,
                cross_check,
                csv,
                report,
            },
        ),
    }
}

fn load(cli: &Cli) -> Result<Dataset> {
    if cli.sample {
        return Ok(Dataset {
            graph: sample_graph(),
            source: DatasetSource::Sample,
        });
    }
    load_dataset(cli.data.as_deref()).context("failed to load the distance dataset")
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
