//! Rendering comparisons as text tables, CSV exports and Markdown reports.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::city::format_path;
use crate::comparison::{Comparison, ScenarioSuite};
use crate::error::{Error, Result};
use crate::routing::Algorithm;
use crate::search::SearchResult;

const NOT_FOUND: &str = "not found";

/// Label for a tri-state optimality flag.
pub fn optimal_label(optimal: Option<bool>) -> &'static str {
    match optimal {
        Some(true) => "yes",
        Some(false) => "no",
        None => "N/A",
    }
}

/// Format a distance in kilometres, dropping a zero fractional part.
pub fn format_distance(km: f64) -> String {
    if km.fract() == 0.0 {
        format!("{:.0} km", km)
    } else {
        format!("{:.1} km", km)
    }
}

/// Path joined with arrows, or "not found" for an empty result.
pub fn path_label(result: &SearchResult) -> String {
    if result.is_found() {
        format_path(&result.path)
    } else {
        NOT_FOUND.to_string()
    }
}

/// Render a fixed-width table with one row per strategy.
pub fn render_comparison_table(comparison: &Comparison) -> String {
    let rows: Vec<[String; 5]> = comparison
        .entries()
        .iter()
        .map(|entry| {
            let distance = if entry.result.is_found() {
                format_distance(entry.result.cost)
            } else {
                "-".to_string()
            };
            [
                entry.algorithm.label().to_string(),
                path_label(&entry.result),
                distance,
                entry.result.expanded_nodes.to_string(),
                optimal_label(entry.optimal).to_string(),
            ]
        })
        .collect();

    let headers = ["Algorithm", "Path", "Distance", "Expanded", "Optimal"];
    let mut widths = headers.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &headers.map(String::from), &widths);
    let rule: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    let _ = writeln!(out, "{}", "-".repeat(rule));
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let mut line = String::new();
    for (index, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if index > 0 {
            line.push_str("  ");
        }
        let padding = width.saturating_sub(cell.chars().count());
        line.push_str(cell);
        line.push_str(&" ".repeat(padding));
    }
    let _ = writeln!(out, "{}", line.trim_end());
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    scenario: &'a str,
    algorithm: &'static str,
    path: String,
    distance_km: f64,
    expanded_nodes: usize,
    optimal: &'static str,
}

/// Write one CSV row per (scenario, strategy).
pub fn write_suite_csv<W: io::Write>(suite: &ScenarioSuite, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for scenario in suite.scenarios() {
        for entry in scenario.comparison.entries() {
            csv_writer.serialize(CsvRow {
                scenario: &scenario.name,
                algorithm: entry.algorithm.label(),
                path: path_label(&entry.result),
                distance_km: entry.result.cost,
                expanded_nodes: entry.result.expanded_nodes,
                optimal: optimal_label(entry.optimal),
            })?;
        }
    }
    csv_writer.flush()?;
    Ok(())
}

/// Export a suite to a CSV file.
pub fn export_suite_csv(suite: &ScenarioSuite, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = fs::File::create(path)?;
    write_suite_csv(suite, file)
}

fn join_labels(algorithms: &[Algorithm]) -> String {
    let labels: Vec<&str> = algorithms.iter().map(|algorithm| algorithm.label()).collect();
    match labels.as_slice() {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

/// Render a Markdown report for a scenario suite.
///
/// `generated_at` is embedded verbatim so callers control the clock.
pub fn render_markdown_report(suite: &ScenarioSuite, generated_at: &str) -> Result<String> {
    let recommended = suite.recommended_algorithm()?;
    let mut out = String::new();

    let _ = writeln!(out, "# Search Algorithm Comparison Report\n");
    let _ = writeln!(out, "Generated: {}\n", generated_at);
    let _ = writeln!(out, "## Algorithms\n");
    for algorithm in suite.algorithms() {
        let _ = writeln!(out, "- {}", algorithm.label());
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "## Scenarios\n");
    for (index, scenario) in suite.scenarios().iter().enumerate() {
        let comparison = &scenario.comparison;
        let _ = writeln!(
            out,
            "### Scenario {}: {} ({})\n",
            index + 1,
            scenario.name,
            comparison.relation
        );
        let _ = writeln!(
            out,
            "| Algorithm | Path | Distance (km) | Expanded Nodes | Optimal |"
        );
        let _ = writeln!(out, "|---|---|---|---|---|");
        for entry in comparison.entries() {
            let _ = writeln!(
                out,
                "| {} | {} | {} | {} | {} |",
                entry.algorithm.label(),
                path_label(&entry.result),
                entry.result.cost,
                entry.result.expanded_nodes,
                optimal_label(entry.optimal)
            );
        }
        let _ = writeln!(out);
        write_scenario_analysis(&mut out, comparison);
    }

    let _ = writeln!(out, "## Averages\n");
    let _ = writeln!(
        out,
        "| Algorithm | Mean Distance (km) | Mean Expanded Nodes | Scenarios Found |"
    );
    let _ = writeln!(out, "|---|---|---|---|");
    for average in suite.averages() {
        let (cost, expanded) = match (average.mean_cost, average.mean_expanded) {
            (Some(cost), Some(expanded)) => (format!("{:.2}", cost), format!("{:.2}", expanded)),
            _ => ("N/A".to_string(), "N/A".to_string()),
        };
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} |",
            average.algorithm.label(),
            cost,
            expanded,
            average.scenarios_found
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "## Conclusion\n");
    match recommended {
        Some(algorithm) => {
            let _ = writeln!(
                out,
                "{} expanded the fewest nodes on average while staying optimal in every scenario where it found a path.\n",
                algorithm.label()
            );
        }
        None => {
            let _ = writeln!(
                out,
                "No algorithm stayed optimal in every scenario where it found a path.\n"
            );
        }
    }
    let any_suboptimal = suite
        .scenarios()
        .iter()
        .any(|scenario| !scenario.comparison.all_optimal());
    if any_suboptimal {
        let _ = writeln!(
            out,
            "Not every algorithm returned an optimal route. DFS and Greedy carry no optimality guarantee, and BFS only minimises the number of hops; UCS and A* (with an admissible heuristic) always return minimum-cost routes."
        );
    }

    Ok(out)
}

fn write_scenario_analysis(out: &mut String, comparison: &Comparison) {
    let cheapest = comparison.cheapest_algorithms();
    match comparison.reference_cost() {
        Some(cost) if !cheapest.is_empty() => {
            let _ = writeln!(
                out,
                "Shortest path: {}, found by {}.\n",
                format_distance(cost),
                join_labels(&cheapest)
            );
        }
        _ => {
            let _ = writeln!(out, "No algorithm found a valid path.\n");
            return;
        }
    }

    let efficient = comparison.most_efficient_algorithms();
    if let Some(first) = efficient.first().and_then(|algorithm| comparison.get(*algorithm)) {
        let _ = writeln!(
            out,
            "Most efficient by expanded nodes: {} ({} nodes).\n",
            join_labels(&efficient),
            first.result.expanded_nodes
        );
    }

    let suboptimal = comparison.suboptimal_algorithms();
    if suboptimal.is_empty() {
        let _ = writeln!(out, "Every algorithm that found a path found an optimal one.\n");
    } else {
        for algorithm in suboptimal {
            let _ = writeln!(out, "- {} did not find an optimal path.", algorithm.label());
        }
        let _ = writeln!(out);
    }
}

/// Write a Markdown report as `report_<stamp>.md` inside `dir`.
pub fn write_markdown_report(
    suite: &ScenarioSuite,
    dir: &Path,
    stamp: &str,
    generated_at: &str,
) -> Result<PathBuf> {
    if suite.is_empty() {
        return Err(Error::EmptyScenarioSuite);
    }
    let report = render_markdown_report(suite, generated_at)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("report_{}.md", stamp));
    fs::write(&path, report)?;
    Ok(path)
}
