//! Output formatting for CLI results.
//!
//! Text renderers return strings so they can be unit tested; JSON output is
//! produced with `serde_json` straight from the library types.

use std::fmt::Write as _;

use clap::ValueEnum;
use serde::Serialize;

use capitals_lib::output::{optimal_label, path_label, render_comparison_table};
use capitals_lib::{Comparison, Graph, Relation, RoutePlan, ScenarioSuite, TransportChoice};

use crate::terminal::{format_km, ColorPalette};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// One line of the `cities` listing.
#[derive(Debug, Clone, Serialize)]
pub struct CityRow {
    pub name: String,
    pub air_connections: usize,
    pub land_connections: usize,
}

impl CityRow {
    pub fn collect(graph: &Graph) -> Vec<CityRow> {
        graph
            .cities()
            .map(|city| CityRow {
                name: city.name().to_string(),
                air_connections: graph.degree(city, Relation::Air),
                land_connections: graph.degree(city, Relation::Land),
            })
            .collect()
    }
}

/// Serialize any result as pretty JSON.
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

pub fn format_cities_text(rows: &[CityRow], palette: &ColorPalette) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}Capitals ({}):{}",
        palette.heading,
        rows.len(),
        palette.reset
    );
    let width = rows
        .iter()
        .map(|row| row.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Capital".len());
    let _ = writeln!(out, "{:<width$}  {:>3}  {:>4}", "Capital", "Air", "Land");
    for row in rows {
        let padding = width.saturating_sub(row.name.chars().count());
        let _ = writeln!(
            out,
            "{}{}  {:>3}  {:>4}",
            row.name,
            " ".repeat(padding),
            row.air_connections,
            row.land_connections
        );
    }
    out
}

pub fn format_plan_text(plan: &RoutePlan, palette: &ColorPalette) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}Route from {} to {} ({}, {}){}",
        palette.heading,
        plan.start,
        plan.goal,
        plan.algorithm.label(),
        plan.relation,
        palette.reset
    );

    if !plan.is_found() {
        let _ = writeln!(
            out,
            "{}No path found{} after expanding {} nodes.",
            palette.warn, palette.reset, plan.result.expanded_nodes
        );
        return out;
    }

    let _ = writeln!(out, "Path: {}", path_label(&plan.result));
    let _ = writeln!(out, "Distance: {}", format_km(plan.result.cost));
    let _ = writeln!(out, "Hops: {}", plan.hop_count());
    let _ = writeln!(
        out,
        "{}Expanded nodes: {}{}",
        palette.gray, plan.result.expanded_nodes, palette.reset
    );
    out
}

pub fn format_transport_text(choice: &TransportChoice, palette: &ColorPalette) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}Best transport from {} to {} ({}){}",
        palette.heading,
        choice.start,
        choice.goal,
        choice.algorithm.label(),
        palette.reset
    );
    for (relation, result) in [(Relation::Air, &choice.air), (Relation::Land, &choice.land)] {
        let marker = if relation == choice.best { "*" } else { " " };
        let _ = writeln!(
            out,
            "{} {:<4}  {:>9}  {}",
            marker,
            relation,
            format_km(result.cost),
            path_label(result)
        );
    }
    let _ = writeln!(out, "Recommended: {}", choice.best);
    out
}

pub fn format_comparison_text(comparison: &Comparison, palette: &ColorPalette) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}{} -> {} ({}){}",
        palette.heading, comparison.start, comparison.goal, comparison.relation, palette.reset
    );
    out.push_str(&render_comparison_table(comparison));

    match comparison.reference_cost() {
        Some(cost) => {
            let _ = writeln!(out, "Reference cost: {}", format_km(cost));
        }
        None => {
            let _ = writeln!(
                out,
                "{}No algorithm found a path.{}",
                palette.warn, palette.reset
            );
        }
    }

    for entry in comparison.entries() {
        if entry.optimal == Some(false) {
            let _ = writeln!(
                out,
                "{}{} is not optimal ({}){}",
                palette.verdict(entry.optimal),
                entry.algorithm.label(),
                optimal_label(entry.optimal),
                palette.reset
            );
        }
    }
    out
}

pub fn format_suite_text(suite: &ScenarioSuite, palette: &ColorPalette) -> String {
    let mut out = String::new();
    for scenario in suite.scenarios() {
        out.push_str(&format_comparison_text(&scenario.comparison, palette));
        out.push('\n');
    }

    let _ = writeln!(out, "{}Averages{}", palette.heading, palette.reset);
    for average in suite.averages() {
        match (average.mean_cost, average.mean_expanded) {
            (Some(cost), Some(expanded)) => {
                let _ = writeln!(
                    out,
                    "{:<7} {:>10}  {:>7.2} expanded  {}/{} optimal",
                    average.algorithm.label(),
                    format_km(cost),
                    expanded,
                    average.optimal_count,
                    average.scenarios_found
                );
            }
            _ => {
                let _ = writeln!(out, "{:<7} no paths found", average.algorithm.label());
            }
        }
    }
    out
}
