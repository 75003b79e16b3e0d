//! Route planning module for capital-to-capital searches.
//!
//! This module provides:
//! - [`Algorithm`] - Supported search strategies (BFS, DFS, UCS, Greedy, A*)
//! - [`RouteRequest`] - A query expressed with city names
//! - [`RoutePlan`] - The resolved query together with its search result
//! - [`plan_route`] - Main entry point for running one strategy
//! - [`best_transport`] - Runs one strategy over both relations and picks the cheaper
//!
//! # Strategy Pattern
//!
//! Each strategy is encapsulated in its own struct implementing
//! [`SearchAlgorithm`], so the orchestration here never matches on the
//! algorithm beyond [`select_algorithm`].
//!
//! # Example
//!
//! ```ignore
//! use capitals_lib::{plan_route, Algorithm, Relation, RouteRequest, sample_graph};
//!
//! let graph = sample_graph();
//! let request = RouteRequest::new("São Paulo", "Salvador", Algorithm::AStar, Relation::Land);
//! let plan = plan_route(&graph, &request)?;
//! println!("{} km over {} hops", plan.result.cost, plan.hop_count());
//! ```

mod planner;

pub use planner::{
    all_algorithms, select_algorithm, AStarSearch, BfsSearch, DfsSearch, GreedySearch,
    SearchAlgorithm, UcsSearch,
};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::city::City;
use crate::error::{Error, Result};
use crate::graph::{Graph, Relation};
use crate::search::SearchResult;

/// Number of suggestions offered for an unknown city name.
const MAX_SUGGESTIONS: usize = 3;

/// Supported search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Breadth-first search.
    Bfs,
    /// Depth-first search.
    Dfs,
    /// Uniform-cost search.
    Ucs,
    /// Greedy best-first search.
    Greedy,
    /// A* search.
    #[default]
    #[serde(rename = "astar")]
    AStar,
}

impl Algorithm {
    /// Canonical order used by comparisons and reports.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Ucs,
        Algorithm::Greedy,
        Algorithm::AStar,
    ];

    /// Human-readable label shown in tables.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Ucs => "UCS",
            Algorithm::Greedy => "Greedy",
            Algorithm::AStar => "A*",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Ucs => "ucs",
            Algorithm::Greedy => "greedy",
            Algorithm::AStar => "astar",
        };
        f.pad(value)
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "ucs" => Ok(Algorithm::Ucs),
            "greedy" => Ok(Algorithm::Greedy),
            "astar" | "a-star" | "a_star" | "a*" => Ok(Algorithm::AStar),
            _ => Err(Error::UnknownAlgorithm {
                value: value.to_string(),
            }),
        }
    }
}

/// High-level route request expressed with city names.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub algorithm: Algorithm,
    pub relation: Relation,
}

impl RouteRequest {
    pub fn new(
        start: impl Into<String>,
        goal: impl Into<String>,
        algorithm: Algorithm,
        relation: Relation,
    ) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm,
            relation,
        }
    }
}

/// Result of a route request with its endpoints resolved.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub algorithm: Algorithm,
    pub relation: Relation,
    pub start: City,
    pub goal: City,
    pub result: SearchResult,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.result.hop_count()
    }

    pub fn is_found(&self) -> bool {
        self.result.is_found()
    }
}

/// The same strategy run over both relations.
#[derive(Debug, Clone, Serialize)]
pub struct TransportChoice {
    pub algorithm: Algorithm,
    pub start: City,
    pub goal: City,
    pub air: SearchResult,
    pub land: SearchResult,
    /// The cheaper relation; air wins ties.
    pub best: Relation,
}

impl TransportChoice {
    pub fn best_result(&self) -> &SearchResult {
        match self.best {
            Relation::Air => &self.air,
            Relation::Land => &self.land,
        }
    }
}

/// Resolve a city name, returning an error with suggestions for unknown names.
pub fn resolve_city(graph: &Graph, name: &str) -> Result<City> {
    graph.city(name).ok_or_else(|| Error::UnknownCity {
        name: name.to_string(),
        suggestions: graph.fuzzy_city_matches(name, MAX_SUGGESTIONS),
    })
}

/// Run the requested strategy for one query.
///
/// Unknown city names are errors; a query with no connecting path is not, and
/// yields a plan whose result has an empty path.
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    let start = resolve_city(graph, &request.start)?;
    let goal = resolve_city(graph, &request.goal)?;

    let strategy = select_algorithm(request.algorithm);
    let result = strategy.search(graph, &start, &goal, request.relation);
    debug!(
        algorithm = %request.algorithm,
        relation = %request.relation,
        found = result.is_found(),
        expanded = result.expanded_nodes,
        "search finished for {} -> {}",
        start,
        goal
    );

    Ok(RoutePlan {
        algorithm: request.algorithm,
        relation: request.relation,
        start,
        goal,
        result,
    })
}

/// Run `algorithm` over the air and land relations and report the cheaper.
///
/// Returns `Ok(None)` when either relation has no path between the cities.
pub fn best_transport(
    graph: &Graph,
    algorithm: Algorithm,
    start: &str,
    goal: &str,
) -> Result<Option<TransportChoice>> {
    let start = resolve_city(graph, start)?;
    let goal = resolve_city(graph, goal)?;

    let strategy = select_algorithm(algorithm);
    let air = strategy.search(graph, &start, &goal, Relation::Air);
    let land = strategy.search(graph, &start, &goal, Relation::Land);

    if !air.is_found() || !land.is_found() {
        debug!(
            air_found = air.is_found(),
            land_found = land.is_found(),
            "best transport unavailable for {} -> {}",
            start,
            goal
        );
        return Ok(None);
    }

    let best = if air.cost <= land.cost {
        Relation::Air
    } else {
        Relation::Land
    };

    Ok(Some(TransportChoice {
        algorithm,
        start,
        goal,
        air,
        land,
        best,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::triangle_graph;

    #[test]
    fn algorithm_round_trips_through_display() {
        for algorithm in Algorithm::ALL {
            let parsed: Algorithm = algorithm.to_string().parse().unwrap();
            assert_eq!(parsed, algorithm);
        }
        assert_eq!("A*".parse::<Algorithm>().unwrap(), Algorithm::AStar);
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        let error = "dijkstra".parse::<Algorithm>().expect_err("not supported");
        assert!(error.to_string().contains("unknown algorithm 'dijkstra'"));
    }

    #[test]
    fn route_plan_hop_count() {
        let graph = triangle_graph();
        let request = RouteRequest::new("A", "C", Algorithm::Ucs, Relation::Air);
        let plan = plan_route(&graph, &request).unwrap();
        assert_eq!(plan.hop_count(), 2);
        assert_eq!(plan.start, City::new("A"));
        assert_eq!(plan.goal, City::new("C"));
    }

    #[test]
    fn unreachable_goal_is_not_an_error() {
        let graph = triangle_graph();
        let request = RouteRequest::new("A", "D", Algorithm::Bfs, Relation::Land);
        let plan = plan_route(&graph, &request).expect("missing path is a value");
        assert!(!plan.is_found());
        assert_eq!(plan.hop_count(), 0);
    }

    #[test]
    fn best_transport_prefers_air_on_ties() {
        let mut graph = Graph::new();
        graph.add_air_edge("A", "B", 10.0);
        graph.add_land_edge("A", "B", 10.0);
        let choice = best_transport(&graph, Algorithm::Ucs, "A", "B")
            .unwrap()
            .expect("both relations connect A and B");
        assert_eq!(choice.best, Relation::Air);
    }
}
