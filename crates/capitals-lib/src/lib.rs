//! Brazilian capitals route search library.
//!
//! This crate loads air and land distance tables between state capitals into
//! a [`Graph`], runs the five classic search strategies over it (BFS, DFS,
//! UCS, Greedy best-first and A*), and compares their results for
//! optimality and effort. The CLI should only depend on the functions
//! exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod city;
pub mod comparison;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod output;
pub mod routing;
pub mod search;

#[cfg(test)]
mod test_helpers;

pub use city::{format_path, City};
pub use comparison::{
    AlgorithmAverage, Comparator, Comparison, ComparisonEntry, OptimalityReference, Scenario,
    ScenarioSuite, DEFAULT_SCENARIOS,
};
pub use dataset::{
    graph_from_csv_str, graph_from_json_str, load_dataset, load_graph, load_graph_from_csv,
    load_graph_from_json, resolve_dataset_source, sample_graph, Dataset, DatasetSource,
    DATA_PATH_ENV, DEFAULT_DATASET_PATH,
};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Relation};
pub use routing::{
    all_algorithms, best_transport, plan_route, resolve_city, select_algorithm, AStarSearch,
    Algorithm, BfsSearch, DfsSearch, GreedySearch, RoutePlan, RouteRequest, SearchAlgorithm,
    TransportChoice, UcsSearch,
};
pub use search::{
    air_distance_heuristic, search_a_star, search_bfs, search_dfs, search_greedy, search_ucs,
    HeuristicFn, SearchResult,
};
