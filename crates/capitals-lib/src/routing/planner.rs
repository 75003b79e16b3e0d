//! Search strategies implementing the Strategy pattern.
//!
//! This module provides the `SearchAlgorithm` trait and one implementation per
//! search strategy (BFS, DFS, UCS, Greedy, A*). Callers that only know an
//! [`Algorithm`] value use [`select_algorithm`] to obtain a boxed strategy.

use crate::city::City;
use crate::graph::{Graph, Relation};
use crate::search::{
    air_distance_heuristic, search_a_star, search_bfs, search_dfs, search_greedy, search_ucs,
    HeuristicFn, SearchResult,
};

use super::Algorithm;

/// Trait for search strategies.
///
/// Implementations never mutate the graph, so one graph can be shared by
/// reference across strategies and threads.
pub trait SearchAlgorithm: Send + Sync {
    /// The algorithm identifier for this strategy.
    fn algorithm(&self) -> Algorithm;

    /// Run the search for one query.
    fn search(&self, graph: &Graph, start: &City, goal: &City, relation: Relation)
        -> SearchResult;

    /// Whether the strategy consults a heuristic.
    fn is_informed(&self) -> bool {
        false
    }

    /// Whether the strategy always returns a minimum-cost path on graphs with
    /// non-negative weights (given an admissible heuristic where one is used).
    fn guarantees_optimal(&self) -> bool {
        false
    }
}

/// Breadth-first search: fewest edges, weights ignored.
#[derive(Debug, Clone, Default)]
pub struct BfsSearch;

impl SearchAlgorithm for BfsSearch {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bfs
    }

    fn search(
        &self,
        graph: &Graph,
        start: &City,
        goal: &City,
        relation: Relation,
    ) -> SearchResult {
        search_bfs(graph, start, goal, relation)
    }
}

/// Depth-first search in neighbour order.
#[derive(Debug, Clone, Default)]
pub struct DfsSearch;

impl SearchAlgorithm for DfsSearch {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dfs
    }

    fn search(
        &self,
        graph: &Graph,
        start: &City,
        goal: &City,
        relation: Relation,
    ) -> SearchResult {
        search_dfs(graph, start, goal, relation)
    }
}

/// Uniform-cost search.
#[derive(Debug, Clone, Default)]
pub struct UcsSearch;

impl SearchAlgorithm for UcsSearch {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Ucs
    }

    fn search(
        &self,
        graph: &Graph,
        start: &City,
        goal: &City,
        relation: Relation,
    ) -> SearchResult {
        search_ucs(graph, start, goal, relation)
    }

    fn guarantees_optimal(&self) -> bool {
        true
    }
}

/// Greedy best-first search guided only by a heuristic.
#[derive(Debug, Clone)]
pub struct GreedySearch {
    heuristic: HeuristicFn,
}

impl GreedySearch {
    /// Greedy search guided by air distance to the goal.
    pub fn air_distance() -> Self {
        Self::with_heuristic(air_distance_heuristic)
    }

    pub fn with_heuristic(heuristic: HeuristicFn) -> Self {
        Self { heuristic }
    }
}

impl Default for GreedySearch {
    fn default() -> Self {
        Self::air_distance()
    }
}

impl SearchAlgorithm for GreedySearch {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Greedy
    }

    fn search(
        &self,
        graph: &Graph,
        start: &City,
        goal: &City,
        relation: Relation,
    ) -> SearchResult {
        search_greedy(graph, start, goal, relation, self.heuristic)
    }

    fn is_informed(&self) -> bool {
        true
    }
}

/// A* search.
///
/// The default heuristic is air distance even when searching the land
/// relation; road distances are never shorter than the straight line, so it
/// stays admissible.
#[derive(Debug, Clone)]
pub struct AStarSearch {
    heuristic: HeuristicFn,
}

impl AStarSearch {
    /// A* guided by air distance to the goal.
    pub fn air_distance() -> Self {
        Self::with_heuristic(air_distance_heuristic)
    }

    pub fn with_heuristic(heuristic: HeuristicFn) -> Self {
        Self { heuristic }
    }
}

impl Default for AStarSearch {
    fn default() -> Self {
        Self::air_distance()
    }
}

impl SearchAlgorithm for AStarSearch {
    fn algorithm(&self) -> Algorithm {
        Algorithm::AStar
    }

    fn search(
        &self,
        graph: &Graph,
        start: &City,
        goal: &City,
        relation: Relation,
    ) -> SearchResult {
        search_a_star(graph, start, goal, relation, self.heuristic)
    }

    fn is_informed(&self) -> bool {
        true
    }

    fn guarantees_optimal(&self) -> bool {
        true
    }
}

/// Select the strategy for a given algorithm.
pub fn select_algorithm(algorithm: Algorithm) -> Box<dyn SearchAlgorithm> {
    match algorithm {
        Algorithm::Bfs => Box::new(BfsSearch),
        Algorithm::Dfs => Box::new(DfsSearch),
        Algorithm::Ucs => Box::new(UcsSearch),
        Algorithm::Greedy => Box::new(GreedySearch::air_distance()),
        Algorithm::AStar => Box::new(AStarSearch::air_distance()),
    }
}

/// Every strategy, in canonical comparison order.
pub fn all_algorithms() -> Vec<Box<dyn SearchAlgorithm>> {
    Algorithm::ALL.into_iter().map(select_algorithm).collect()
}
