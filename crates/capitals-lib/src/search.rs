use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet, VecDeque};

use serde::Serialize;

use crate::city::City;
use crate::graph::{Edge, Graph, Relation};

/// Relative tolerance used when comparing accumulated path costs.
const COST_TOLERANCE: f64 = 1e-9;

/// Estimate of the remaining cost from a city to the goal.
pub type HeuristicFn = fn(&Graph, &City, &City) -> f64;

/// Straight-line air distance from `city` to `goal`.
///
/// Greedy and A* consult the air relation with this heuristic regardless of
/// the relation being searched. A pair without an air edge, including the goal
/// itself, yields `f64::INFINITY`.
pub fn air_distance_heuristic(graph: &Graph, city: &City, goal: &City) -> f64 {
    graph.weight(city, goal, Relation::Air)
}

/// Outcome of a single search.
///
/// When no path exists `path` is empty, `cost` is zero and `expanded_nodes`
/// still reports how much work the search did before its frontier ran dry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub path: Vec<City>,
    pub cost: f64,
    pub expanded_nodes: usize,
}

impl SearchResult {
    pub fn found(path: Vec<City>, cost: f64, expanded_nodes: usize) -> Self {
        Self {
            path,
            cost,
            expanded_nodes,
        }
    }

    pub fn not_found(expanded_nodes: usize) -> Self {
        Self {
            path: Vec::new(),
            cost: 0.0,
            expanded_nodes,
        }
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges in the path.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Whether this result matches the reference optimum.
    ///
    /// `None` when either this search found no path or there is no reference
    /// cost to grade against.
    pub fn is_optimal(&self, reference_cost: Option<f64>) -> Option<bool> {
        if !self.is_found() {
            return None;
        }
        reference_cost.map(|reference| costs_match(self.cost, reference))
    }
}

/// Compare two path costs with a relative tolerance.
pub fn costs_match(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= COST_TOLERANCE * scale
}

/// Breadth-first search.
///
/// Cities are marked visited when enqueued, so the first path to reach the
/// goal has the fewest edges. Weights are accumulated but never consulted.
pub fn search_bfs(graph: &Graph, start: &City, goal: &City, relation: Relation) -> SearchResult {
    if !endpoints_known(graph, start, goal) {
        return SearchResult::not_found(0);
    }

    let mut queue = VecDeque::new();
    let mut visited: HashSet<City> = HashSet::new();
    let mut expanded = 0;

    visited.insert(start.clone());
    queue.push_back(PathState::origin(start));

    while let Some(state) = queue.pop_front() {
        expanded += 1;
        if state.city == *goal {
            return state.into_result(expanded);
        }

        for edge in graph.neighbours(&state.city, relation) {
            if visited.insert(edge.target.clone()) {
                queue.push_back(state.extend(edge));
            }
        }
    }

    SearchResult::not_found(expanded)
}

/// Depth-first search.
///
/// Neighbours are pushed in reverse so the first neighbour in
/// [`Graph::neighbours`] order is explored first. Cities are marked visited
/// when pushed.
pub fn search_dfs(graph: &Graph, start: &City, goal: &City, relation: Relation) -> SearchResult {
    if !endpoints_known(graph, start, goal) {
        return SearchResult::not_found(0);
    }

    let mut stack = vec![PathState::origin(start)];
    let mut visited: HashSet<City> = HashSet::new();
    let mut expanded = 0;

    visited.insert(start.clone());

    while let Some(state) = stack.pop() {
        expanded += 1;
        if state.city == *goal {
            return state.into_result(expanded);
        }

        for edge in graph.neighbours(&state.city, relation).iter().rev() {
            if visited.insert(edge.target.clone()) {
                stack.push(state.extend(edge));
            }
        }
    }

    SearchResult::not_found(expanded)
}

/// Uniform-cost search, ordered by accumulated path cost.
///
/// Returns a minimum-cost path for non-negative weights.
pub fn search_ucs(graph: &Graph, start: &City, goal: &City, relation: Relation) -> SearchResult {
    best_first(graph, start, goal, relation, |_, cost| cost)
}

/// Greedy best-first search, ordered solely by `heuristic`.
///
/// The path cost is tracked for the result but never influences ordering, so
/// the returned path is not necessarily the cheapest.
pub fn search_greedy(
    graph: &Graph,
    start: &City,
    goal: &City,
    relation: Relation,
    heuristic: HeuristicFn,
) -> SearchResult {
    best_first(graph, start, goal, relation, |city, _| {
        heuristic(graph, city, goal)
    })
}

/// A* search, ordered by `cost + heuristic`.
///
/// Optimal when the heuristic never overestimates the remaining cost, which
/// holds for air distance on both relations as long as road distances are
/// never shorter than the straight line.
pub fn search_a_star(
    graph: &Graph,
    start: &City,
    goal: &City,
    relation: Relation,
    heuristic: HeuristicFn,
) -> SearchResult {
    best_first(graph, start, goal, relation, |city, cost| {
        cost + heuristic(graph, city, goal)
    })
}

/// Shared driver for the priority-ordered strategies.
///
/// Stale frontier entries are left in the heap and discarded when popped
/// (lazy deletion); only entries for cities not yet closed count as expanded.
fn best_first<F>(
    graph: &Graph,
    start: &City,
    goal: &City,
    relation: Relation,
    priority: F,
) -> SearchResult
where
    F: Fn(&City, f64) -> f64,
{
    if !endpoints_known(graph, start, goal) {
        return SearchResult::not_found(0);
    }

    let mut frontier = BinaryHeap::new();
    let mut closed: HashSet<City> = HashSet::new();
    let mut expanded = 0;

    frontier.push(QueueEntry::new(priority(start, 0.0), PathState::origin(start)));

    while let Some(entry) = frontier.pop() {
        let state = entry.state;
        if !closed.insert(state.city.clone()) {
            continue;
        }

        expanded += 1;
        if state.city == *goal {
            return state.into_result(expanded);
        }

        for edge in graph.neighbours(&state.city, relation) {
            if closed.contains(&edge.target) {
                continue;
            }
            let next = state.extend(edge);
            let key = priority(&next.city, next.cost);
            frontier.push(QueueEntry::new(key, next));
        }
    }

    SearchResult::not_found(expanded)
}

fn endpoints_known(graph: &Graph, start: &City, goal: &City) -> bool {
    if graph.contains(start) && graph.contains(goal) {
        return true;
    }
    tracing::warn!(start = %start, goal = %goal, "search endpoint missing from graph");
    false
}

/// Frontier payload: the city reached, the full path to it and its cost.
///
/// Every entry owns its own path so results can outlive the search.
#[derive(Debug, Clone)]
struct PathState {
    city: City,
    path: Vec<City>,
    cost: f64,
}

impl PathState {
    fn origin(city: &City) -> Self {
        Self {
            city: city.clone(),
            path: vec![city.clone()],
            cost: 0.0,
        }
    }

    fn extend(&self, edge: &Edge) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(edge.target.clone());
        Self {
            city: edge.target.clone(),
            path,
            cost: self.cost + edge.distance,
        }
    }

    fn into_result(self, expanded: usize) -> SearchResult {
        SearchResult::found(self.path, self.cost, expanded)
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Debug)]
struct QueueEntry {
    key: FloatOrd,
    cost: FloatOrd,
    state: PathState,
}

impl QueueEntry {
    fn new(key: f64, state: PathState) -> Self {
        Self {
            key: FloatOrd(key),
            cost: FloatOrd(state.cost),
            state,
        }
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by key, then by
        // accumulated cost, then by city name.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.cost.cmp(&self.cost))
            .then_with(|| other.state.city.cmp(&self.state.city))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
