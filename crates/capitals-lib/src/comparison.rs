//! Cross-algorithm comparison and optimality grading.
//!
//! A [`Comparator`] runs every strategy against the same query and grades each
//! result against a reference cost. By default the reference is the cheapest
//! cost any of the five strategies found, which is only relatively best: an
//! error shared by all five would go unnoticed. The
//! [`OptimalityReference::UniformCostCrossCheck`] mode runs an independent
//! uniform-cost search and grades against its cost instead.

use serde::Serialize;
use tracing::debug;

use crate::city::City;
use crate::error::{Error, Result};
use crate::graph::{Graph, Relation};
use crate::routing::{all_algorithms, resolve_city, Algorithm, SearchAlgorithm};
use crate::search::{search_ucs, SearchResult};

/// Scenarios analysed when no explicit list is given.
pub const DEFAULT_SCENARIOS: [(&str, &str); 3] = [
    ("São Paulo", "Rio de Janeiro"),
    ("Porto Alegre", "Manaus"),
    ("Brasília", "Salvador"),
];

/// Source of the cost that results are graded against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OptimalityReference {
    /// Cheapest cost found by any of the compared strategies.
    #[default]
    BestOfRun,
    /// Cost found by a separate uniform-cost search.
    UniformCostCrossCheck,
}

/// One strategy's outcome within a comparison.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonEntry {
    pub algorithm: Algorithm,
    pub result: SearchResult,
    /// `None` when this strategy found no path or nothing found a path.
    pub optimal: Option<bool>,
}

/// Results of every strategy for one (start, goal, relation) query.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub start: City,
    pub goal: City,
    pub relation: Relation,
    pub reference: OptimalityReference,
    reference_cost: Option<f64>,
    entries: Vec<ComparisonEntry>,
}

impl Comparison {
    /// Entries in the order the strategies were run.
    pub fn entries(&self) -> &[ComparisonEntry] {
        &self.entries
    }

    pub fn get(&self, algorithm: Algorithm) -> Option<&ComparisonEntry> {
        self.entries
            .iter()
            .find(|entry| entry.algorithm == algorithm)
    }

    pub fn is_optimal(&self, algorithm: Algorithm) -> Option<bool> {
        self.get(algorithm).and_then(|entry| entry.optimal)
    }

    /// Cheapest cost among strategies that found a path.
    pub fn best_cost(&self) -> Option<f64> {
        self.entries
            .iter()
            .filter(|entry| entry.result.is_found())
            .map(|entry| entry.result.cost)
            .min_by(f64::total_cmp)
    }

    /// Cost the entries were graded against.
    pub fn reference_cost(&self) -> Option<f64> {
        self.reference_cost
    }

    pub fn any_found(&self) -> bool {
        self.entries.iter().any(|entry| entry.result.is_found())
    }

    /// Strategies whose path cost equals the reference cost.
    pub fn cheapest_algorithms(&self) -> Vec<Algorithm> {
        self.entries
            .iter()
            .filter(|entry| entry.optimal == Some(true))
            .map(|entry| entry.algorithm)
            .collect()
    }

    /// Strategies that found a path with the fewest expanded nodes.
    pub fn most_efficient_algorithms(&self) -> Vec<Algorithm> {
        let found = || self.entries.iter().filter(|entry| entry.result.is_found());
        let Some(fewest) = found().map(|entry| entry.result.expanded_nodes).min() else {
            return Vec::new();
        };
        found()
            .filter(|entry| entry.result.expanded_nodes == fewest)
            .map(|entry| entry.algorithm)
            .collect()
    }

    /// Strategies that found a path costlier than the reference.
    pub fn suboptimal_algorithms(&self) -> Vec<Algorithm> {
        self.entries
            .iter()
            .filter(|entry| entry.optimal == Some(false))
            .map(|entry| entry.algorithm)
            .collect()
    }

    /// Whether every strategy that found a path found an optimal one.
    pub fn all_optimal(&self) -> bool {
        self.suboptimal_algorithms().is_empty()
    }
}

/// Runs a set of strategies against the same query.
pub struct Comparator {
    reference: OptimalityReference,
    strategies: Vec<Box<dyn SearchAlgorithm>>,
}

impl Comparator {
    /// Compare all five strategies against the best cost among them.
    pub fn new() -> Self {
        Self::with_reference(OptimalityReference::BestOfRun)
    }

    /// Compare all five strategies against an independent uniform-cost search.
    pub fn with_cross_check() -> Self {
        Self::with_reference(OptimalityReference::UniformCostCrossCheck)
    }

    pub fn with_reference(reference: OptimalityReference) -> Self {
        Self {
            reference,
            strategies: all_algorithms(),
        }
    }

    /// Replace the compared strategies.
    pub fn with_strategies(mut self, strategies: Vec<Box<dyn SearchAlgorithm>>) -> Self {
        self.strategies = strategies;
        self
    }

    pub fn reference(&self) -> OptimalityReference {
        self.reference
    }

    pub fn compare(
        &self,
        graph: &Graph,
        start: &City,
        goal: &City,
        relation: Relation,
    ) -> Comparison {
        let results: Vec<(Algorithm, SearchResult)> = self
            .strategies
            .iter()
            .map(|strategy| {
                (
                    strategy.algorithm(),
                    strategy.search(graph, start, goal, relation),
                )
            })
            .collect();

        let reference_cost = match self.reference {
            OptimalityReference::BestOfRun => results
                .iter()
                .filter(|(_, result)| result.is_found())
                .map(|(_, result)| result.cost)
                .min_by(f64::total_cmp),
            OptimalityReference::UniformCostCrossCheck => {
                let truth = search_ucs(graph, start, goal, relation);
                truth.is_found().then_some(truth.cost)
            }
        };

        let entries: Vec<ComparisonEntry> = results
            .into_iter()
            .map(|(algorithm, result)| {
                let optimal = result.is_optimal(reference_cost);
                ComparisonEntry {
                    algorithm,
                    result,
                    optimal,
                }
            })
            .collect();

        debug!(
            relation = %relation,
            reference = ?self.reference,
            reference_cost = ?reference_cost,
            "compared {} strategies for {} -> {}",
            entries.len(),
            start,
            goal
        );

        Comparison {
            start: start.clone(),
            goal: goal.clone(),
            relation,
            reference: self.reference,
            reference_cost,
            entries,
        }
    }

    /// Resolve city names and compare.
    pub fn compare_names(
        &self,
        graph: &Graph,
        start: &str,
        goal: &str,
        relation: Relation,
    ) -> Result<Comparison> {
        let start = resolve_city(graph, start)?;
        let goal = resolve_city(graph, goal)?;
        Ok(self.compare(graph, &start, &goal, relation))
    }
}

impl Default for Comparator {
    fn default() -> Self {
        Self::new()
    }
}

/// A named comparison.
#[derive(Debug, Clone, Serialize)]
pub struct Scenario {
    pub name: String,
    pub comparison: Comparison,
}

/// Per-strategy averages over the scenarios where it found a path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmAverage {
    pub algorithm: Algorithm,
    pub scenarios_found: usize,
    pub optimal_count: usize,
    pub mean_cost: Option<f64>,
    pub mean_expanded: Option<f64>,
}

impl AlgorithmAverage {
    /// Optimal in every scenario where it found a path.
    pub fn always_optimal(&self) -> bool {
        self.scenarios_found > 0 && self.optimal_count == self.scenarios_found
    }
}

/// Ordered collection of scenarios sharing the same set of strategies.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScenarioSuite {
    scenarios: Vec<Scenario>,
}

impl ScenarioSuite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `comparator` for every (start, goal) name pair.
    pub fn run(
        graph: &Graph,
        comparator: &Comparator,
        pairs: &[(&str, &str)],
        relation: Relation,
    ) -> Result<Self> {
        let mut suite = Self::new();
        for (start, goal) in pairs {
            let comparison = comparator.compare_names(graph, start, goal, relation)?;
            suite.add(comparison);
        }
        Ok(suite)
    }

    /// Add a comparison named after its endpoints.
    pub fn add(&mut self, comparison: Comparison) {
        let name = format!("{} -> {}", comparison.start, comparison.goal);
        self.push(name, comparison);
    }

    pub fn push(&mut self, name: impl Into<String>, comparison: Comparison) {
        self.scenarios.push(Scenario {
            name: name.into(),
            comparison,
        });
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Strategies in the order of the first scenario.
    pub fn algorithms(&self) -> Vec<Algorithm> {
        self.scenarios
            .first()
            .map(|scenario| {
                scenario
                    .comparison
                    .entries()
                    .iter()
                    .map(|entry| entry.algorithm)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn averages(&self) -> Vec<AlgorithmAverage> {
        self.algorithms()
            .into_iter()
            .map(|algorithm| self.average_for(algorithm))
            .collect()
    }

    /// The strategy that stayed optimal everywhere it found a path with the
    /// fewest mean expansions. Earlier strategies win ties.
    pub fn recommended_algorithm(&self) -> Result<Option<Algorithm>> {
        if self.is_empty() {
            return Err(Error::EmptyScenarioSuite);
        }

        let mut best: Option<(Algorithm, f64)> = None;
        for average in self.averages() {
            let Some(mean_expanded) = average.mean_expanded else {
                continue;
            };
            if !average.always_optimal() {
                continue;
            }
            let improves = match best {
                Some((_, current)) => mean_expanded < current,
                None => true,
            };
            if improves {
                best = Some((average.algorithm, mean_expanded));
            }
        }
        Ok(best.map(|(algorithm, _)| algorithm))
    }

    fn average_for(&self, algorithm: Algorithm) -> AlgorithmAverage {
        let mut found = 0usize;
        let mut optimal = 0usize;
        let mut total_cost = 0.0;
        let mut total_expanded = 0usize;

        for scenario in &self.scenarios {
            let Some(entry) = scenario.comparison.get(algorithm) else {
                continue;
            };
            if !entry.result.is_found() {
                continue;
            }
            found += 1;
            total_cost += entry.result.cost;
            total_expanded += entry.result.expanded_nodes;
            if entry.optimal == Some(true) {
                optimal += 1;
            }
        }

        let (mean_cost, mean_expanded) = if found > 0 {
            (
                Some(total_cost / found as f64),
                Some(total_expanded as f64 / found as f64),
            )
        } else {
            (None, None)
        };

        AlgorithmAverage {
            algorithm,
            scenarios_found: found,
            optimal_count: optimal,
            mean_cost,
            mean_expanded,
        }
    }
}
