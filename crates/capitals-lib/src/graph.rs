use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::city::City;
use crate::error::Error;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const FUZZY_MATCH_THRESHOLD: f64 = 0.8;

/// The two parallel weighted edge sets defined over the same cities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// Straight-line flight distance.
    Air,
    /// Road distance.
    Land,
}

impl Relation {
    pub const ALL: [Relation; 2] = [Relation::Air, Relation::Land];
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Relation::Air => "air",
            Relation::Land => "land",
        };
        f.pad(value)
    }
}

impl FromStr for Relation {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "air" => Ok(Relation::Air),
            "land" => Ok(Relation::Land),
            _ => Err(Error::UnknownRelation {
                value: value.to_string(),
            }),
        }
    }
}

/// Edge within one relation of the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: City,
    pub distance: f64,
}

/// Cities connected by an air relation and a land relation.
///
/// Both relations are symmetric: inserting `a -> b` also inserts `b -> a`
/// with the same weight. Neighbour lists keep insertion order, and
/// overwriting a weight keeps the edge in its original position, so
/// [`Graph::neighbours`] is stable for an unmodified graph.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    cities: BTreeSet<City>,
    air: HashMap<City, Vec<Edge>>,
    land: HashMap<City, Vec<Edge>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a city. Adding an existing city is a no-op.
    pub fn add_city(&mut self, city: impl Into<City>) {
        self.cities.insert(city.into());
    }

    pub fn add_air_edge(&mut self, a: impl Into<City>, b: impl Into<City>, distance: f64) {
        self.add_edge(Relation::Air, a, b, distance);
    }

    pub fn add_land_edge(&mut self, a: impl Into<City>, b: impl Into<City>, distance: f64) {
        self.add_edge(Relation::Land, a, b, distance);
    }

    /// Insert a symmetric edge, registering both endpoints and replacing any
    /// previous weight for the pair in that relation.
    pub fn add_edge(
        &mut self,
        relation: Relation,
        a: impl Into<City>,
        b: impl Into<City>,
        distance: f64,
    ) {
        let a = a.into();
        let b = b.into();
        self.cities.insert(a.clone());
        self.cities.insert(b.clone());

        let adjacency = self.adjacency_mut(relation);
        upsert_edge(adjacency, &a, &b, distance);
        upsert_edge(adjacency, &b, &a, distance);
    }

    /// Return the neighbours of `city` in the given relation.
    pub fn neighbours(&self, city: &City, relation: Relation) -> &[Edge] {
        self.adjacency(relation)
            .get(city)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Weight of the direct edge between `a` and `b`, or `f64::INFINITY` when
    /// the relation has no such edge.
    pub fn weight(&self, a: &City, b: &City, relation: Relation) -> f64 {
        self.neighbours(a, relation)
            .iter()
            .find(|edge| edge.target == *b)
            .map(|edge| edge.distance)
            .unwrap_or(f64::INFINITY)
    }

    pub fn contains(&self, city: &City) -> bool {
        self.cities.contains(city)
    }

    /// Cities in name order.
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Number of undirected edges in the relation.
    pub fn edge_count(&self, relation: Relation) -> usize {
        self.adjacency(relation)
            .iter()
            .map(|(origin, edges)| {
                edges
                    .iter()
                    .filter(|edge| *origin <= edge.target)
                    .count()
            })
            .sum()
    }

    /// Number of neighbours of `city` in the relation.
    pub fn degree(&self, city: &City, relation: Relation) -> usize {
        self.neighbours(city, relation).len()
    }

    /// Resolve a city by name, falling back to a case-insensitive match.
    pub fn city(&self, name: &str) -> Option<City> {
        if let Some(city) = self.cities.get(name) {
            return Some(city.clone());
        }

        let wanted = name.trim().to_lowercase();
        self.cities
            .iter()
            .find(|city| city.name().to_lowercase() == wanted)
            .cloned()
    }

    /// Suggest up to `limit` city names similar to `name`, best match first.
    pub fn fuzzy_city_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let wanted = name.trim().to_lowercase();
        let mut scored: Vec<(f64, &City)> = self
            .cities
            .iter()
            .map(|city| {
                let score = strsim::jaro_winkler(&wanted, &city.name().to_lowercase());
                (score, city)
            })
            .filter(|(score, _)| *score >= FUZZY_MATCH_THRESHOLD)
            .collect();

        scored.sort_by(|(score_a, city_a), (score_b, city_b)| {
            score_b
                .partial_cmp(score_a)
                .unwrap_or(Ordering::Equal)
                .then_with(|| city_a.cmp(city_b))
        });

        scored
            .into_iter()
            .take(limit)
            .map(|(_, city)| city.name().to_string())
            .collect()
    }

    fn adjacency(&self, relation: Relation) -> &HashMap<City, Vec<Edge>> {
        match relation {
            Relation::Air => &self.air,
            Relation::Land => &self.land,
        }
    }

    fn adjacency_mut(&mut self, relation: Relation) -> &mut HashMap<City, Vec<Edge>> {
        match relation {
            Relation::Air => &mut self.air,
            Relation::Land => &mut self.land,
        }
    }
}

fn upsert_edge(adjacency: &mut HashMap<City, Vec<Edge>>, from: &City, to: &City, distance: f64) {
    let edges = adjacency.entry(from.clone()).or_default();
    match edges.iter_mut().find(|edge| edge.target == *to) {
        Some(existing) => existing.distance = distance,
        None => edges.push(Edge {
            target: to.clone(),
            distance,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relation_parses_case_insensitively() {
        assert_eq!("AIR".parse::<Relation>().unwrap(), Relation::Air);
        assert_eq!(" land ".parse::<Relation>().unwrap(), Relation::Land);
    }

    #[test]
    fn unknown_relation_fails_fast() {
        let error = "sea".parse::<Relation>().expect_err("sea is not a relation");
        assert!(matches!(error, Error::UnknownRelation { ref value } if value == "sea"));
    }

    #[test]
    fn self_loop_is_stored_once() {
        let mut graph = Graph::new();
        graph.add_air_edge("A", "A", 0.0);
        let a = City::new("A");
        assert_eq!(graph.neighbours(&a, Relation::Air).len(), 1);
        assert_eq!(graph.weight(&a, &a, Relation::Air), 0.0);
        assert_eq!(graph.edge_count(Relation::Air), 1);
    }

    #[test]
    fn overwrite_keeps_neighbour_position() {
        let mut graph = Graph::new();
        graph.add_land_edge("A", "B", 5.0);
        graph.add_land_edge("A", "C", 7.0);
        graph.add_land_edge("A", "B", 9.0);

        let a = City::new("A");
        let targets: Vec<_> = graph
            .neighbours(&a, Relation::Land)
            .iter()
            .map(|edge| (edge.target.name().to_string(), edge.distance))
            .collect();
        assert_eq!(
            targets,
            vec![("B".to_string(), 9.0), ("C".to_string(), 7.0)]
        );
    }
}
