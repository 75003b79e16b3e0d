// Test-only helpers for `capitals-lib` unit tests
#![allow(dead_code)]
use crate::city::City;
use crate::graph::Graph;

pub fn city(name: &str) -> City {
    City::new(name)
}

pub fn names(path: &[City]) -> Vec<&str> {
    path.iter().map(City::name).collect()
}

/// Three cities where the direct A-C edge is far more expensive than the
/// detour through B, plus an isolated city D.
pub fn triangle_graph() -> Graph {
    let mut graph = Graph::new();
    graph.add_air_edge("A", "B", 10.0);
    graph.add_air_edge("B", "C", 10.0);
    graph.add_air_edge("A", "C", 100.0);
    graph.add_land_edge("A", "B", 12.0);
    graph.add_land_edge("B", "C", 12.0);
    graph.add_land_edge("A", "C", 150.0);
    graph.add_city("D");
    graph
}

/// Start S fans out to X, Y and Z (in that order); X and Z both reach G.
pub fn fan_graph() -> Graph {
    let mut graph = Graph::new();
    graph.add_air_edge("S", "X", 1.0);
    graph.add_air_edge("S", "Y", 1.0);
    graph.add_air_edge("S", "Z", 1.0);
    graph.add_air_edge("X", "G", 5.0);
    graph.add_air_edge("Z", "G", 1.0);
    graph
}
