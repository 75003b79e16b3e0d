//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use capitals_lib::{load_graph, City, Graph};

/// Path to the fixtures directory shared with the CLI tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Five capitals with a complete air relation among four of them and an
/// isolated Macapá.
#[allow(dead_code)]
pub fn minimal_graph() -> Graph {
    load_graph(&fixtures_dir().join("minimal_capitals.json")).expect("fixture loads")
}

/// The full 27-capital dataset shipped with the repository.
#[allow(dead_code)]
pub fn full_graph() -> Graph {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/distances.json");
    load_graph(&path).expect("dataset loads")
}

/// Three cities where the direct A-C edge costs more than the detour via B,
/// plus an isolated D.
#[allow(dead_code)]
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

#[allow(dead_code)]
pub fn city(name: &str) -> City {
    City::new(name)
}

#[allow(dead_code)]
pub fn names(path: &[City]) -> Vec<&str> {
    path.iter().map(City::name).collect()
}
