//! Building a [`Graph`] from distance datasets.
//!
//! Two file formats are understood:
//!
//! - JSON: `{"capitals": [...], "distances": {"air": {origin: {dest: km}}, "land": {...}}}`.
//!   Capital entries may be plain names or objects with a `name` field.
//! - CSV: a square matrix whose header row lists destinations and whose cells
//!   hold `"air/land"` pairs.
//!
//! Distance maps are read in sorted order, so the edge insertion order (and
//! therefore neighbour order) is the same on every load.

use std::collections::BTreeMap;
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::city::City;
use crate::error::{Error, Result};
use crate::graph::{Graph, Relation};

/// Environment variable consulted when no explicit dataset path is given.
pub const DATA_PATH_ENV: &str = "CAPITALS_DATA_PATH";

/// Dataset location relative to the working directory.
pub const DEFAULT_DATASET_PATH: &str = "data/distances.json";

#[derive(Debug, Deserialize)]
struct DatasetFile {
    #[serde(default)]
    capitals: Vec<CapitalEntry>,
    #[serde(default)]
    distances: DistanceTables,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CapitalEntry {
    Name(String),
    Detailed { name: String },
}

impl CapitalEntry {
    fn name(&self) -> &str {
        match self {
            CapitalEntry::Name(name) => name,
            CapitalEntry::Detailed { name } => name,
        }
    }
}

type DistanceTable = BTreeMap<String, BTreeMap<String, f64>>;

#[derive(Debug, Default, Deserialize)]
struct DistanceTables {
    #[serde(default)]
    air: DistanceTable,
    #[serde(default)]
    land: DistanceTable,
}

/// Where a loaded graph came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    File(PathBuf),
    Sample,
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::File(path) => write!(f, "{}", path.display()),
            DatasetSource::Sample => f.write_str("built-in sample"),
        }
    }
}

/// A loaded graph together with its origin.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub graph: Graph,
    pub source: DatasetSource,
}

/// Parse a JSON dataset from a string.
pub fn graph_from_json_str(contents: &str) -> Result<Graph> {
    let file: DatasetFile = serde_json::from_str(contents)?;
    let mut graph = Graph::new();

    for capital in &file.capitals {
        graph.add_city(capital.name());
    }

    insert_table(&mut graph, Relation::Air, &file.distances.air)?;
    insert_table(&mut graph, Relation::Land, &file.distances.land)?;
    Ok(graph)
}

/// Load a JSON dataset from disk.
pub fn load_graph_from_json(path: &Path) -> Result<Graph> {
    let contents = fs::read_to_string(path)?;
    graph_from_json_str(&contents)
}

/// Load a CSV distance matrix from disk.
///
/// The first header cell is ignored; the remaining header cells name the
/// destination of each column. Each row starts with its origin name. Cells
/// holding `air/land` add an edge to both relations; empty cells and cells
/// without a `/` are skipped.
pub fn load_graph_from_csv(path: &Path) -> Result<Graph> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    graph_from_csv_reader(reader)
}

/// Parse a CSV distance matrix from a string.
pub fn graph_from_csv_str(contents: &str) -> Result<Graph> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(contents.as_bytes());
    graph_from_csv_reader(reader)
}

fn graph_from_csv_reader<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Graph> {
    let destinations: Vec<City> = reader
        .headers()?
        .iter()
        .skip(1)
        .map(|name| City::new(name.trim()))
        .collect();

    let mut graph = Graph::new();
    for city in &destinations {
        graph.add_city(city.clone());
    }

    for record in reader.records() {
        let record = record?;
        let line = record
            .position()
            .map(|position| position.line() as usize)
            .unwrap_or_default();
        let Some(origin) = record.get(0).map(str::trim).filter(|name| !name.is_empty()) else {
            continue;
        };
        let origin = City::new(origin);
        graph.add_city(origin.clone());

        for (column, cell) in record.iter().enumerate().skip(1) {
            let cell = cell.trim();
            let Some((air, land)) = cell.split_once('/') else {
                continue;
            };
            let destination =
                destinations
                    .get(column - 1)
                    .ok_or_else(|| Error::MalformedMatrix {
                        line,
                        message: format!("column {} has no header", column + 1),
                    })?;
            let air = parse_cell_distance(air, line)?;
            let land = parse_cell_distance(land, line)?;

            validate_distance(&origin, destination, air)?;
            validate_distance(&origin, destination, land)?;
            graph.add_air_edge(origin.clone(), destination.clone(), air);
            graph.add_land_edge(origin.clone(), destination.clone(), land);
        }
    }

    Ok(graph)
}

fn parse_cell_distance(value: &str, line: usize) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|error| Error::MalformedMatrix {
            line,
            message: format!("invalid distance '{}': {}", value.trim(), error),
        })
}

fn insert_table(graph: &mut Graph, relation: Relation, table: &DistanceTable) -> Result<()> {
    for (origin, destinations) in table {
        let origin = City::new(origin);
        for (destination, &distance) in destinations {
            let destination = City::new(destination);
            validate_distance(&origin, &destination, distance)?;
            graph.add_edge(relation, origin.clone(), destination, distance);
        }
    }
    Ok(())
}

fn validate_distance(origin: &City, destination: &City, distance: f64) -> Result<()> {
    if distance.is_finite() && distance >= 0.0 {
        return Ok(());
    }
    Err(Error::InvalidDistance {
        origin: origin.name().to_string(),
        destination: destination.name().to_string(),
        value: distance,
    })
}

/// Load a dataset file, choosing the parser from its extension.
pub fn load_graph(path: &Path) -> Result<Graph> {
    if !path.exists() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }

    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let graph = if is_csv {
        load_graph_from_csv(path)?
    } else {
        load_graph_from_json(path)?
    };

    info!(
        cities = graph.len(),
        air_edges = graph.edge_count(Relation::Air),
        land_edges = graph.edge_count(Relation::Land),
        "loaded dataset from {}",
        path.display()
    );
    Ok(graph)
}

/// Decide which dataset to load.
///
/// The resolution order is:
/// 1. Explicit `path` argument when provided.
/// 2. `CAPITALS_DATA_PATH` environment variable.
/// 3. `data/distances.json` in the working directory.
/// 4. The built-in sample graph.
///
/// A path requested through (1) or (2) must exist.
pub fn resolve_dataset_source(path: Option<&Path>) -> Result<DatasetSource> {
    if let Some(explicit) = path {
        return existing_file(explicit);
    }

    if let Some(env_path) = env::var_os(DATA_PATH_ENV) {
        debug!("using dataset path from {}", DATA_PATH_ENV);
        return existing_file(Path::new(&env_path));
    }

    let default = Path::new(DEFAULT_DATASET_PATH);
    if default.exists() {
        return Ok(DatasetSource::File(default.to_path_buf()));
    }

    warn!(
        "dataset {} not found; using built-in sample graph",
        DEFAULT_DATASET_PATH
    );
    Ok(DatasetSource::Sample)
}

fn existing_file(path: &Path) -> Result<DatasetSource> {
    if path.exists() {
        Ok(DatasetSource::File(path.to_path_buf()))
    } else {
        Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Resolve and load a dataset following [`resolve_dataset_source`].
pub fn load_dataset(path: Option<&Path>) -> Result<Dataset> {
    let source = resolve_dataset_source(path)?;
    let graph = match &source {
        DatasetSource::File(path) => load_graph(path)?,
        DatasetSource::Sample => sample_graph(),
    };
    Ok(Dataset { graph, source })
}

/// Small built-in graph of ten capitals with illustrative distances.
///
/// Only some capitals are connected; the rest are isolated vertices, which
/// makes the sample useful for exercising "no path" outcomes.
pub fn sample_graph() -> Graph {
    const CAPITALS: [&str; 10] = [
        "Brasília",
        "São Paulo",
        "Rio de Janeiro",
        "Belo Horizonte",
        "Salvador",
        "Recife",
        "Fortaleza",
        "Belém",
        "Manaus",
        "Porto Alegre",
    ];
    const CONNECTIONS: [(&str, &str, f64, f64); 7] = [
        ("Brasília", "São Paulo", 1000.0, 1200.0),
        ("Brasília", "Rio de Janeiro", 1100.0, 1350.0),
        ("Brasília", "Belo Horizonte", 700.0, 730.0),
        ("Brasília", "Salvador", 1400.0, 1650.0),
        ("São Paulo", "Rio de Janeiro", 400.0, 450.0),
        ("São Paulo", "Belo Horizonte", 600.0, 630.0),
        ("São Paulo", "Porto Alegre", 850.0, 1100.0),
    ];

    let mut graph = Graph::new();
    for capital in CAPITALS {
        graph.add_city(capital);
    }
    for (a, b, air, land) in CONNECTIONS {
        graph.add_air_edge(a, b, air);
        graph.add_land_edge(a, b, land);
    }
    graph
}
