mod common;

use std::fs;
use std::path::Path;

use capitals_lib::dataset::load_graph_from_csv;
use capitals_lib::{
    load_dataset, load_graph, resolve_dataset_source, DatasetSource, Error, Relation,
};
use common::{city, fixtures_dir};
use tempfile::TempDir;

#[test]
fn explicit_path_is_used_as_is() {
    let path = fixtures_dir().join("minimal_capitals.json");
    let source = resolve_dataset_source(Some(&path)).expect("fixture exists");
    assert_eq!(source, DatasetSource::File(path.clone()));

    let dataset = load_dataset(Some(&path)).expect("fixture loads");
    assert_eq!(dataset.graph.len(), 5);
    assert_eq!(dataset.source.to_string(), path.display().to_string());
}

#[test]
fn missing_explicit_path_is_an_error() {
    let error = load_dataset(Some(Path::new("/nonexistent/distances.json")))
        .expect_err("path does not exist");
    assert!(matches!(error, Error::DatasetNotFound { .. }));
    assert!(error.to_string().contains("dataset not found"));
}

#[test]
fn csv_matrix_loads_both_relations() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("matrix.csv");
    fs::write(
        &path,
        "capital,Recife,Natal,Maceió\n\
         Recife,,253/297,202/285\n\
         Natal,253/297,,\n\
         Maceió,202/285,,\n",
    )
    .expect("write matrix");

    let graph = load_graph(&path).expect("csv loads by extension");
    assert_eq!(graph.len(), 3);
    assert_eq!(
        graph.weight(&city("Recife"), &city("Natal"), Relation::Air),
        253.0
    );
    assert_eq!(
        graph.weight(&city("Maceió"), &city("Recife"), Relation::Land),
        285.0
    );
    assert!(graph
        .weight(&city("Natal"), &city("Maceió"), Relation::Land)
        .is_infinite());

    let direct = load_graph_from_csv(&path).expect("csv loads directly");
    assert_eq!(direct.edge_count(Relation::Air), graph.edge_count(Relation::Air));
}

#[test]
fn malformed_json_reports_parse_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"capitals\": [").expect("write json");

    let error = load_graph(&path).expect_err("truncated json");
    assert!(matches!(error, Error::Json(_)));
}

#[test]
fn non_finite_csv_distance_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("matrix.csv");
    fs::write(&path, ",A,B\nA,,-5/10\n").expect("write matrix");

    let error = load_graph(&path).expect_err("negative distance");
    assert!(matches!(error, Error::InvalidDistance { .. }));
}
