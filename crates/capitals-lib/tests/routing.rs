mod common;

use capitals_lib::{
    best_transport, plan_route, Algorithm, Error, Relation, RouteRequest,
};
use common::{city, full_graph, minimal_graph, names};

#[test]
fn plan_route_resolves_names_case_insensitively() {
    let graph = minimal_graph();
    let request = RouteRequest::new("são paulo", "BRASÍLIA", Algorithm::Ucs, Relation::Air);
    let plan = plan_route(&graph, &request).expect("route exists");

    assert_eq!(plan.start, city("São Paulo"));
    assert_eq!(plan.goal, city("Brasília"));
    assert_eq!(plan.algorithm, Algorithm::Ucs);
    assert_eq!(plan.result.cost, 873.0);
    assert_eq!(plan.hop_count(), 1);
}

#[test]
fn unknown_city_suggests_close_matches() {
    let graph = minimal_graph();
    let request = RouteRequest::new("Sao Paulo", "Brasília", Algorithm::Bfs, Relation::Land);
    let error = plan_route(&graph, &request).expect_err("name lacks the accent");

    match &error {
        Error::UnknownCity { name, suggestions } => {
            assert_eq!(name, "Sao Paulo");
            assert_eq!(suggestions.first().map(String::as_str), Some("São Paulo"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(error.to_string().contains("Did you mean"));
}

#[test]
fn unknown_city_without_similar_names_has_no_suggestions() {
    let graph = minimal_graph();
    let request = RouteRequest::new("Xique-Xique", "Brasília", Algorithm::Bfs, Relation::Air);
    let error = plan_route(&graph, &request).expect_err("not a capital");
    assert!(!error.to_string().contains("Did you mean"));
}

#[test]
fn unreachable_goal_is_a_plan_without_path() {
    let graph = minimal_graph();
    let request = RouteRequest::new("Brasília", "Macapá", Algorithm::AStar, Relation::Land);
    let plan = plan_route(&graph, &request).expect("no path is not an error");
    assert!(!plan.is_found());
    assert_eq!(plan.result.cost, 0.0);
}

#[test]
fn best_transport_picks_the_cheaper_relation() {
    let graph = minimal_graph();
    let choice = best_transport(&graph, Algorithm::Ucs, "Rio de Janeiro", "Brasília")
        .expect("cities exist")
        .expect("both relations connect them");

    assert_eq!(choice.best, Relation::Air);
    assert_eq!(choice.air.cost, 933.0);
    assert_eq!(choice.land.cost, 1180.0);
    assert_eq!(
        names(&choice.best_result().path),
        vec!["Rio de Janeiro", "Brasília"]
    );
}

#[test]
fn best_transport_requires_both_relations() {
    let graph = full_graph();
    let choice = best_transport(&graph, Algorithm::AStar, "São Paulo", "Macapá")
        .expect("cities exist");
    assert!(choice.is_none(), "Macapá has no road connections");
}

#[test]
fn relation_selector_is_parsed_strictly() {
    assert_eq!(" Air ".parse::<Relation>().unwrap(), Relation::Air);
    assert_eq!("LAND".parse::<Relation>().unwrap(), Relation::Land);
    let error = "sea".parse::<Relation>().expect_err("unknown relation");
    assert!(matches!(error, Error::UnknownRelation { .. }));
}
