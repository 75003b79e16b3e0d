mod common;

use std::thread;

use capitals_lib::{select_algorithm, Algorithm, City, Graph, Relation, SearchResult};
use common::{city, full_graph, minimal_graph, names, triangle_graph};

fn run(
    algorithm: Algorithm,
    graph: &Graph,
    start: &str,
    goal: &str,
    relation: Relation,
) -> SearchResult {
    select_algorithm(algorithm).search(graph, &city(start), &city(goal), relation)
}

fn city_pairs(graph: &Graph) -> Vec<(City, City)> {
    let cities: Vec<City> = graph.cities().cloned().collect();
    let mut pairs = Vec::new();
    for (index, start) in cities.iter().enumerate() {
        for goal in &cities[index + 1..] {
            pairs.push((start.clone(), goal.clone()));
        }
    }
    pairs
}

#[test]
fn ucs_prefers_cheap_detour_over_direct_edge() {
    let graph = triangle_graph();
    let result = run(Algorithm::Ucs, &graph, "A", "C", Relation::Air);
    assert_eq!(names(&result.path), vec!["A", "B", "C"]);
    assert_eq!(result.cost, 20.0);
}

#[test]
fn greedy_is_drawn_towards_the_cheap_detour() {
    let graph = triangle_graph();
    let result = run(Algorithm::Greedy, &graph, "A", "C", Relation::Air);
    assert_eq!(names(&result.path), vec!["A", "B", "C"]);
    assert_eq!(result.cost, 20.0);
}

#[test]
fn bfs_takes_the_direct_edge_regardless_of_weight() {
    let graph = triangle_graph();
    let result = run(Algorithm::Bfs, &graph, "A", "C", Relation::Air);
    assert_eq!(names(&result.path), vec!["A", "C"]);
    assert_eq!(result.cost, 100.0);
}

#[test]
fn land_relation_uses_its_own_weights() {
    let graph = triangle_graph();
    let ucs = run(Algorithm::Ucs, &graph, "A", "C", Relation::Land);
    let a_star = run(Algorithm::AStar, &graph, "A", "C", Relation::Land);
    assert_eq!(ucs.cost, 24.0);
    assert_eq!(a_star.cost, 24.0);
}

#[test]
fn isolated_goal_exhausts_the_reachable_component() {
    let graph = triangle_graph();
    for algorithm in Algorithm::ALL {
        let result = run(algorithm, &graph, "A", "D", Relation::Air);
        assert!(result.path.is_empty(), "{algorithm} should not find D");
        assert_eq!(result.cost, 0.0);
        assert_eq!(result.expanded_nodes, 3, "{algorithm} expands A, B and C");
    }
}

#[test]
fn start_equal_to_goal_is_a_single_vertex_path() {
    let graph = triangle_graph();
    for relation in Relation::ALL {
        for algorithm in Algorithm::ALL {
            let result = run(algorithm, &graph, "B", "B", relation);
            assert_eq!(names(&result.path), vec!["B"]);
            assert_eq!(result.cost, 0.0);
            assert_eq!(result.expanded_nodes, 1);
        }
    }
}

#[test]
fn unknown_endpoint_yields_empty_result() {
    let graph = triangle_graph();
    for algorithm in Algorithm::ALL {
        let result = run(algorithm, &graph, "A", "Atlantis", Relation::Air);
        assert_eq!(result, SearchResult::not_found(0));
    }
}

#[test]
fn fixture_land_route_detours_through_belo_horizonte() {
    let graph = minimal_graph();
    let expected = vec!["Rio de Janeiro", "Belo Horizonte", "Brasília"];

    for algorithm in [Algorithm::Bfs, Algorithm::Ucs, Algorithm::Greedy, Algorithm::AStar] {
        let result = run(
            algorithm,
            &graph,
            "Rio de Janeiro",
            "Brasília",
            Relation::Land,
        );
        assert_eq!(names(&result.path), expected, "{algorithm}");
        assert_eq!(result.cost, 1180.0, "{algorithm}");
    }
}

#[test]
fn fixture_air_route_is_direct() {
    let graph = minimal_graph();
    for algorithm in Algorithm::ALL {
        let result = run(
            algorithm,
            &graph,
            "São Paulo",
            "Rio de Janeiro",
            Relation::Air,
        );
        assert_eq!(names(&result.path), vec!["São Paulo", "Rio de Janeiro"]);
        assert_eq!(result.cost, 361.0);
    }

    let ucs = run(
        Algorithm::Ucs,
        &graph,
        "São Paulo",
        "Rio de Janeiro",
        Relation::Air,
    );
    assert_eq!(ucs.expanded_nodes, 2);
}

#[test]
fn fixture_isolated_capital_is_unreachable() {
    let graph = minimal_graph();
    for relation in Relation::ALL {
        for algorithm in Algorithm::ALL {
            let result = run(algorithm, &graph, "São Paulo", "Macapá", relation);
            assert!(!result.is_found());
            assert_eq!(result.expanded_nodes, 4);
        }
    }
}

#[test]
fn found_paths_start_and_end_at_the_query_endpoints() {
    let graph = full_graph();
    for (start, goal) in city_pairs(&graph).into_iter().take(60) {
        for algorithm in Algorithm::ALL {
            let result = select_algorithm(algorithm).search(&graph, &start, &goal, Relation::Land);
            if !result.is_found() {
                continue;
            }
            assert_eq!(result.path.first(), Some(&start));
            assert_eq!(result.path.last(), Some(&goal));
            assert!(result.expanded_nodes >= 1);
        }
    }
}

#[test]
fn ucs_and_a_star_agree_on_minimum_cost() {
    let graph = full_graph();
    let ucs = select_algorithm(Algorithm::Ucs);
    let a_star = select_algorithm(Algorithm::AStar);

    for relation in Relation::ALL {
        for (start, goal) in city_pairs(&graph) {
            let expected = ucs.search(&graph, &start, &goal, relation);
            let actual = a_star.search(&graph, &start, &goal, relation);
            assert_eq!(
                expected.is_found(),
                actual.is_found(),
                "{start} -> {goal} ({relation})"
            );
            assert!(
                (expected.cost - actual.cost).abs() < 1e-6,
                "{start} -> {goal} ({relation}): ucs {} vs a* {}",
                expected.cost,
                actual.cost
            );
        }
    }
}

#[test]
fn air_relation_shortest_path_is_the_direct_flight() {
    let graph = full_graph();
    let ucs = select_algorithm(Algorithm::Ucs);
    for (start, goal) in city_pairs(&graph) {
        let result = ucs.search(&graph, &start, &goal, Relation::Air);
        assert_eq!(result.cost, graph.weight(&start, &goal, Relation::Air));
    }
}

#[test]
fn bfs_finds_the_fewest_hops() {
    let graph = full_graph();
    for (start, goal) in city_pairs(&graph) {
        let bfs = select_algorithm(Algorithm::Bfs).search(&graph, &start, &goal, Relation::Land);
        for algorithm in Algorithm::ALL {
            let other = select_algorithm(algorithm).search(&graph, &start, &goal, Relation::Land);
            assert_eq!(bfs.is_found(), other.is_found());
            assert!(
                bfs.hop_count() <= other.hop_count(),
                "{start} -> {goal}: bfs {} hops, {algorithm} {} hops",
                bfs.hop_count(),
                other.hop_count()
            );
        }
    }
}

#[test]
fn no_strategy_beats_uniform_cost() {
    let graph = full_graph();
    for (start, goal) in city_pairs(&graph) {
        let best = select_algorithm(Algorithm::Ucs).search(&graph, &start, &goal, Relation::Land);
        for algorithm in Algorithm::ALL {
            let result = select_algorithm(algorithm).search(&graph, &start, &goal, Relation::Land);
            assert!(result.cost + 1e-6 >= best.cost, "{algorithm} {start} -> {goal}");
        }
    }
}

#[test]
fn repeated_searches_are_identical() {
    let graph = full_graph();
    let start = city("Porto Alegre");
    let goal = city("Manaus");
    for relation in Relation::ALL {
        for algorithm in Algorithm::ALL {
            let strategy = select_algorithm(algorithm);
            let first = strategy.search(&graph, &start, &goal, relation);
            let second = strategy.search(&graph, &start, &goal, relation);
            assert_eq!(first, second, "{algorithm} over {relation}");
        }
    }
}

#[test]
fn strategies_share_one_graph_across_threads() {
    let graph = full_graph();
    let start = city("Porto Alegre");
    let goal = city("Manaus");

    let sequential: Vec<SearchResult> = Algorithm::ALL
        .iter()
        .map(|algorithm| select_algorithm(*algorithm).search(&graph, &start, &goal, Relation::Land))
        .collect();

    let parallel: Vec<SearchResult> = thread::scope(|scope| {
        let handles: Vec<_> = Algorithm::ALL
            .iter()
            .map(|algorithm| {
                let (graph, start, goal) = (&graph, &start, &goal);
                scope.spawn(move || {
                    select_algorithm(*algorithm).search(graph, start, goal, Relation::Land)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("search thread panicked"))
            .collect()
    });

    assert_eq!(sequential, parallel);
}
