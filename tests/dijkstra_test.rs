use city_paths::{
    graphs::{city_map::CityMap, GraphError, Vertex, INFINITY},
    search::{
        dijkstra::shortest_path_tree,
        path::{validate_tree, Path},
    },
    utility::random_city_map,
};

/// Four named cities with a cheaper two-hop detour between A and C.
fn four_city_map() -> CityMap {
    let mut map = CityMap::new(4).unwrap();
    for (city, name) in ["A", "B", "C", "D"].into_iter().enumerate() {
        map.set_city_name(city as Vertex, name).unwrap();
    }

    map.add_road(0, 1, 1.0).unwrap();
    map.add_road(1, 2, 2.0).unwrap();
    map.add_road(0, 2, 4.0).unwrap();
    map.add_road(2, 3, 1.0).unwrap();
    map
}

/// Nine cities: a long chain with shortcuts and detours between city 0
/// and city 7, plus city 8 with no roads at all.
fn highway_map() -> CityMap {
    let roads: [(Vertex, Vertex, f64); 12] = [
        (0, 1, 4.0),
        (0, 2, 1.0),
        (2, 1, 2.0),
        (1, 3, 5.0),
        (2, 3, 8.0),
        (3, 4, 3.0),
        (4, 5, 2.0),
        (3, 5, 6.0),
        (5, 6, 1.0),
        (6, 7, 2.0),
        (5, 7, 4.0),
        (0, 7, 20.0),
    ];

    let mut map = CityMap::new(9).unwrap();
    for (a, b, distance) in roads {
        map.add_road(a, b, distance).unwrap();
    }
    map
}

#[test]
fn four_city_scenario() {
    let map = four_city_map();
    let tree = shortest_path_tree(&map, 0).unwrap();

    assert_eq!(tree.distances(), [0.0, 1.0, 3.0, 4.0].as_slice());
    assert_eq!(
        tree.predecessors(),
        [None, Some(0), Some(1), Some(2)].as_slice()
    );

    let path = tree.path_to(3).unwrap();
    assert_eq!(path.vertices, vec![0, 1, 2, 3]);
    assert_eq!(path.distance, 4.0);
}

#[test]
fn distances_and_paths_across_the_highway_map() {
    let map = highway_map();
    let tree = shortest_path_tree(&map, 0).unwrap();

    assert_eq!(
        tree.distances(),
        [0.0, 3.0, 1.0, 8.0, 11.0, 13.0, 14.0, 16.0, INFINITY].as_slice()
    );

    let path = tree.path_to(7).unwrap();
    assert_eq!(path.vertices, vec![0, 2, 1, 3, 4, 5, 6, 7]);
    assert_eq!(path.distance, 16.0);

    assert_eq!(tree.path_to(8), None);
}

#[test]
fn source_invariants_hold_for_every_source() {
    let map = highway_map();

    for source in map.cities() {
        let tree = shortest_path_tree(&map, source).unwrap();

        assert_eq!(tree.source(), source);
        assert_eq!(tree.distance(source), Some(0.0));
        assert_eq!(tree.predecessor(source), None);
        assert_eq!(
            tree.path_to(source),
            Some(Path {
                vertices: vec![source],
                distance: 0.0,
            })
        );
    }
}

#[test]
fn isolated_city_is_unreachable_from_both_sides() {
    let map = highway_map();

    let tree = shortest_path_tree(&map, 0).unwrap();
    assert_eq!(tree.distance(8), Some(INFINITY));
    assert_eq!(tree.predecessor(8), None);
    assert_eq!(tree.path_to(8), None);

    let tree = shortest_path_tree(&map, 8).unwrap();
    assert_eq!(tree.distance(8), Some(0.0));
    for city in map.cities().filter(|&city| city != 8) {
        assert_eq!(tree.distance(city), Some(INFINITY));
        assert_eq!(tree.path_to(city), None);
    }
}

#[test]
fn out_of_range_sources_are_rejected() {
    let map = highway_map();

    assert_eq!(
        shortest_path_tree(&map, 9).unwrap_err(),
        GraphError::InvalidIndex(9)
    );
    assert_eq!(
        shortest_path_tree(&map, 200).unwrap_err(),
        GraphError::InvalidIndex(200)
    );
}

#[test]
fn repeated_queries_return_identical_trees() {
    let map = highway_map();

    let first = shortest_path_tree(&map, 2).unwrap();
    let second = shortest_path_tree(&map, 2).unwrap();
    assert_eq!(first, second);
}

#[test]
fn overwriting_a_road_changes_later_queries() {
    let mut map = CityMap::new(2).unwrap();

    map.add_road(0, 1, 5.0).unwrap();
    let tree = shortest_path_tree(&map, 0).unwrap();
    assert_eq!(tree.distance(1), Some(5.0));

    map.add_road(0, 1, 2.0).unwrap();
    let tree = shortest_path_tree(&map, 0).unwrap();
    assert_eq!(tree.distance(1), Some(2.0));
    assert_eq!(map.direct_distance(1, 0), Some(2.0));
}

#[test]
fn equal_cost_routes_pick_the_lowest_indexed_branch() {
    let mut map = CityMap::new(4).unwrap();
    map.add_road(0, 1, 1.0).unwrap();
    map.add_road(0, 2, 1.0).unwrap();
    map.add_road(1, 3, 1.0).unwrap();
    map.add_road(2, 3, 1.0).unwrap();

    let path = shortest_path_tree(&map, 0).unwrap().path_to(3).unwrap();
    assert_eq!(path.vertices, vec![0, 1, 3]);
    assert_eq!(path.distance, 2.0);
}

#[test]
fn zero_distance_roads_are_real_roads() {
    let mut map = CityMap::new(3).unwrap();
    map.add_road(0, 1, 0.0).unwrap();
    map.add_road(1, 2, 3.0).unwrap();

    let tree = shortest_path_tree(&map, 0).unwrap();
    assert_eq!(tree.distance(1), Some(0.0));
    assert_eq!(tree.path_to(2).unwrap().vertices, vec![0, 1, 2]);
    assert_eq!(map.direct_distance(1, 0), Some(0.0));
}

#[test]
fn single_city_maps_are_trivially_solved() {
    let map = CityMap::new(1).unwrap();
    let tree = shortest_path_tree(&map, 0).unwrap();

    assert_eq!(tree.distances(), [0.0].as_slice());
    assert_eq!(tree.predecessors(), [None].as_slice());
    assert_eq!(
        tree.path_to(0),
        Some(Path {
            vertices: vec![0],
            distance: 0.0,
        })
    );
}

#[test]
fn every_fixture_tree_validates() {
    for map in [four_city_map(), highway_map()] {
        for source in map.cities() {
            let tree = shortest_path_tree(&map, source).unwrap();
            validate_tree(&map, &tree).unwrap();
        }
    }
}

#[test]
fn random_maps_produce_valid_trees() {
    for seed in 0..5 {
        let map = random_city_map(60, 150, 100, seed).unwrap();

        for source in map.cities() {
            let tree = shortest_path_tree(&map, source).unwrap();
            validate_tree(&map, &tree).unwrap();
        }
    }
}
