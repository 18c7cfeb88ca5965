use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::dijkstra::ShortestPathTree;
use crate::graphs::{city_map::CityMap, Distance, Vertex};

/// A reconstructed route: every city from source to target inclusive,
/// plus the total travel distance along it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<Vertex>,
    pub distance: Distance,
}

/// Total distance of a city sequence using only direct roads, `None` as
/// soon as two consecutive cities lack one. Sequences of zero or one
/// city have distance zero.
pub fn path_distance(map: &CityMap, vertices: &[Vertex]) -> Option<Distance> {
    let mut total = 0.0;
    for (&a, &b) in vertices.iter().tuple_windows() {
        total += map.direct_distance(a, b)?;
    }

    Some(total)
}

/// Checks a shortest-path tree against the map it was computed from:
/// the source invariants, and for every city either a reconstructable
/// path whose road distances sum to the reported distance, or a
/// consistently unreachable entry. Returns a message naming the first
/// violation found.
pub fn validate_tree(map: &CityMap, tree: &ShortestPathTree) -> Result<(), String> {
    let source = tree.source();

    if tree.distance(source) != Some(0.0) {
        return Err("source distance is not zero".to_string());
    }
    if tree.predecessor(source).is_some() {
        return Err("source has a predecessor".to_string());
    }

    for city in map.cities() {
        let distance = tree
            .distance(city)
            .ok_or_else(|| format!("no distance entry for city {}", city))?;

        match tree.path_to(city) {
            Some(path) => {
                if path.vertices.first() != Some(&source) {
                    return Err(format!("path to city {} does not start at the source", city));
                }
                if path.vertices.last() != Some(&city) {
                    return Err(format!("path to city {} does not end there", city));
                }
                if path.distance != distance {
                    return Err(format!(
                        "path to city {} disagrees with the distance entry",
                        city
                    ));
                }
                match path_distance(map, &path.vertices) {
                    Some(walked) if walked == distance => {}
                    Some(_) => {
                        return Err(format!(
                            "road distances along the path to city {} do not sum to its distance",
                            city
                        ))
                    }
                    None => return Err(format!("path to city {} uses a missing road", city)),
                }
            }
            None => {
                if distance.is_finite() {
                    return Err(format!("city {} is reachable but has no path", city));
                }
                if tree.predecessor(city).is_some() {
                    return Err(format!("unreachable city {} has a predecessor", city));
                }
            }
        }
    }

    Ok(())
}
