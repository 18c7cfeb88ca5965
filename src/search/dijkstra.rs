use serde::Serialize;

use super::path::Path;
use crate::graphs::{city_map::CityMap, Distance, GraphError, Vertex, INFINITY};

/// Everything one Dijkstra run learned from its source: the minimal
/// travel distance to every city and the predecessor of every city on
/// some shortest path.
///
/// Unreachable cities keep `INFINITY` as their distance and `None` as
/// their predecessor; so does the source itself, which is its own
/// starting point at distance zero.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShortestPathTree {
    source: Vertex,
    distances: Vec<Distance>,
    predecessors: Vec<Option<Vertex>>,
}

impl ShortestPathTree {
    pub fn source(&self) -> Vertex {
        self.source
    }

    /// Minimal travel distance from the source to `city`, `INFINITY`
    /// when unreachable and `None` when the index is out of range.
    pub fn distance(&self, city: Vertex) -> Option<Distance> {
        self.distances.get(city as usize).copied()
    }

    /// The city right before `city` on a shortest path from the source.
    /// `None` for the source itself, for unreachable cities, and for
    /// out-of-range indices.
    pub fn predecessor(&self, city: Vertex) -> Option<Vertex> {
        self.predecessors.get(city as usize).copied().flatten()
    }

    /// One distance per city, indexed by city.
    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    /// One predecessor entry per city, indexed by city.
    pub fn predecessors(&self) -> &[Option<Vertex>] {
        &self.predecessors
    }

    /// Reconstructs the shortest path to `target` by walking the
    /// predecessor entries back to the source, then reversing the
    /// collected cities. Returns `None` when `target` is out of range
    /// or unreachable; the path to the source itself is the singleton
    /// `[source]` with distance zero.
    ///
    /// Terminates because predecessor chains always lead back to the
    /// source without revisiting a city.
    pub fn path_to(&self, target: Vertex) -> Option<Path> {
        let distance = self.distance(target)?;
        if !distance.is_finite() {
            return None;
        }

        let mut vertices = vec![target];
        let mut current = target;
        while let Some(predecessor) = self.predecessor(current) {
            current = predecessor;
            vertices.push(current);
        }
        vertices.reverse();

        Some(Path { vertices, distance })
    }
}

/// Runs Dijkstra from `source` over the dense distance matrix.
///
/// This is the O(n²) variant: up to `n - 1` rounds of a linear scan for
/// the closest unexpanded city, each followed by relaxation of that
/// city's matrix row. The scan stops early once every unexpanded city
/// sits at `INFINITY`, since nothing reachable remains. Appropriate
/// here because the graph is small and stored densely, so a queue would
/// buy nothing.
///
/// Fails with `InvalidIndex` when `source` is out of range. Scratch
/// state is fresh per call, so repeated queries on an unchanged map
/// return identical trees.
pub fn shortest_path_tree(map: &CityMap, source: Vertex) -> Result<ShortestPathTree, GraphError> {
    if !map.contains(source) {
        return Err(GraphError::InvalidIndex(source));
    }

    let city_count = map.city_count();
    let mut distances = vec![INFINITY; city_count];
    let mut predecessors: Vec<Option<Vertex>> = vec![None; city_count];
    let mut expanded = vec![false; city_count];

    distances[source as usize] = 0.0;

    for _ in 1..city_count {
        let Some(city) = closest_unexpanded(&distances, &expanded) else {
            break;
        };
        expanded[city as usize] = true;

        let distance_city = distances[city as usize];
        for (neighbor, road_distance) in map.roads_from(city) {
            if expanded[neighbor as usize] {
                continue;
            }

            let current_distance = distances[neighbor as usize];
            let alternative_distance = distance_city + road_distance;
            if alternative_distance < current_distance {
                distances[neighbor as usize] = alternative_distance;
                predecessors[neighbor as usize] = Some(city);
            }
        }
    }

    Ok(ShortestPathTree {
        source,
        distances,
        predecessors,
    })
}

/// The unexpanded city with the smallest tentative distance, `None`
/// once the remaining cities all sit at `INFINITY`. The strict `<`
/// makes the lowest index win ties, which keeps query results
/// reproducible.
fn closest_unexpanded(distances: &[Distance], expanded: &[bool]) -> Option<Vertex> {
    let mut closest = None;
    let mut closest_distance = INFINITY;

    for (city, &distance) in distances.iter().enumerate() {
        if !expanded[city] && distance < closest_distance {
            closest = Some(city as Vertex);
            closest_distance = distance;
        }
    }

    closest
}
