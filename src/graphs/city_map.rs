use super::{Distance, GraphError, Vertex, INFINITY, MAX_CITIES};

/// Dense map of cities and the direct roads between them.
///
/// Stored as a square distance matrix: `distances[a][b]` is the direct
/// road distance between `a` and `b`, `INFINITY` where no road exists
/// and `0.0` on the diagonal. Roads are undirected, so the matrix stays
/// symmetric. The matrix is sized exactly to the city count given at
/// construction and never grows.
#[derive(Clone, Debug)]
pub struct CityMap {
    names: Vec<String>,
    distances: Vec<Vec<Distance>>,
}

impl CityMap {
    /// Creates a map of `city_count` unnamed cities with no roads.
    pub fn new(city_count: usize) -> Result<CityMap, GraphError> {
        if city_count == 0 {
            return Err(GraphError::NoCities);
        }
        if city_count > MAX_CITIES {
            return Err(GraphError::CapacityExceeded(city_count));
        }

        let distances = (0..city_count)
            .map(|city| {
                let mut row = vec![INFINITY; city_count];
                row[city] = 0.0;
                row
            })
            .collect();

        Ok(CityMap {
            names: vec![String::new(); city_count],
            distances,
        })
    }

    pub fn city_count(&self) -> usize {
        self.names.len()
    }

    pub fn cities(&self) -> impl Iterator<Item = Vertex> {
        0..self.city_count() as Vertex
    }

    pub fn contains(&self, city: Vertex) -> bool {
        (city as usize) < self.city_count()
    }

    fn check_city(&self, city: Vertex) -> Result<(), GraphError> {
        if self.contains(city) {
            Ok(())
        } else {
            Err(GraphError::InvalidIndex(city))
        }
    }

    /// Assigns a display name to `city`. Names are free-form and need
    /// not be unique; identity is the index.
    pub fn set_city_name(&mut self, city: Vertex, name: &str) -> Result<(), GraphError> {
        self.check_city(city)?;
        self.names[city as usize] = name.to_string();
        Ok(())
    }

    /// The display name assigned to `city`, `None` when the index is out
    /// of range. Cities that were never named yield an empty string.
    pub fn city_name(&self, city: Vertex) -> Option<&str> {
        self.names.get(city as usize).map(String::as_str)
    }

    /// Inserts the road `a -- b` with the given distance, overwriting
    /// any previous road between the two cities. Both indices are
    /// validated before anything is written, so a rejected call leaves
    /// the map untouched. A road from a city to itself is accepted and
    /// ignored: the diagonal of the matrix is always zero.
    pub fn add_road(&mut self, a: Vertex, b: Vertex, distance: Distance) -> Result<(), GraphError> {
        self.check_city(a)?;
        self.check_city(b)?;
        if !distance.is_finite() || distance < 0.0 {
            return Err(GraphError::InvalidWeight(distance));
        }

        if a != b {
            self.distances[a as usize][b as usize] = distance;
            self.distances[b as usize][a as usize] = distance;
        }

        Ok(())
    }

    /// Direct road distance between `a` and `b`, `None` when either
    /// index is out of range or no direct road exists. The zero
    /// self-distance counts as a direct road.
    pub fn direct_distance(&self, a: Vertex, b: Vertex) -> Option<Distance> {
        let distance = *self.distances.get(a as usize)?.get(b as usize)?;

        if distance.is_finite() {
            Some(distance)
        } else {
            None
        }
    }

    /// The finite off-diagonal entries of `city`'s matrix row: every
    /// city reachable by a direct road, with its distance. Empty when
    /// the index is out of range.
    pub fn roads_from(&self, city: Vertex) -> impl Iterator<Item = (Vertex, Distance)> + '_ {
        self.distances
            .get(city as usize)
            .into_iter()
            .flatten()
            .enumerate()
            .filter(move |&(other, &distance)| other as Vertex != city && distance.is_finite())
            .map(|(other, &distance)| (other as Vertex, distance))
    }

    /// Raw matrix row for `city`, `None` when out of range. Display code
    /// is expected to substitute a marker for the `INFINITY` entries.
    pub fn distance_row(&self, city: Vertex) -> Option<&[Distance]> {
        self.distances.get(city as usize).map(Vec::as_slice)
    }

    /// Number of distinct roads, counting each unordered pair once.
    pub fn road_count(&self) -> usize {
        self.distances
            .iter()
            .enumerate()
            .map(|(city, row)| {
                row.iter()
                    .skip(city + 1)
                    .filter(|distance| distance.is_finite())
                    .count()
            })
            .sum()
    }
}
