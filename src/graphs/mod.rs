use thiserror::Error;

pub mod city_map;

pub type Vertex = u32;
pub type Distance = f64;

/// Sentinel for "no direct road" matrix cells and for unreachable
/// cities in query results.
pub const INFINITY: Distance = f64::INFINITY;

/// Upper bound on the number of cities a map may hold. The distance
/// matrix is dense, so memory grows quadratically with the city count.
pub const MAX_CITIES: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GraphError {
    /// A city index outside `[0, city_count)`.
    #[error("invalid city index: {0}")]
    InvalidIndex(Vertex),
    /// A road distance that is negative, NaN, or infinite.
    #[error("invalid road distance: {0}")]
    InvalidWeight(Distance),
    /// More cities requested than `MAX_CITIES`.
    #[error("capacity exceeded: {0} cities requested, at most {max} supported", max = MAX_CITIES)]
    CapacityExceeded(usize),
    /// Maps with no cities at all are rejected at construction.
    #[error("a city map needs at least one city")]
    NoCities,
}
