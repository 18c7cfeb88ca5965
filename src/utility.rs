use indicatif::{ProgressBar, ProgressStyle};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::graphs::{city_map::CityMap, Distance, GraphError, Vertex};

/// Builds a random city map with `city_count` cities and up to
/// `road_count` roads, using integer-valued distances drawn from
/// `1..=max_distance` so that path sums stay exact. Roads that land on
/// an already connected pair overwrite it and self-roads are dropped,
/// so the map may end up with fewer distinct roads than requested.
///
/// The same seed always produces the same map. `max_distance` must be
/// at least one.
pub fn random_city_map(
    city_count: usize,
    road_count: usize,
    max_distance: u32,
    seed: u64,
) -> Result<CityMap, GraphError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut map = CityMap::new(city_count)?;

    for _ in 0..road_count {
        let a = rng.gen_range(0..city_count) as Vertex;
        let b = rng.gen_range(0..city_count) as Vertex;
        let distance = rng.gen_range(1..=max_distance) as Distance;
        map.add_road(a, b, distance)?;
    }

    Ok(map)
}

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    bar.set_style(
        ProgressStyle::with_template(" {msg} {wide_bar} {pos}/{len} remaining: {eta_precise}")
            .unwrap(),
    );
    bar
}
