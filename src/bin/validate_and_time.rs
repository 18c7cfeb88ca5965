use std::{
    fs::File,
    io::BufWriter,
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::{anyhow, ensure, Context, Result};
use city_paths::{
    graphs::Vertex,
    search::{dijkstra::shortest_path_tree, path::validate_tree},
    utility::{get_progressbar, random_city_map},
};
use clap::Parser;
use indicatif::ProgressIterator;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;

/// Builds a random city map, runs a shortest-path query from
/// `number_of_sources` random sources, validates every resulting tree
/// and reports how long the queries took.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of cities in the random map
    #[arg(short, long, default_value_t = 100)]
    cities: usize,

    /// Number of random roads to insert
    #[arg(short, long, default_value_t = 300)]
    roads: usize,

    /// Number of random sources to query
    #[arg(short, long, default_value_t = 100)]
    number_of_sources: usize,

    /// Largest road distance to generate
    #[arg(long, default_value_t = 1000)]
    max_distance: u32,

    /// Seed for the random map, so runs can be reproduced
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Path where per-source timing results shall be saved
    #[arg(short, long)]
    timing_results: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct SourceTimingResult {
    source: Vertex,
    reachable_cities: usize,
    timing_in_seconds: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    ensure!(args.number_of_sources > 0, "need at least one source");
    ensure!(args.max_distance > 0, "max distance must be at least one");

    println!(
        "Building a random map with {} cities and up to {} roads",
        args.cities, args.roads
    );
    let map = random_city_map(args.cities, args.roads, args.max_distance, args.seed)?;
    println!("Map holds {} distinct roads", map.road_count());

    let mut rng = StdRng::seed_from_u64(args.seed.wrapping_add(1));
    let sources: Vec<Vertex> = (0..args.number_of_sources)
        .map(|_| rng.gen_range(0..map.city_count()) as Vertex)
        .collect();

    let mut results = Vec::with_capacity(sources.len());
    for &source in sources
        .iter()
        .progress_with(get_progressbar("Querying & validating", sources.len() as u64))
    {
        let start = Instant::now();
        let tree = shortest_path_tree(&map, source)?;
        let timing_in_seconds = start.elapsed().as_secs_f64();

        validate_tree(&map, &tree).map_err(|violation| anyhow!("source {source}: {violation}"))?;

        let reachable_cities = tree
            .distances()
            .iter()
            .filter(|distance| distance.is_finite())
            .count();
        results.push(SourceTimingResult {
            source,
            reachable_cities,
            timing_in_seconds,
        });
    }

    let average: f64 = results
        .iter()
        .map(|result| result.timing_in_seconds)
        .sum::<f64>()
        / results.len() as f64;
    let average = Duration::from_secs_f64(average);

    println!(
        "All trees valid. Took {:?} per query averaged over {} queries",
        average,
        results.len()
    );

    if let Some(timing_results) = args.timing_results {
        println!("Writing timing results");
        let file = File::create(&timing_results)
            .with_context(|| format!("creating {}", timing_results.display()))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer(writer, &results)?;
    }

    Ok(())
}
