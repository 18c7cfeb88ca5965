use std::io::{self, BufRead, Write};

use ahash::{HashMap, HashMapExt};
use anyhow::{Context, Result};
use city_paths::{
    graphs::{city_map::CityMap, Vertex},
    search::dijkstra::{shortest_path_tree, ShortestPathTree},
};
use itertools::Itertools;

fn main() -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut map = prompt_city_map(&mut lines)?;
    prompt_city_names(&mut lines, &mut map)?;
    prompt_roads(&mut lines, &mut map)?;

    let names = name_index(&map);

    loop {
        println!();
        println!("==== City Navigation Menu ====");
        println!("1. Show distance matrix");
        println!("2. Find shortest paths from a city");
        println!("3. Exit");

        match prompt(&mut lines, "Enter your choice: ")?.as_str() {
            "1" => print_matrix(&map),
            "2" => {
                let source = prompt_source(&mut lines, &map, &names)?;
                let tree = shortest_path_tree(&map, source)?;
                print_shortest_paths(&map, &tree);
            }
            "3" => break,
            _ => println!("Invalid choice."),
        }
    }

    println!("Exiting.");
    Ok(())
}

fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let line = lines
        .next()
        .context("input ended before the menu was exited")??;
    Ok(line.trim().to_string())
}

fn prompt_city_map(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<CityMap> {
    loop {
        let answer = prompt(lines, "Enter number of cities: ")?;
        let city_count: usize = match answer.parse() {
            Ok(count) => count,
            Err(_) => {
                println!("Expected a number, got {answer:?}.");
                continue;
            }
        };

        match CityMap::new(city_count) {
            Ok(map) => return Ok(map),
            Err(error) => println!("{error}"),
        }
    }
}

fn prompt_city_names(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    map: &mut CityMap,
) -> Result<()> {
    for city in 0..map.city_count() as Vertex {
        let name = prompt(lines, &format!("Enter name for city {city}: "))?;
        map.set_city_name(city, &name)?;
    }

    Ok(())
}

fn prompt_roads(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    map: &mut CityMap,
) -> Result<()> {
    let road_count = loop {
        let answer = prompt(lines, "Enter number of roads: ")?;
        match answer.parse::<usize>() {
            Ok(count) => break count,
            Err(_) => println!("Expected a number, got {answer:?}."),
        }
    };

    let mut inserted = 0;
    while inserted < road_count {
        let answer = prompt(
            lines,
            &format!(
                "Enter road {} (from_index to_index distance): ",
                inserted + 1
            ),
        )?;

        let Some((a, b, distance)) = parse_road(&answer) else {
            println!("Expected three values: from_index to_index distance.");
            continue;
        };

        match map.add_road(a, b, distance) {
            Ok(()) => inserted += 1,
            Err(error) => println!("{error}"),
        }
    }

    Ok(())
}

fn parse_road(line: &str) -> Option<(Vertex, Vertex, f64)> {
    let mut fields = line.split_whitespace();
    let a = fields.next()?.parse().ok()?;
    let b = fields.next()?.parse().ok()?;
    let distance = fields.next()?.parse().ok()?;

    if fields.next().is_some() {
        return None;
    }

    Some((a, b, distance))
}

/// Duplicate names keep the lowest index, since identity is positional.
fn name_index(map: &CityMap) -> HashMap<String, Vertex> {
    let mut names = HashMap::new();
    for city in map.cities() {
        if let Some(name) = map.city_name(city) {
            if !name.is_empty() {
                names.entry(name.to_string()).or_insert(city);
            }
        }
    }

    names
}

fn prompt_source(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    map: &CityMap,
    names: &HashMap<String, Vertex>,
) -> Result<Vertex> {
    loop {
        let answer = prompt(lines, "Enter source city (index or name): ")?;

        if let Ok(city) = answer.parse::<Vertex>() {
            if map.contains(city) {
                return Ok(city);
            }
        }
        if let Some(&city) = names.get(&answer) {
            return Ok(city);
        }

        println!("No city matches {answer:?}.");
    }
}

fn print_matrix(map: &CityMap) {
    println!();
    println!("Distance matrix:");
    for city in map.cities() {
        if let Some(row) = map.distance_row(city) {
            let cells = row
                .iter()
                .map(|&distance| {
                    if distance.is_finite() {
                        distance.to_string()
                    } else {
                        "INF".to_string()
                    }
                })
                .join("\t");
            println!("{cells}");
        }
    }
}

fn print_shortest_paths(map: &CityMap, tree: &ShortestPathTree) {
    println!();
    println!("Shortest paths from {}:", display_name(map, tree.source()));

    for city in map.cities() {
        if city == tree.source() {
            continue;
        }

        match tree.path_to(city) {
            Some(path) => {
                let chain = path
                    .vertices
                    .iter()
                    .map(|&stop| display_name(map, stop))
                    .join(" -> ");
                println!(
                    "To {} - Distance: {} - Path: {}",
                    display_name(map, city),
                    path.distance,
                    chain
                );
            }
            None => println!("To {} - unreachable", display_name(map, city)),
        }
    }
}

fn display_name(map: &CityMap, city: Vertex) -> String {
    match map.city_name(city) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("city {city}"),
    }
}
