//! Output formatting for the CLI.

use crate::graph::{Distances, Graph, Path, Paths, RouteDistance};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct DistanceReport<'a> {
    stops: &'a [String],
    distance: RouteDistance,
}

#[derive(Serialize)]
struct PathsReport {
    count: usize,
    paths: Vec<Path<String>>,
}

#[derive(Serialize)]
struct CycleReport<'a> {
    at: &'a str,
    distance: u64,
}

#[derive(Serialize)]
struct EdgeReport<'a> {
    vertices: Vec<&'a String>,
    edges: Vec<crate::graph::Edge<'a, String>>,
}

/// Render a route as `A → B → C`.
fn format_route<V: Display>(vertices: &[V]) -> String {
    vertices
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the weight sum of a stop sequence, or `NO SUCH ROUTE`.
pub fn print_distance(
    format: Format,
    stops: &[String],
    distance: RouteDistance,
) -> anyhow::Result<()> {
    match format {
        Format::Json => print_json(&DistanceReport { stops, distance }),
        Format::Text => {
            println!("{distance}");
            Ok(())
        }
    }
}

/// Print a path count, optionally followed by the paths themselves.
pub fn print_paths(format: Format, paths: &Paths<String>, list: bool) -> anyhow::Result<()> {
    let sorted = paths.to_sorted_vec();
    match format {
        Format::Json => print_json(&PathsReport {
            count: sorted.len(),
            paths: sorted,
        }),
        Format::Text => {
            println!("{}", sorted.len());
            if list {
                for path in &sorted {
                    println!("  {} ({})", format_route(&path.vertices), path.weight);
                }
            }
            Ok(())
        }
    }
}

/// Print the shortest route between two different sites.
pub fn print_shortest(format: Format, path: &Path<String>) -> anyhow::Result<()> {
    match format {
        Format::Json => print_json(path),
        Format::Text => {
            println!("{}", path.weight);
            println!("  {}", format_route(&path.vertices));
            Ok(())
        }
    }
}

/// Print the shortest round trip through a site.
pub fn print_shortest_cycle(format: Format, at: &str, distance: u64) -> anyhow::Result<()> {
    match format {
        Format::Json => print_json(&CycleReport { at, distance }),
        Format::Text => {
            println!("{distance}");
            Ok(())
        }
    }
}

/// Print the all-pairs distance table, rows and columns in slot order.
/// Unreachable pairs show as `-` in text and are omitted from JSON.
pub fn print_all_pairs(
    format: Format,
    graph: &Graph<String>,
    table: &HashMap<String, Distances<String>>,
) -> anyhow::Result<()> {
    match format {
        Format::Json => {
            let ordered: BTreeMap<&String, BTreeMap<&String, u64>> = table
                .iter()
                .map(|(from, row)| (from, row.iter().map(|(to, d)| (to, *d)).collect()))
                .collect();
            print_json(&ordered)
        }
        Format::Text => {
            let sites: Vec<&String> = graph.vertices().collect();
            let width = sites.iter().map(|s| s.len()).max().unwrap_or(1).max(4);

            print!("{:width$}", "");
            for site in &sites {
                print!(" {site:>width$}");
            }
            println!();

            for from in &sites {
                print!("{from:width$}");
                for to in &sites {
                    match table.get(*from).and_then(|row| row.get(*to)) {
                        Some(d) => print!(" {d:>width$}"),
                        None => print!(" {:>width$}", "-"),
                    }
                }
                println!();
            }
            Ok(())
        }
    }
}

/// Print every site and route of the loaded graph.
pub fn print_edges(format: Format, graph: &Graph<String>) -> anyhow::Result<()> {
    match format {
        Format::Json => print_json(&EdgeReport {
            vertices: graph.vertices().collect(),
            edges: graph.edges().collect(),
        }),
        Format::Text => {
            println!(
                "{} sites, {} routes (capacity {})",
                graph.vertex_count(),
                graph.edge_count(),
                graph.capacity()
            );
            for edge in graph.edges() {
                println!("  {} → {} ({})", edge.source, edge.destination, edge.weight);
            }
            Ok(())
        }
    }
}
