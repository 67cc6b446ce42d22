//! Command-line interface for route graph queries.

pub mod output;

use crate::graph::{self, Graph, Paths};
use crate::routes::{self, Route};
use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use output::Format;
use std::path::PathBuf;

/// routegraph - queries over a network of one-way weighted routes
#[derive(Parser, Debug)]
#[command(name = "routegraph")]
#[command(about = "Distances, route counts and shortest paths over a weighted route graph", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub source: GraphSource,

    /// Vertex capacity of the graph (defaults to the number of sites)
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Where the route list comes from.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct GraphSource {
    /// Route list file (`.json` for a JSON array, text otherwise)
    #[arg(short, long)]
    pub routes: Option<PathBuf>,

    /// Inline route list, e.g. "AB5, BC4, CD8"
    #[arg(short, long)]
    pub graph: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Total distance along a fixed sequence of stops
    Distance {
        /// Stops separated by '-' or ',', e.g. A-B-C
        stops: String,
    },

    /// Count distinct routes between two sites
    Count {
        /// Starting site
        #[arg(long)]
        from: String,
        /// Final site
        #[arg(long)]
        to: String,
        /// Only routes with exactly this many stops
        #[arg(long, conflicts_with = "max_stops")]
        stops: Option<usize>,
        /// Only routes with at most this many stops
        #[arg(long)]
        max_stops: Option<usize>,
        /// Also count routes that loop once around the final site
        #[arg(long)]
        with_cycles: bool,
        /// List the routes, not just the count
        #[arg(long)]
        list: bool,
    },

    /// Elementary round trips starting and ending at a site
    Cycles {
        /// Site to start from
        #[arg(long)]
        at: String,
        /// Only round trips with at most this many stops
        #[arg(long)]
        max_stops: Option<usize>,
        /// List the round trips, not just the count
        #[arg(long)]
        list: bool,
    },

    /// Count round trips at a site with total distance below a limit
    Within {
        /// Site to start from
        #[arg(long)]
        at: String,
        /// Exclusive upper bound on the total distance
        #[arg(long)]
        limit: u64,
        /// List the round trips, not just the count
        #[arg(long)]
        list: bool,
    },

    /// Shortest route between two sites (a round trip when both are equal)
    Shortest {
        /// Starting site
        #[arg(long)]
        from: String,
        /// Final site
        #[arg(long)]
        to: String,
    },

    /// Shortest distance between every pair of sites
    AllPairs,

    /// Show the loaded sites and routes
    Edges,
}

/// Parse arguments and run the requested query.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    execute(cli)
}

/// Run a parsed command line.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let routes = load(&cli.source)?;
    let graph = Graph::from_routes(&routes, cli.capacity)?;
    let format = if cli.json { Format::Json } else { Format::Text };

    match cli.command {
        Command::Distance { stops } => {
            let stops = routes::parse_stops(&stops)?;
            let distance = graph.sum_consecutive_weights(&stops)?;
            output::print_distance(format, &stops, distance)
        }
        Command::Count {
            from,
            to,
            stops,
            max_stops,
            with_cycles,
            list,
        } => {
            let paths = graph::all_paths(&graph, &from, &to, with_cycles)?;
            let paths = filter_stops(&paths, stops, max_stops);
            output::print_paths(format, &paths, list)
        }
        Command::Cycles {
            at,
            max_stops,
            list,
        } => {
            let cycles = graph::all_cyclic_paths(&graph, &at, true)?;
            let cycles = filter_stops(&cycles, None, max_stops);
            output::print_paths(format, &cycles, list)
        }
        Command::Within { at, limit, list } => {
            let walks = graph::limited_cyclic_paths(&graph, &at, limit)?;
            output::print_paths(format, &walks, list)
        }
        Command::Shortest { from, to } => {
            if from == to {
                let distance = graph::shortest_cyclic_distance(&graph, &from)?;
                output::print_shortest_cycle(format, &from, distance)
            } else {
                let path = graph::shortest_path(&graph, &from, &to)?;
                output::print_shortest(format, &path)
            }
        }
        Command::AllPairs => {
            let table = graph::all_pairs_shortest(&graph);
            output::print_all_pairs(format, &graph, &table)
        }
        Command::Edges => output::print_edges(format, &graph),
    }
}

fn load(source: &GraphSource) -> anyhow::Result<Vec<Route>> {
    let routes = match (&source.routes, &source.graph) {
        (Some(path), _) => routes::load_routes(path)
            .with_context(|| format!("failed to load routes from {}", path.display()))?,
        (None, Some(text)) => routes::parse_routes(text)?,
        (None, None) => bail!("no routes given: use --routes <FILE> or --graph <ROUTES>"),
    };
    if routes.is_empty() {
        bail!("the route list is empty");
    }
    Ok(routes)
}

/// Keep paths by stop count (sequence length minus one). A route makes at
/// least one stop, so the bare `[site]` path is always dropped.
fn filter_stops(paths: &Paths<String>, exact: Option<usize>, max: Option<usize>) -> Paths<String> {
    paths.filter_len(|len| {
        let stops = len.saturating_sub(1);
        stops >= 1 && exact.is_none_or(|n| stops == n) && max.is_none_or(|n| stops <= n)
    })
}
