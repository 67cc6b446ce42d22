//! routegraph - route graph queries from the command line.

use std::process;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = routegraph::cli::run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
