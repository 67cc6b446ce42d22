//! Route lists: parsing `(source, destination, weight)` triples and loading
//! them into a graph.

use crate::error::{Error, Result};
use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// One directed, weighted link between two named sites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub source: String,
    pub destination: String,
    pub weight: u32,
}

impl Route {
    pub fn new<S: Into<String>, D: Into<String>>(source: S, destination: D, weight: u32) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            weight,
        }
    }
}

/// Parse a textual route list.
///
/// Two notations are accepted and may be mixed line by line:
/// - compact tokens such as `AB5`, separated by commas or whitespace, where
///   both site names are a single character;
/// - `source destination weight` lines of three whitespace-separated fields,
///   for longer names. A line is read this way only if it has no comma and
///   its third field is a bare number.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_routes(text: &str) -> Result<Vec<Route>> {
    let mut routes = Vec::new();
    for line in text.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if !line.contains(',') && fields.len() == 3 && is_digits(fields[2]) {
            routes.push(Route::new(fields[0], fields[1], parse_weight(line, fields[2])?));
            continue;
        }

        for token in line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            routes.push(parse_compact(token)?);
        }
    }
    debug!(count = routes.len(), "parsed routes");
    Ok(routes)
}

/// Parse a JSON array of `{"source", "destination", "weight"}` objects.
pub fn parse_route_json(text: &str) -> Result<Vec<Route>> {
    Ok(serde_json::from_str(text)?)
}

/// Read a route file; `.json` files are parsed as JSON, anything else as text.
pub fn load_routes(path: &Path) -> Result<Vec<Route>> {
    let text = fs::read_to_string(path)?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_route_json(&text),
        _ => parse_routes(&text),
    }
}

/// Split a stop list such as `A-B-C` or `A,B,C` into site names.
pub fn parse_stops(text: &str) -> Result<Vec<String>> {
    let stops: Vec<String> = text
        .split(['-', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    if stops.len() < 2 {
        return Err(Error::RouteTooShort { stops: stops.len() });
    }
    Ok(stops)
}

fn parse_compact(token: &str) -> Result<Route> {
    let mut chars = token.chars();
    let (Some(source), Some(destination)) = (chars.next(), chars.next()) else {
        return Err(Error::invalid_route(token, "expected two site letters and a weight"));
    };
    let weight = parse_weight(token, chars.as_str())?;
    Ok(Route::new(source, destination, weight))
}

fn is_digits(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit())
}

fn parse_weight(token: &str, digits: &str) -> Result<u32> {
    if digits.is_empty() {
        return Err(Error::invalid_route(token, "missing weight"));
    }
    digits
        .parse()
        .map_err(|_| Error::invalid_route(token, format!("weight '{digits}' is not a number")))
}

impl Graph<String> {
    /// Build a graph from routes.
    ///
    /// Sites are inserted in first-seen order. The graph holds at least as
    /// many vertices as the routes mention, more if `capacity` asks for it.
    /// Repeated links keep their first weight; later ones are skipped.
    pub fn from_routes(routes: &[Route], capacity: Option<usize>) -> Result<Self> {
        let mut sites: Vec<String> = Vec::new();
        for route in routes {
            for site in [&route.source, &route.destination] {
                if !sites.contains(site) {
                    sites.push(site.clone());
                }
            }
        }

        let mut graph = Graph::with_capacity(capacity.unwrap_or(0).max(sites.len()))?;
        if sites.is_empty() {
            return Ok(graph);
        }
        graph.add_vertices(sites)?;

        for route in routes {
            match graph.add_edge(&route.source, &route.destination, route.weight) {
                Ok(()) => {}
                Err(e @ Error::DuplicateEdge { .. }) => warn!("skipping route: {e}"),
                Err(e) => return Err(e),
            }
        }
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "built graph from routes"
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_compact_list() {
        let routes = parse_routes("AB5, BC4, CD8").unwrap();
        assert_eq!(routes.len(), 3);
        assert_eq!(routes[0], Route::new("A", "B", 5));
        assert_eq!(routes[2], Route::new("C", "D", 8));
    }

    #[test]
    fn test_parse_multi_digit_weight() {
        let routes = parse_routes("AB15 CA120").unwrap();
        assert_eq!(routes[0].weight, 15);
        assert_eq!(routes[1].weight, 120);

        // three compact tokens on one line are not a field line
        assert_eq!(parse_routes("AB5 BC4 CD8").unwrap().len(), 3);
    }

    #[test]
    fn test_parse_field_lines() {
        let text = "# sites\nLeeds York 25\n\nYork Hull 38\n";
        let routes = parse_routes(text).unwrap();
        assert_eq!(
            routes,
            vec![Route::new("Leeds", "York", 25), Route::new("York", "Hull", 38)]
        );
    }

    #[test]
    fn test_parse_invalid_tokens() {
        assert!(matches!(
            parse_routes("AB"),
            Err(Error::InvalidRoute { .. })
        ));
        assert!(matches!(
            parse_routes("ABx"),
            Err(Error::InvalidRoute { .. })
        ));
        assert!(matches!(
            parse_routes("A"),
            Err(Error::InvalidRoute { .. })
        ));
    }

    #[test]
    fn test_parse_json() {
        let text = r#"[{"source": "A", "destination": "B", "weight": 5}]"#;
        let routes = parse_route_json(text).unwrap();
        assert_eq!(routes, vec![Route::new("A", "B", 5)]);
        assert!(matches!(parse_route_json("[{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_load_routes_by_extension() {
        let mut text_file = NamedTempFile::new().unwrap();
        write!(text_file, "AB5, BC4").unwrap();
        assert_eq!(load_routes(text_file.path()).unwrap().len(), 2);

        let mut json_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(json_file, r#"[{{"source":"A","destination":"B","weight":5}}]"#).unwrap();
        assert_eq!(load_routes(json_file.path()).unwrap().len(), 1);
    }

    #[test]
    fn test_parse_stops() {
        assert_eq!(parse_stops("A-E-B-C-D").unwrap(), vec!["A", "E", "B", "C", "D"]);
        assert_eq!(parse_stops("A, B").unwrap(), vec!["A", "B"]);
        assert!(matches!(
            parse_stops("A"),
            Err(Error::RouteTooShort { stops: 1 })
        ));
    }

    #[test]
    fn test_graph_from_routes() {
        let routes = parse_routes("AB5, BC4, AB7, CA2").unwrap();
        let graph = Graph::from_routes(&routes, None).unwrap();

        assert_eq!(graph.capacity(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.first_vertex().map(String::as_str), Some("A"));
        assert_eq!(
            graph
                .edge_weight(&"A".to_string(), &"B".to_string())
                .unwrap(),
            5
        );
    }

    #[test]
    fn test_graph_from_routes_capacity() {
        let routes = parse_routes("AB5").unwrap();
        let mut graph = Graph::from_routes(&routes, Some(4)).unwrap();
        assert_eq!(graph.capacity(), 4);
        assert!(graph.add_vertex("C".to_string()).is_ok());
    }

    #[test]
    fn test_graph_from_routes_capacity_too_large() {
        let routes = parse_routes("AB5").unwrap();
        assert!(matches!(
            Graph::from_routes(&routes, Some(usize::MAX)),
            Err(Error::CapacityTooLarge { .. })
        ));
    }

    #[test]
    fn test_graph_from_routes_rejects_zero_weight() {
        let routes = parse_routes("AB0").unwrap();
        assert!(matches!(
            Graph::from_routes(&routes, None),
            Err(Error::InvalidWeight { .. })
        ));
    }
}
