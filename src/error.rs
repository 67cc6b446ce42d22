use std::io;
use thiserror::Error;

/// Error type for route graph operations
#[derive(Error, Debug)]
pub enum Error {
    /// Operation references a vertex absent from the graph
    #[error("Vertex {vertex} not found")]
    VertexNotFound { vertex: String },

    /// Vertex is already present in the graph
    #[error("Vertex {vertex} already exists")]
    DuplicateVertex { vertex: String },

    /// Weight or edge lookup on a non-existent edge
    #[error("Edge {from} -> {to} not found")]
    EdgeNotFound { from: String, to: String },

    /// Vertex insertion beyond the capacity fixed at construction
    #[error("Graph capacity of {capacity} vertices exhausted")]
    CapacityExceeded { capacity: usize },

    /// Requested capacity would make the weight matrix too large
    #[error("Graph capacity {capacity} exceeds the maximum of {max}")]
    CapacityTooLarge { capacity: usize, max: usize },

    /// Edge already exists; it must be removed before re-adding
    #[error("Edge {from} -> {to} already exists")]
    DuplicateEdge { from: String, to: String },

    /// No path between the requested vertices
    #[error("No route from {from} to {to}")]
    NoRoute { from: String, to: String },

    /// Zero is reserved as the "no edge" sentinel
    #[error("Invalid weight {weight} for edge {from} -> {to}: weights must be positive")]
    InvalidWeight {
        from: String,
        to: String,
        weight: u32,
    },

    /// Bulk operation given an empty input
    #[error("Empty input for {operation}")]
    NullInput { operation: &'static str },

    /// A weight sum needs at least two stops
    #[error("A route needs at least 2 stops, got {stops}")]
    RouteTooShort { stops: usize },

    /// Malformed route list token
    #[error("Invalid route '{token}': {reason}")]
    InvalidRoute { token: String, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for route graph operations
pub type Result<T> = std::result::Result<T, Error>;

/// Constructors taking any debuggable vertex, so error messages stay readable
/// regardless of the vertex type.
impl Error {
    pub fn vertex_not_found<V: std::fmt::Debug>(vertex: &V) -> Self {
        Error::VertexNotFound {
            vertex: format!("{vertex:?}"),
        }
    }

    pub fn duplicate_vertex<V: std::fmt::Debug>(vertex: &V) -> Self {
        Error::DuplicateVertex {
            vertex: format!("{vertex:?}"),
        }
    }

    pub fn edge_not_found<V: std::fmt::Debug>(source: &V, destination: &V) -> Self {
        Error::EdgeNotFound {
            from: format!("{source:?}"),
            to: format!("{destination:?}"),
        }
    }

    pub fn duplicate_edge<V: std::fmt::Debug>(source: &V, destination: &V) -> Self {
        Error::DuplicateEdge {
            from: format!("{source:?}"),
            to: format!("{destination:?}"),
        }
    }

    pub fn no_route<V: std::fmt::Debug>(source: &V, destination: &V) -> Self {
        Error::NoRoute {
            from: format!("{source:?}"),
            to: format!("{destination:?}"),
        }
    }

    pub fn invalid_weight<V: std::fmt::Debug>(source: &V, destination: &V, weight: u32) -> Self {
        Error::InvalidWeight {
            from: format!("{source:?}"),
            to: format!("{destination:?}"),
            weight,
        }
    }

    pub fn invalid_route<S: Into<String>, R: Into<String>>(token: S, reason: R) -> Self {
        Error::InvalidRoute {
            token: token.into(),
            reason: reason.into(),
        }
    }
}
