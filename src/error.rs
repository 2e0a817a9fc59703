use thiserror::Error;

/// Top-level error type for the hexalis grid library.
#[derive(Debug, Error)]
pub enum HexalisError {
    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Errors related to grid topology queries.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("cells {center} and {other} are not adjacent")]
    NotAdjacent { center: String, other: String },
}

/// Convenience type alias for results using [`HexalisError`].
pub type Result<T> = std::result::Result<T, HexalisError>;
