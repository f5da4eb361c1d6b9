use thiserror::Error;

/// Errors returned by the validating constructors in this crate.
///
/// The clustering operations themselves are total and never return these.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Coordinate is non-finite or outside the latitude/longitude ranges.
    #[error("invalid coordinate: lat {lat}, lng {lng}")]
    InvalidCoordinate {
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lng: f64,
    },

    /// Viewport rectangle is inverted or has non-finite edges.
    #[error("invalid bounds: north {north}, south {south}, east {east}, west {west}")]
    InvalidBounds {
        /// Northern edge (max latitude).
        north: f64,
        /// Southern edge (min latitude).
        south: f64,
        /// Eastern edge (max longitude).
        east: f64,
        /// Western edge (min longitude).
        west: f64,
    },

    /// Other error.
    #[error("{0}")]
    Other(String),
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
