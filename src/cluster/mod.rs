//! Grouping nearby events into map markers.
//!
//! A map showing every event as its own pin becomes unreadable once a few
//! dozen events share a neighborhood. This module groups events that sit
//! within a radius of each other into a single [`Cluster`] whose marker is
//! placed on the members' mean coordinate.
//!
//! ## Distances
//!
//! All distances are great-circle distances on a sphere of radius
//! [`EARTH_RADIUS_KM`], computed with the haversine formula
//! ([`haversine_km`]).
//!
//! ## Algorithm
//!
//! [`SeedClusterer`] runs a single greedy pass: the first unassigned event
//! becomes a seed and absorbs every unassigned event within the radius of
//! that seed. See the `seed` module docs for the exact ordering rules.
//!
//! ## Usage
//!
//! ```rust
//! use poppin_cluster::cluster::{ClusterParams, EventLocation, SeedClusterer};
//!
//! let events = vec![
//!     EventLocation::new("jazz", 40.7580, -73.9855),
//!     EventLocation::new("comedy", 40.7585, -73.9850),
//!     EventLocation::new("market", 40.6782, -73.9442),
//! ];
//!
//! let clusterer = SeedClusterer::new(ClusterParams::default());
//! let clusters = clusterer.cluster(&events);
//!
//! assert_eq!(clusters.len(), 2);
//! assert_eq!(clusters[0].ids(), vec!["jazz", "comedy"]);
//! assert!(clusters[1].is_singleton());
//! ```

mod seed;
mod traits;
mod types;
mod util;

pub use seed::{
    cluster_events, ClusterParams, SeedClusterer, DEFAULT_MAX_DISTANCE_KM,
    DEFAULT_MIN_CLUSTER_SIZE,
};
pub use traits::Geolocated;
pub use types::{Cluster, EventLocation};
pub use util::{haversine_km, EARTH_RADIUS_KM};
