//! Map-marker clustering for event discovery.
//!
//! `poppin_cluster` turns a list of geolocated events into the markers a map
//! view draws: nearby events are grouped into clusters, each placed on the
//! mean coordinate of its members.
//!
//! The public API is split into:
//! - [`cluster`]: the seed-anchored clustering pass and the haversine distance
//! - [`zoom`]: zoom-level and color lookups driven by cluster size or map zoom
//! - [`viewport`]: filtering clusters to the visible rectangle and ranking them
//!
//! Every operation is a pure function of its inputs.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod viewport;
pub mod zoom;

pub use cluster::{
    cluster_events, haversine_km, Cluster, ClusterParams, EventLocation, Geolocated,
    SeedClusterer, EARTH_RADIUS_KM,
};
pub use error::{Error, Result};
pub use viewport::{
    filter_clusters_by_bounds, sort_clusters_by_relevance, sort_clusters_by_relevance_in_place,
    Bounds, MapView,
};
pub use zoom::{cluster_color, cluster_zoom, clustering_distance, ClusterColor};
