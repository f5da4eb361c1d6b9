//! Seed-anchored greedy grouping.
//!
//! # The Algorithm
//!
//! Events are visited in input order. The first event not yet assigned
//! becomes a *seed*; every other unassigned event within `max_distance_km`
//! of the seed (haversine) joins the seed's group. The group's marker sits on
//! the mean latitude and mean longitude of its members.
//!
//! ```text
//! for seed in events (input order):
//!     if assigned(seed): continue
//!     group = [seed] + [o for o in events if !assigned(o) && d(seed, o) <= r]
//!     emit group
//! ```
//!
//! ## Not DBSCAN
//!
//! Membership is measured against the seed only. Two members of a group may
//! be up to `2r` apart, and an event absorbed into a group never seeds its
//! own, even if it has neighbors the seed cannot reach. The result depends on
//! input order but is fully deterministic for a fixed order.
//!
//! ## Small groups
//!
//! A group smaller than `min_cluster_size` is not reported. The seed is
//! emitted alone, centered exactly on its own coordinates, and the
//! neighbors it tentatively gathered stay unassigned so they can seed or
//! join later groups. With the default `min_cluster_size = 2` a small group
//! is always just the seed, so nothing is released.
//!
//! ## Complexity
//!
//! - **Time**: O(n²) distance evaluations in the worst case.
//! - **Space**: O(n).
//!
//! Pre-filter by viewport before clustering tens of thousands of events.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::traits::Geolocated;
use super::types::Cluster;
use super::util;
use crate::error::{Error, Result};

/// Default clustering radius in kilometers.
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 0.5;

/// Default minimum member count for a multi-event cluster.
pub const DEFAULT_MIN_CLUSTER_SIZE: usize = 2;

/// Clustering parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClusterParams {
    /// Radius around a seed, in kilometers. Inclusive.
    pub max_distance_km: f64,

    /// Minimum group size reported as one multi-event cluster.
    pub min_cluster_size: usize,
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self {
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
            min_cluster_size: DEFAULT_MIN_CLUSTER_SIZE,
        }
    }
}

impl ClusterParams {
    /// Set the clustering radius.
    pub fn with_max_distance_km(mut self, max_distance_km: f64) -> Self {
        self.max_distance_km = max_distance_km;
        self
    }

    /// Set the minimum cluster size.
    pub fn with_min_cluster_size(mut self, min_cluster_size: usize) -> Self {
        self.min_cluster_size = min_cluster_size;
        self
    }

    /// Check that the radius is finite and non-negative and the minimum size is at least 1.
    pub fn validate(&self) -> Result<()> {
        if !self.max_distance_km.is_finite() || self.max_distance_km < 0.0 {
            warn!(max_distance_km = self.max_distance_km, "invalid clustering radius");
            return Err(Error::InvalidParameter {
                name: "max_distance_km",
                message: "must be finite and non-negative",
            });
        }
        if self.min_cluster_size == 0 {
            warn!("invalid minimum cluster size 0");
            return Err(Error::InvalidParameter {
                name: "min_cluster_size",
                message: "must be at least 1",
            });
        }
        Ok(())
    }
}

/// Seed-anchored event clusterer.
///
/// Holds no state between calls; one value can be shared across map views.
#[derive(Debug, Clone, Default)]
pub struct SeedClusterer {
    params: ClusterParams,
}

impl SeedClusterer {
    /// Create a clusterer. Parameters are not validated; see [`SeedClusterer::try_new`].
    pub fn new(params: ClusterParams) -> Self {
        Self { params }
    }

    /// Create a clusterer, rejecting parameters that fail [`ClusterParams::validate`].
    pub fn try_new(params: ClusterParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// The configured parameters.
    pub fn params(&self) -> &ClusterParams {
        &self.params
    }

    /// Group events into clusters, in discovery order.
    ///
    /// Every input event lands in exactly one output cluster.
    pub fn cluster<E: Geolocated + Clone>(&self, events: &[E]) -> Vec<Cluster<E>> {
        let groups = self.groups(events);

        let clusters: Vec<Cluster<E>> = groups
            .into_iter()
            .filter_map(|group| {
                let members: Vec<E> = group.iter().map(|&i| events[i].clone()).collect();
                Cluster::from_members(members)
            })
            .collect();

        for (i, c) in clusters.iter().enumerate() {
            trace!(cluster = i, count = c.count(), center = ?c.center(), "emitted cluster");
        }
        debug!(
            events = events.len(),
            clusters = clusters.len(),
            max_distance_km = self.params.max_distance_km,
            min_cluster_size = self.params.min_cluster_size,
            "clustered events"
        );

        clusters
    }

    /// One cluster index per input event, numbered in discovery order.
    pub fn labels<E: Geolocated>(&self, events: &[E]) -> Vec<usize> {
        let mut labels = vec![0; events.len()];
        for (label, group) in self.groups(events).into_iter().enumerate() {
            for i in group {
                labels[i] = label;
            }
        }
        labels
    }

    /// Index groups, seed first, then absorbed neighbors in input order.
    fn groups<E: Geolocated>(&self, events: &[E]) -> Vec<Vec<usize>> {
        let n = events.len();
        let mut processed = vec![false; n];
        let mut groups: Vec<Vec<usize>> = Vec::new();

        for seed in 0..n {
            if processed[seed] {
                continue;
            }
            processed[seed] = true;

            let mut group = vec![seed];
            for other in 0..n {
                if processed[other] {
                    continue;
                }
                let d = util::distance_between(&events[seed], &events[other]);
                if d <= self.params.max_distance_km {
                    group.push(other);
                    processed[other] = true;
                }
            }

            if group.len() < self.params.min_cluster_size {
                // Release gathered neighbors; only the seed is emitted.
                for &i in &group[1..] {
                    processed[i] = false;
                }
                group.truncate(1);
            }

            groups.push(group);
        }

        groups
    }
}

/// Cluster `events` with the given radius (km) and minimum cluster size.
///
/// Shorthand for `SeedClusterer::new(..).cluster(events)`. The usual call is
/// `cluster_events(&events, DEFAULT_MAX_DISTANCE_KM, DEFAULT_MIN_CLUSTER_SIZE)`.
///
/// ```rust
/// use poppin_cluster::{cluster_events, EventLocation};
///
/// let events = vec![
///     EventLocation::new("a", 40.0, -73.0),
///     EventLocation::new("b", 40.001, -73.001),
///     EventLocation::new("c", 41.0, -74.0),
/// ];
/// let clusters = cluster_events(&events, 0.5, 2);
/// assert_eq!(clusters.len(), 2);
/// assert_eq!(clusters[0].count(), 2);
/// assert_eq!(clusters[1].center(), [41.0, -74.0]);
/// ```
pub fn cluster_events<E: Geolocated + Clone>(
    events: &[E],
    max_distance_km: f64,
    min_cluster_size: usize,
) -> Vec<Cluster<E>> {
    SeedClusterer::new(ClusterParams {
        max_distance_km,
        min_cluster_size,
    })
    .cluster(events)
}
