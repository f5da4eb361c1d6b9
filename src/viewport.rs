//! Viewport filtering and ranking of clusters.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cluster::{Cluster, ClusterParams, Geolocated, SeedClusterer};
use crate::error::{Error, Result};
use crate::zoom::clustering_distance;

/// Axis-aligned lat/lng rectangle of the visible map area, in degrees.
///
/// Does not wrap across the antimeridian: `west` must be the smaller longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Max latitude.
    pub north: f64,
    /// Min latitude.
    pub south: f64,
    /// Max longitude.
    pub east: f64,
    /// Min longitude.
    pub west: f64,
}

impl Bounds {
    /// Create bounds without checking edge order.
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    /// Create bounds, rejecting non-finite edges or `south > north` / `west > east`.
    pub fn try_new(north: f64, south: f64, east: f64, west: f64) -> Result<Self> {
        let finite = [north, south, east, west].iter().all(|v| v.is_finite());
        if !finite || south > north || west > east {
            warn!(north, south, east, west, "rejecting viewport bounds");
            return Err(Error::InvalidBounds {
                north,
                south,
                east,
                west,
            });
        }
        Ok(Self::new(north, south, east, west))
    }

    /// Inclusive containment test.
    #[inline]
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.south && lat <= self.north && lng >= self.west && lng <= self.east
    }
}

/// Clusters whose center lies inside `bounds`, in input order.
pub fn filter_clusters_by_bounds<E: Clone>(
    clusters: &[Cluster<E>],
    bounds: &Bounds,
) -> Vec<Cluster<E>> {
    clusters
        .iter()
        .filter(|c| {
            let [lat, lng] = c.center();
            bounds.contains(lat, lng)
        })
        .cloned()
        .collect()
}

/// Sort by member count descending, then by distance from `(center_lat, center_lng)` ascending.
///
/// Takes and returns ownership so the caller's ordering is never changed behind
/// its back. Use [`sort_clusters_by_relevance_in_place`] to reorder a slice.
pub fn sort_clusters_by_relevance<E: Geolocated>(
    mut clusters: Vec<Cluster<E>>,
    center_lat: f64,
    center_lng: f64,
) -> Vec<Cluster<E>> {
    sort_clusters_by_relevance_in_place(&mut clusters, center_lat, center_lng);
    clusters
}

/// In-place variant of [`sort_clusters_by_relevance`]. The sort is stable.
pub fn sort_clusters_by_relevance_in_place<E: Geolocated>(
    clusters: &mut [Cluster<E>],
    center_lat: f64,
    center_lng: f64,
) {
    clusters.sort_by(|a, b| match b.count().cmp(&a.count()) {
        Ordering::Equal => {
            let da = a.distance_to(center_lat, center_lng);
            let db = b.distance_to(center_lat, center_lng);
            da.total_cmp(&db)
        }
        other => other,
    });
}

/// The visible state of a map: zoom level, rectangle, and focus point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    /// Map zoom level; fractional values allowed.
    pub zoom: f64,
    /// Visible rectangle.
    pub bounds: Bounds,
    /// `[lat, lng]` used to rank clusters of equal size.
    pub center: [f64; 2],
}

impl MapView {
    /// Create a view.
    pub fn new(zoom: f64, bounds: Bounds, center: [f64; 2]) -> Self {
        Self {
            zoom,
            bounds,
            center,
        }
    }

    /// Clustering parameters for this zoom level.
    pub fn params(&self) -> ClusterParams {
        ClusterParams::default().with_max_distance_km(clustering_distance(self.zoom))
    }

    /// Cluster `events` at this zoom, keep the visible clusters, and rank them.
    pub fn render<E: Geolocated + Clone>(&self, events: &[E]) -> Vec<Cluster<E>> {
        let clusters = SeedClusterer::new(self.params()).cluster(events);
        let total = clusters.len();

        let visible: Vec<Cluster<E>> = clusters
            .into_iter()
            .filter(|c| {
                let [lat, lng] = c.center();
                self.bounds.contains(lat, lng)
            })
            .collect();
        debug!(zoom = self.zoom, total, visible = visible.len(), "rendered map view");

        sort_clusters_by_relevance(visible, self.center[0], self.center[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::EventLocation;

    fn single(id: &str, lat: f64, lng: f64) -> Cluster<EventLocation> {
        Cluster::singleton(EventLocation::new(id, lat, lng))
    }

    fn group(prefix: &str, n: usize, lat: f64, lng: f64) -> Cluster<EventLocation> {
        let members = (0..n)
            .map(|i| EventLocation::new(format!("{prefix}{i}"), lat, lng))
            .collect();
        Cluster::from_members(members).unwrap()
    }

    fn unit_box() -> Bounds {
        Bounds::new(1.0, -1.0, 1.0, -1.0)
    }

    #[test]
    fn test_filter_excludes_outside() {
        let clusters = vec![single("in", 0.0, 0.0), single("out", 2.0, 0.0)];
        let kept = filter_clusters_by_bounds(&clusters, &unit_box());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].ids(), vec!["in"]);
    }

    #[test]
    fn test_filter_is_inclusive_on_edges() {
        let clusters = vec![
            single("ne", 1.0, 1.0),
            single("sw", -1.0, -1.0),
            single("lng_out", 0.0, 1.0001),
        ];
        let kept = filter_clusters_by_bounds(&clusters, &unit_box());
        let ids: Vec<&str> = kept.iter().flat_map(|c| c.ids()).collect();
        assert_eq!(ids, vec!["ne", "sw"]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let clusters = vec![
            single("c", 0.5, 0.5),
            single("x", 5.0, 5.0),
            single("a", -0.5, 0.0),
            single("b", 0.0, -0.5),
        ];
        let kept = filter_clusters_by_bounds(&clusters, &unit_box());
        let ids: Vec<&str> = kept.iter().flat_map(|c| c.ids()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_try_new_bounds() {
        assert!(Bounds::try_new(1.0, -1.0, 1.0, -1.0).is_ok());
        assert!(Bounds::try_new(-1.0, 1.0, 1.0, -1.0).is_err());
        assert!(Bounds::try_new(1.0, -1.0, -1.0, 1.0).is_err());
        assert!(Bounds::try_new(f64::NAN, -1.0, 1.0, -1.0).is_err());
    }

    #[test]
    fn test_sort_count_then_distance() {
        let clusters = vec![
            single("one", 0.0, 0.0),
            group("far", 5, 10.0, 10.0),
            group("near", 5, 1.0, 1.0),
        ];
        let sorted = sort_clusters_by_relevance(clusters, 0.0, 0.0);
        assert_eq!(sorted[0].events()[0].id, "near0");
        assert_eq!(sorted[1].events()[0].id, "far0");
        assert_eq!(sorted[2].events()[0].id, "one");
    }

    #[test]
    fn test_sort_is_stable_on_full_ties() {
        let clusters = vec![single("first", 1.0, 1.0), single("second", 1.0, 1.0)];
        let sorted = sort_clusters_by_relevance(clusters, 0.0, 0.0);
        assert_eq!(sorted[0].ids(), vec!["first"]);
        assert_eq!(sorted[1].ids(), vec!["second"]);
    }

    #[test]
    fn test_sort_in_place_reorders_slice() {
        let mut clusters = vec![single("a", 0.0, 0.0), group("b", 3, 0.0, 0.0)];
        sort_clusters_by_relevance_in_place(&mut clusters, 0.0, 0.0);
        assert_eq!(clusters[0].count(), 3);
    }

    #[test]
    fn test_map_view_render() {
        let events = vec![
            EventLocation::new("a", 0.5, 0.5),
            EventLocation::new("b", 0.5005, 0.5005),
            EventLocation::new("c", 0.1, 0.1),
            EventLocation::new("outside", 3.0, 3.0),
        ];
        let view = MapView::new(12.0, unit_box(), [0.0, 0.0]);
        assert_eq!(view.params().max_distance_km, 0.5);

        let clusters = view.render(&events);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].ids(), vec!["a", "b"]);
        assert_eq!(clusters[1].ids(), vec!["c"]);
    }

    #[test]
    fn test_map_view_zoomed_in_splits_groups() {
        // ~0.157 km apart: one cluster at zoom 12, two at zoom 16.
        let events = vec![
            EventLocation::new("a", 0.0, 0.0),
            EventLocation::new("b", 0.0, 0.001414),
        ];
        let bounds = unit_box();
        assert_eq!(MapView::new(12.0, bounds, [0.0, 0.0]).render(&events).len(), 1);
        assert_eq!(MapView::new(16.0, bounds, [0.0, 0.0]).render(&events).len(), 2);
    }
}
