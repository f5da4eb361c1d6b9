use serde::{Deserialize, Serialize};
use tracing::warn;

use super::traits::Geolocated;
use super::util;
use crate::error::{Error, Result};
use crate::zoom::{cluster_zoom, ClusterColor};

/// A geolocated event, the unit of input to the clustering engine.
///
/// `P` is an opaque payload (title, venue, start time, ...) carried through
/// clustering unchanged. It is flattened into the same JSON object as the
/// coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLocation<P = ()> {
    /// Opaque identifier, unique within one clustering call.
    pub id: String,
    /// Latitude in degrees (-90 to 90).
    pub lat: f64,
    /// Longitude in degrees (-180 to 180).
    pub lng: f64,
    /// Everything else about the event.
    #[serde(flatten)]
    pub payload: P,
}

impl EventLocation {
    /// Create an event with no payload. Coordinates are not checked.
    pub fn new(id: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self::with_payload(id, lat, lng, ())
    }
}

impl<P> EventLocation<P> {
    /// Create an event carrying `payload`. Coordinates are not checked.
    pub fn with_payload(id: impl Into<String>, lat: f64, lng: f64, payload: P) -> Self {
        Self {
            id: id.into(),
            lat,
            lng,
            payload,
        }
    }

    /// Create an event, rejecting non-finite or out-of-range coordinates.
    pub fn try_new(id: impl Into<String>, lat: f64, lng: f64, payload: P) -> Result<Self> {
        let lat_ok = lat.is_finite() && (-90.0..=90.0).contains(&lat);
        let lng_ok = lng.is_finite() && (-180.0..=180.0).contains(&lng);
        if !(lat_ok && lng_ok) {
            let id = id.into();
            warn!(%id, lat, lng, "rejecting event with invalid coordinates");
            return Err(Error::InvalidCoordinate { lat, lng });
        }
        Ok(Self::with_payload(id, lat, lng, payload))
    }
}

impl<P> Geolocated for EventLocation<P> {
    fn id(&self) -> &str {
        &self.id
    }

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lng(&self) -> f64 {
        self.lng
    }
}

/// A group of events rendered as one map marker.
///
/// `count` always equals `events.len()`; it is stored so it serializes
/// alongside the members.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cluster<E> {
    center: [f64; 2],
    events: Vec<E>,
    count: usize,
}

impl<E: Geolocated> Cluster<E> {
    /// A cluster of one event, centered exactly on that event.
    pub fn singleton(event: E) -> Self {
        Self {
            center: [event.lat(), event.lng()],
            events: vec![event],
            count: 1,
        }
    }

    /// A cluster centered on the mean latitude and mean longitude of `events`.
    ///
    /// Returns `None` for an empty member list.
    pub fn from_members(events: Vec<E>) -> Option<Self> {
        match events.len() {
            0 => None,
            1 => events.into_iter().next().map(Self::singleton),
            count => Some(Self {
                center: util::centroid(&events),
                events,
                count,
            }),
        }
    }

    /// Member ids in discovery order.
    pub fn ids(&self) -> Vec<&str> {
        self.events.iter().map(Geolocated::id).collect()
    }

    /// Great-circle distance from `(lat, lng)` to this cluster's center, in km.
    pub fn distance_to(&self, lat: f64, lng: f64) -> f64 {
        util::haversine_km(lat, lng, self.center[0], self.center[1])
    }
}

impl<E> Cluster<E> {
    /// `[lat, lng]` of the marker.
    pub fn center(&self) -> [f64; 2] {
        self.center
    }

    /// Members in discovery order.
    pub fn events(&self) -> &[E] {
        &self.events
    }

    /// Number of members.
    pub fn count(&self) -> usize {
        self.count
    }

    /// True for a lone, unclustered event.
    pub fn is_singleton(&self) -> bool {
        self.count == 1
    }

    /// Zoom level to animate to when this marker is activated.
    pub fn zoom(&self) -> u8 {
        cluster_zoom(self.count)
    }

    /// Color tier for this marker.
    pub fn color(&self) -> ClusterColor {
        ClusterColor::for_count(self.count)
    }

    /// Take ownership of the members.
    pub fn into_events(self) -> Vec<E> {
        self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Details {
        title: String,
        approved: bool,
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        assert!(EventLocation::try_new("a", 91.0, 0.0, ()).is_err());
        assert!(EventLocation::try_new("a", 0.0, -180.5, ()).is_err());
        assert!(EventLocation::try_new("a", f64::NAN, 0.0, ()).is_err());
        assert!(EventLocation::try_new("a", 90.0, 180.0, ()).is_ok());
    }

    #[test]
    fn test_try_new_error_carries_coordinates() {
        let err = EventLocation::try_new("a", 100.0, 5.0, ()).unwrap_err();
        assert_eq!(err, Error::InvalidCoordinate { lat: 100.0, lng: 5.0 });
    }

    #[test]
    fn test_singleton_center_is_exact() {
        let c = Cluster::singleton(EventLocation::new("a", 40.123456789, -73.987654321));
        assert_eq!(c.center(), [40.123456789, -73.987654321]);
        assert_eq!(c.count(), 1);
        assert!(c.is_singleton());
    }

    #[test]
    fn test_from_members_empty_is_none() {
        let members: Vec<EventLocation> = Vec::new();
        assert!(Cluster::from_members(members).is_none());
    }

    #[test]
    fn test_from_members_count_matches_len() {
        let c = Cluster::from_members(vec![
            EventLocation::new("a", 1.0, 1.0),
            EventLocation::new("b", 3.0, 5.0),
        ])
        .unwrap();
        assert_eq!(c.count(), c.events().len());
        assert_eq!(c.center(), [2.0, 3.0]);
        assert_eq!(c.ids(), vec!["a", "b"]);
    }

    #[test]
    fn test_payload_flattened_in_json() {
        let event = EventLocation::with_payload(
            "evt-1",
            40.0,
            -73.0,
            Details {
                title: "Rooftop jazz".into(),
                approved: true,
            },
        );
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["id"], "evt-1");
        assert_eq!(json["title"], "Rooftop jazz");
        assert_eq!(json["approved"], true);

        let back: EventLocation<Details> = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
