use super::traits::Geolocated;

/// Mean Earth radius used for all distances, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two points given in degrees.
///
/// Standard haversine on a sphere of radius [`EARTH_RADIUS_KM`]:
///
/// ```text
/// a = sin²(Δφ/2) + cos φ1 · cos φ2 · sin²(Δλ/2)
/// c = 2 · atan2(√a, √(1−a))
/// d = R · c
/// ```
///
/// ```rust
/// use poppin_cluster::haversine_km;
///
/// // New York to London is roughly 5570 km.
/// let d = haversine_km(40.7128, -74.0060, 51.5074, -0.1278);
/// assert!((d - 5570.0).abs() < 10.0);
/// ```
#[inline]
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let half_lat = (d_lat / 2.0).sin();
    let half_lng = (d_lng / 2.0).sin();

    let a = half_lat * half_lat
        + lat1.to_radians().cos() * lat2.to_radians().cos() * half_lng * half_lng;
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Haversine distance between two located items.
#[inline]
pub(crate) fn distance_between<A: Geolocated, B: Geolocated>(a: &A, b: &B) -> f64 {
    haversine_km(a.lat(), a.lng(), b.lat(), b.lng())
}

/// Arithmetic mean of latitudes and of longitudes.
///
/// Callers guarantee `members` is non-empty.
pub(crate) fn centroid<E: Geolocated>(members: &[E]) -> [f64; 2] {
    debug_assert!(!members.is_empty());
    let n = members.len() as f64;
    let (sum_lat, sum_lng) = members
        .iter()
        .fold((0.0, 0.0), |(la, ln), e| (la + e.lat(), ln + e.lng()));
    [sum_lat / n, sum_lng / n]
}
