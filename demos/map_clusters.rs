//! Cluster a handful of Manhattan events at a few zoom levels.

use poppin_cluster::{Bounds, EventLocation, MapView};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let events = vec![
        // Midtown
        EventLocation::new("jazz-night", 40.7580, -73.9855),
        EventLocation::new("comedy-cellar", 40.7585, -73.9850),
        EventLocation::new("broadway-pop-up", 40.7590, -73.9845),
        EventLocation::new("rooftop-dj", 40.7607, -73.9855),
        // Village
        EventLocation::new("poetry-slam", 40.7336, -74.0027),
        EventLocation::new("vinyl-swap", 40.7340, -74.0020),
        // Brooklyn, outside the viewport
        EventLocation::new("flea-market", 40.6782, -73.9442),
    ];

    let bounds = Bounds::new(40.80, 40.70, -73.93, -74.03);
    let center = [40.7549, -73.9840];

    for zoom in [11.0, 13.0, 15.0] {
        let view = MapView::new(zoom, bounds, center);
        let clusters = view.render(&events);
        println!(
            "=== zoom {zoom} (radius {} km) ===",
            view.params().max_distance_km
        );
        for c in &clusters {
            let [lat, lng] = c.center();
            println!(
                "  ({lat:8.4}, {lng:8.4}) count {:2} color {} => zoom {}  {:?}",
                c.count(),
                c.color().hex(),
                c.zoom(),
                c.ids()
            );
        }
    }
}
