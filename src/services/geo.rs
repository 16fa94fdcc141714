use crate::models::destination::Coordinates;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points using the Haversine formula.
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lon = (to.lon - from.lon).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Rough summary of how to get somewhere that far away.
pub fn travel_options(distance_km: f64) -> &'static str {
    if distance_km < 200.0 {
        "1-hour flight | 2-hour drive | Train available"
    } else if distance_km < 500.0 {
        "2-hour flight | 5-hour drive"
    } else if distance_km < 1000.0 {
        "3-hour flight"
    } else {
        "6+ hour flight"
    }
}
