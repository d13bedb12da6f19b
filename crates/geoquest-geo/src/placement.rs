use geoquest_core::models::Coordinate;

/// Deterministic stand-in position for a dataset with no usable geometry.
///
/// Spreads results over the map by their index in the result page. The value
/// carries no geographic meaning; the same index always yields the same point.
pub fn synthetic_coordinate(position: usize) -> Coordinate {
    let latitude = (position as u64 * 10) % 90;
    let longitude = (position as u64 * 20) % 180;
    Coordinate::new(latitude as f64, longitude as f64)
}
