//! Representative coordinates from catalog geometry fields.
//!
//! Box strings are read as `[lat0, lon0, lat1, lon1]`. This is the opposite
//! axis order from the named-region bounding boxes sent with a search.

use geo::{coord, Rect};
use geoquest_core::models::Coordinate;
use serde_json::Value;

use crate::bbox::parse_bbox;

/// Round to six decimal places.
///
/// Rounds the exact binary value, so `5e-7` (stored just below one half of
/// the last place) rounds down to zero.
pub fn round_coord(value: f64) -> f64 {
    format!("{:.6}", value).parse().unwrap_or(value)
}

/// First textual geometry in a `boxes`/`polygons` field.
///
/// Accepts a flat string, a list of strings, or a list whose first element is
/// itself a list (one nesting level, as polygons are returned).
pub fn first_geometry_text(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s.as_str()),
        Value::Array(items) => match items.first()? {
            Value::String(s) => Some(s.as_str()),
            Value::Array(inner) => inner.first()?.as_str(),
            _ => None,
        },
        _ => None,
    }
}

/// Midpoint of a four-number box string
pub fn box_midpoint(raw: &str) -> Option<Coordinate> {
    let [lat0, lon0, lat1, lon1] = parse_bbox(Some(raw))?;
    let center = Rect::new(coord! { x: lat0, y: lon0 }, coord! { x: lat1, y: lon1 }).center();
    Some(Coordinate::new(round_coord(center.x), round_coord(center.y)))
}

/// First vertex of a polygon string, read as `lat,lon`.
///
/// Only the first whitespace-separated point is looked at; no averaging.
pub fn polygon_first_point(raw: &str) -> Option<Coordinate> {
    let point = raw.split_whitespace().next()?;
    let mut parts = point.split(',');
    let latitude = parts.next()?.trim().parse::<f64>().ok()?;
    let longitude = parts.next()?.trim().parse::<f64>().ok()?;
    if parts.next().is_some() {
        tracing::debug!(point, "polygon point has more than two components");
        return None;
    }
    Some(Coordinate::new(latitude, longitude))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_geometry_text_shapes() {
        assert_eq!(first_geometry_text(&json!("1 2 3 4")), Some("1 2 3 4"));
        assert_eq!(first_geometry_text(&json!(["1 2 3 4", "5 6 7 8"])), Some("1 2 3 4"));
        assert_eq!(first_geometry_text(&json!([["1,2 3,4"]])), Some("1,2 3,4"));
        assert_eq!(first_geometry_text(&json!([])), None);
        assert_eq!(first_geometry_text(&json!([[]])), None);
        assert_eq!(first_geometry_text(&json!([42])), None);
        assert_eq!(first_geometry_text(&json!(null)), None);
    }

    #[test]
    fn test_box_midpoint() {
        let c = box_midpoint("10,20,30,40").unwrap();
        assert_eq!(c, Coordinate::new(20.0, 30.0));
    }

    #[test]
    fn test_box_midpoint_rounds_to_six_places() {
        let c = box_midpoint("0 0 0.0000001 1.2345678").unwrap();
        assert_eq!(c.latitude, 0.0);
        assert_eq!(c.longitude, 0.617284);
    }

    #[test]
    fn test_round_coord_uses_exact_binary_value() {
        assert_eq!(round_coord(5e-7), 0.0);
        assert_eq!(round_coord(0.0000015), 0.000002);
        assert_eq!(round_coord(-12.3456789), -12.345679);
        assert_eq!(box_midpoint("0 0 0.000001 0").unwrap().latitude, 0.0);
    }

    #[test]
    fn test_box_midpoint_descending_corners() {
        let c = box_midpoint("30 40 10 20").unwrap();
        assert_eq!(c, Coordinate::new(20.0, 30.0));
    }

    #[test]
    fn test_box_midpoint_unparseable() {
        assert!(box_midpoint("10,20,30").is_none());
        assert!(box_midpoint("north,20,30,40").is_none());
    }

    #[test]
    fn test_polygon_first_point() {
        let c = polygon_first_point("12.5,77.25 13,78 12.5,77.25").unwrap();
        assert_eq!(c, Coordinate::new(12.5, 77.25));
    }

    #[test]
    fn test_polygon_space_separated_point_is_rejected() {
        assert!(polygon_first_point("12.5 77.25 13 78").is_none());
        assert!(polygon_first_point("").is_none());
        assert!(polygon_first_point("1,2,3 4,5").is_none());
    }
}
