//! GeoQuest Geo - Geometry text parsing and map placement
//!
//! The catalog describes extents as loosely formatted strings. This crate turns
//! them into numbers and derives a single plottable coordinate from them.

pub mod bbox;
pub mod extract;
pub mod placement;

pub use bbox::parse_bbox;
pub use extract::{box_midpoint, first_geometry_text, polygon_first_point, round_coord};
pub use placement::synthetic_coordinate;
