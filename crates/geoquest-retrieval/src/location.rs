//! Coordinate resolution for catalog entries.
//!
//! Each dataset gets exactly one coordinate. Collection geometry is tried
//! first (boxes, then polygons), granule geometry replaces it whenever the
//! granule lookup succeeds, and a synthetic placement fills any gap.

use geoquest_catalog::ports::CatalogClient;
use geoquest_core::models::{CatalogEntry, Coordinate};
use geoquest_geo::{box_midpoint, first_geometry_text, polygon_first_point, synthetic_coordinate};
use serde_json::Value;

/// Where a dataset's coordinate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationSource {
    CollectionBox,
    CollectionPolygon,
    Granule,
    Synthetic,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedLocation {
    pub coordinate: Coordinate,
    pub source: LocationSource,
}

type CollectionStep = fn(&CatalogEntry) -> Option<Coordinate>;

/// Collection-level attempts, in order; the first success wins
const COLLECTION_STEPS: [(LocationSource, CollectionStep); 2] = [
    (LocationSource::CollectionBox, box_coordinate),
    (LocationSource::CollectionPolygon, polygon_coordinate),
];

fn has_geometry(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

/// Midpoint of an entry's first box
pub fn box_coordinate(entry: &CatalogEntry) -> Option<Coordinate> {
    let boxes = entry.boxes.as_ref()?;
    first_geometry_text(boxes).and_then(box_midpoint)
}

/// First point of an entry's first polygon
pub fn polygon_coordinate(entry: &CatalogEntry) -> Option<Coordinate> {
    let polygons = entry.polygons.as_ref()?;
    first_geometry_text(polygons).and_then(polygon_first_point)
}

/// Looks up a collection's granules and reads a coordinate from the first one
pub struct GranuleLocationResolver<'c> {
    catalog: &'c dyn CatalogClient,
    page_size: usize,
}

impl<'c> GranuleLocationResolver<'c> {
    pub fn new(catalog: &'c dyn CatalogClient, page_size: usize) -> Self {
        Self { catalog, page_size }
    }

    /// Coordinate of the collection's first granule, if it has usable geometry.
    ///
    /// Lookup failures of any kind resolve to `None`.
    pub async fn resolve(&self, collection_id: &str) -> Option<Coordinate> {
        let granules = match self.catalog.search_granules(collection_id, self.page_size).await {
            Ok(granules) => granules,
            Err(e) => {
                tracing::debug!(collection_id, error = %e, "Granule lookup failed");
                return None;
            }
        };

        let first = granules.first()?;

        // A non-empty boxes field decides the outcome even when it does not parse.
        if first.boxes.as_ref().is_some_and(has_geometry) {
            return box_coordinate(first);
        }

        if first.polygons.as_ref().is_some_and(has_geometry) {
            return polygon_coordinate(first);
        }

        None
    }
}

/// Produces one coordinate per catalog entry
pub struct CoordinateResolutionPipeline<'c> {
    granules: GranuleLocationResolver<'c>,
}

impl<'c> CoordinateResolutionPipeline<'c> {
    pub fn new(granules: GranuleLocationResolver<'c>) -> Self {
        Self { granules }
    }

    /// Resolve a coordinate for the entry at `position` in its result list.
    pub async fn resolve_for(&self, entry: &CatalogEntry, position: usize) -> ResolvedLocation {
        let mut resolved = COLLECTION_STEPS.iter().find_map(|(source, step)| {
            step(entry).map(|coordinate| ResolvedLocation {
                coordinate,
                source: *source,
            })
        });

        // Granule geometry overrides collection geometry unconditionally.
        if let Some(id) = entry.id.as_deref().filter(|id| !id.is_empty()) {
            if let Some(coordinate) = self.granules.resolve(id).await {
                resolved = Some(ResolvedLocation {
                    coordinate,
                    source: LocationSource::Granule,
                });
            }
        }

        let location = resolved.unwrap_or_else(|| ResolvedLocation {
            coordinate: synthetic_coordinate(position),
            source: LocationSource::Synthetic,
        });

        tracing::debug!(
            id = entry.id.as_deref().unwrap_or("-"),
            position,
            source = ?location.source,
            latitude = location.coordinate.latitude,
            longitude = location.coordinate.longitude,
            "Resolved dataset location"
        );

        location
    }
}
