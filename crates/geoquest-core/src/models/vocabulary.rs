use std::sync::LazyLock;

/// Event terms recognised in free-text queries, in match priority order.
const EVENT_TERMS: [&str; 12] = [
    "flood",
    "volcano",
    "wildfire",
    "fire",
    "cyclone",
    "hurricane",
    "storm",
    "rainfall",
    "aerosol",
    "ash",
    "landslide",
    "drought",
];

/// Named regions as `[min_lon, min_lat, max_lon, max_lat]`, in match priority order.
const NAMED_REGIONS: [(&str, [f64; 4]); 5] = [
    ("india", [68.0, 6.0, 97.0, 36.0]),
    ("global", [-180.0, -90.0, 180.0, 90.0]),
    ("california", [-125.0, 32.0, -113.0, 43.0]),
    ("europe", [-11.0, 34.0, 31.0, 72.0]),
    ("indonesia", [95.0, -11.0, 141.0, 6.0]),
];

static BUILTIN: LazyLock<QueryVocabulary> = LazyLock::new(|| QueryVocabulary {
    event_terms: EVENT_TERMS.iter().map(|t| t.to_string()).collect(),
    regions: NAMED_REGIONS
        .iter()
        .map(|(name, bbox)| NamedRegion {
            name: name.to_string(),
            bbox: *bbox,
        })
        .collect(),
});

/// A named geographic extent usable as a search bounding box
#[derive(Debug, Clone, PartialEq)]
pub struct NamedRegion {
    name: String,
    bbox: [f64; 4],
}

impl NamedRegion {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Extent as `[min_lon, min_lat, max_lon, max_lat]`
    pub fn bbox(&self) -> [f64; 4] {
        self.bbox
    }
}

/// Read-only vocabulary the query interpreter matches against
///
/// Order matters for both lists: the first entry that matches wins.
#[derive(Debug, Clone)]
pub struct QueryVocabulary {
    event_terms: Vec<String>,
    regions: Vec<NamedRegion>,
}

impl QueryVocabulary {
    /// The process-wide vocabulary, built on first use.
    pub fn builtin() -> &'static QueryVocabulary {
        &BUILTIN
    }

    pub fn event_terms(&self) -> &[String] {
        &self.event_terms
    }

    pub fn regions(&self) -> &[NamedRegion] {
        &self.regions
    }

    /// Look up a region by its exact name
    pub fn region(&self, name: &str) -> Option<&NamedRegion> {
        self.regions.iter().find(|r| r.name == name)
    }
}
