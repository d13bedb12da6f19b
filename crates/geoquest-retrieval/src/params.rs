use geoquest_core::models::{ParsedQuery, QueryVocabulary, SearchParameters};

/// Full-year UTC range for the catalog's `temporal` parameter
pub fn build_temporal(year: &str) -> String {
    format!("{year}-01-01T00:00:00Z,{year}-12-31T23:59:59Z")
}

/// Comma-joined extent, in the order stored
fn join_bbox(bbox: [f64; 4]) -> String {
    bbox.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",")
}

/// Turns an interpreted query into collection search parameters
#[derive(Debug, Clone, Copy)]
pub struct ParameterBuilder<'v> {
    vocabulary: &'v QueryVocabulary,
    page_size: usize,
}

impl<'v> ParameterBuilder<'v> {
    pub fn new(vocabulary: &'v QueryVocabulary, page_size: usize) -> Self {
        Self {
            vocabulary,
            page_size,
        }
    }

    pub fn build(&self, parsed: &ParsedQuery) -> SearchParameters {
        let temporal = parsed.year.as_deref().map(build_temporal);

        // Region extents are min_lon,min_lat,max_lon,max_lat
        let bounding_box = parsed.region.as_deref().and_then(|name| {
            let region = self.vocabulary.region(name);
            if region.is_none() {
                tracing::warn!(region = name, "Region is not in the vocabulary, no bounding box sent");
            }
            region.map(|r| join_bbox(r.bbox()))
        });

        SearchParameters {
            keyword: parsed.keyword.clone(),
            page_size: self.page_size,
            temporal,
            bounding_box,
        }
    }
}
