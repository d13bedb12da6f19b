use serde::{Deserialize, Serialize};

/// Structured reading of a free-text query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuery {
    /// First matched event term, or the raw query text when none matched
    pub keyword: String,

    /// Four-digit year (1900-2099)
    pub year: Option<String>,

    /// Name of a region from the query vocabulary
    pub region: Option<String>,
}

/// Parameters sent to the catalog's collection search
///
/// Field names match the catalog's query parameter names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParameters {
    pub keyword: String,

    pub page_size: usize,

    /// `"{start}T00:00:00Z,{end}T23:59:59Z"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporal: Option<String>,

    /// Four comma-joined numbers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<String>,
}

impl SearchParameters {
    /// Parameters with only a keyword and page size
    pub fn keyword(keyword: impl Into<String>, page_size: usize) -> Self {
        Self {
            keyword: keyword.into(),
            page_size,
            temporal: None,
            bounding_box: None,
        }
    }

    /// Name/value pairs in the order they are appended to the request URL
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("keyword", self.keyword.clone()),
            ("page_size", self.page_size.to_string()),
        ];
        if let Some(temporal) = &self.temporal {
            pairs.push(("temporal", temporal.clone()));
        }
        if let Some(bbox) = &self.bounding_box {
            pairs.push(("bounding_box", bbox.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_skipped() {
        let params = SearchParameters::keyword("flood", 10);
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json, serde_json::json!({"keyword": "flood", "page_size": 10}));
    }

    #[test]
    fn test_query_pairs_order() {
        let params = SearchParameters {
            keyword: "fire".to_string(),
            page_size: 20,
            temporal: Some("2020-01-01T00:00:00Z,2020-12-31T23:59:59Z".to_string()),
            bounding_box: Some("68,6,97,36".to_string()),
        };
        let names: Vec<&str> = params.query_pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(names, vec!["keyword", "page_size", "temporal", "bounding_box"]);
        assert_eq!(params.query_pairs()[1].1, "20");
    }
}
