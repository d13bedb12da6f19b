//! Raw shapes returned by the catalog's JSON search endpoints.
//!
//! Geometry fields stay as [`serde_json::Value`]: the catalog returns them as
//! flat strings, lists of strings, or lists of lists depending on the record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level search response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFeed {
    #[serde(default)]
    pub feed: FeedBody,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedBody {
    #[serde(default)]
    pub entry: Vec<CatalogEntry>,
}

impl CatalogFeed {
    pub fn into_entries(self) -> Vec<CatalogEntry> {
        self.feed.entry
    }
}

/// One collection or granule record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub data_center: Option<String>,

    #[serde(default)]
    pub time_start: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boxes: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polygons: Option<Value>,

    #[serde(default)]
    pub links: Vec<CatalogLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogLink {
    #[serde(default)]
    pub href: Option<String>,

    #[serde(default)]
    pub rel: Option<String>,

    #[serde(default)]
    pub title: Option<String>,
}

impl CatalogEntry {
    /// First link that carries an `href`
    pub fn first_link(&self) -> Option<&str> {
        self.links.iter().find_map(|l| l.href.as_deref())
    }
}
