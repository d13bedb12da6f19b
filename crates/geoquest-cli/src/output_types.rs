use std::collections::BTreeMap;

use geoquest_core::config::ConfigSource;
use geoquest_core::models::DatasetResult;
use serde::Serialize;
use tabled::Tabled;

/// Output for the config command
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    #[serde(flatten)]
    pub entries: BTreeMap<String, ConfigEntry>,
}

#[derive(Debug, Serialize)]
pub struct ConfigEntry {
    pub value: String,
    pub source: String,
}

impl ConfigEntry {
    pub fn new(value: String, source: ConfigSource) -> Self {
        Self {
            value,
            source: format!("{:?}", source),
        }
    }
}

/// Table row for located datasets
#[derive(Tabled)]
pub struct DatasetRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Data Center")]
    pub data_center: String,
    #[tabled(rename = "Start")]
    pub time_start: String,
    #[tabled(rename = "Lat")]
    pub latitude: f64,
    #[tabled(rename = "Lon")]
    pub longitude: f64,
}

impl From<&DatasetResult> for DatasetRow {
    fn from(dataset: &DatasetResult) -> Self {
        Self {
            id: dataset.id.clone().unwrap_or_default(),
            title: crate::output::truncate(dataset.title.as_deref().unwrap_or(""), 48),
            data_center: dataset.data_center.clone().unwrap_or_default(),
            time_start: dataset.time_start.clone(),
            latitude: dataset.coordinate.latitude,
            longitude: dataset.coordinate.longitude,
        }
    }
}
