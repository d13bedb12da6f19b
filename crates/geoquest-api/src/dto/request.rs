use serde::Deserialize;

/// Query string of `GET /api/search`
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Query string of `GET /api/datasets`
#[derive(Debug, Deserialize)]
pub struct DatasetSearchParams {
    #[serde(default)]
    pub keywords: String,
}

/// Body of `POST /api/assist`
#[derive(Debug, Deserialize)]
pub struct AssistRequest {
    #[serde(default)]
    pub query: String,
}
