mod request;
mod response;

pub use request::{AssistRequest, DatasetSearchParams, SearchParams};
pub use response::HealthResponse;
