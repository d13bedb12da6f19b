mod assist;
mod dataset;
mod health;
mod search;

pub use assist::assisted_search;
pub use dataset::get_dataset;
pub use health::health_check;
pub use search::{dataset_search, direct_search};
