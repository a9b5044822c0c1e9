pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use app::output::{render, OutputFormat};
pub use config::ApiConfig;
pub use crate::core::{
    earthquake_service::EarthquakeService, http_client::ReqwestApiClient, ApiClient,
    ConfigProvider,
};
pub use domain::model::Earthquake;
pub use utils::error::{ErrorCategory, QuakeError, Result};
pub use utils::validation::{validate_earthquakes, Validate};
