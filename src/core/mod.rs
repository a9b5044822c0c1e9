pub mod earthquake_service;
pub mod http_client;

pub use crate::domain::model::Earthquake;
pub use crate::domain::ports::{ApiClient, ConfigProvider};
pub use crate::utils::error::Result;
