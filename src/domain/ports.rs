use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Issues requests against a fixed API root.
///
/// `get` resolves `path` against the base URL and returns the raw body of a
/// 2xx response. Anything else (transport failure, timeout, non-2xx status)
/// is an error.
#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn get(&self, path: &str) -> Result<Vec<u8>>;
}

#[async_trait]
impl<C: ApiClient + ?Sized> ApiClient for std::sync::Arc<C> {
    async fn get(&self, path: &str) -> Result<Vec<u8>> {
        (**self).get(path).await
    }
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout(&self) -> Duration;
    fn connect_timeout(&self) -> Duration;
    fn user_agent(&self) -> Option<&str>;
}
