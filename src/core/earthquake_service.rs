use crate::core::{ApiClient, Earthquake, Result};

/// Relative path of the collection endpoint.
pub const EARTHQUAKES_PATH: &str = "earthquakes";

pub struct EarthquakeService<C: ApiClient> {
    client: C,
}

impl<C: ApiClient> EarthquakeService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Fetches the current earthquake collection.
    ///
    /// Records come back in server order, decoded but otherwise untouched.
    /// Transport, status and decode failures are returned as-is; there is no
    /// retry and no fallback value.
    pub async fn get_earthquakes(&self) -> Result<Vec<Earthquake>> {
        let body = self.client.get(EARTHQUAKES_PATH).await?;
        let quakes = serde_json::from_slice(&body)?;
        Ok(quakes)
    }
}
