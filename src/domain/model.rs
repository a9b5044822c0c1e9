use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One reported seismic event, decoded verbatim from the API.
///
/// The identifier arrives as `code` from the current API and as `featureId`
/// from older payloads; both land in [`Earthquake::code`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Earthquake {
    pub id: String,
    pub magnitude: f64,
    pub place: String,
    pub latitude: f64,
    pub longitude: f64,
    pub km_depth: f64,
    pub earthquake_time: String,
    #[serde(alias = "featureId")]
    pub code: String,
    pub url: String,
}

impl Earthquake {
    /// Parses `earthquake_time` as RFC 3339. `None` when the server sent
    /// something else; the raw string is kept as received either way.
    pub fn event_time(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.earthquake_time)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }
}
