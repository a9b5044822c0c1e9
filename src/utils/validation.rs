use crate::domain::model::Earthquake;
use crate::utils::error::{QuakeError, Result};
use std::collections::HashSet;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Accepts absolute `http`/`https` URLs.
pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    let invalid = |reason: String| QuakeError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: url_str.to_string(),
        reason,
    };

    if url_str.trim().is_empty() {
        return Err(invalid("URL cannot be empty".to_string()));
    }

    let url = Url::parse(url_str.trim()).map_err(|e| invalid(format!("not a URL: {}", e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!(
            "scheme '{}' is not http or https",
            url.scheme()
        )));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // Written as a negated containment check so NaN is rejected too.
    if !(value >= min && value <= max) {
        return Err(QuakeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

impl Validate for Earthquake {
    fn validate(&self) -> Result<()> {
        let invalid = |what: String| QuakeError::ValidationError {
            message: format!("earthquake '{}': {}", self.code, what),
        };

        if self.code.trim().is_empty() {
            return Err(QuakeError::ValidationError {
                message: format!("earthquake with id '{}' has an empty code", self.id),
            });
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(invalid(format!("latitude {} out of range", self.latitude)));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(invalid(format!("longitude {} out of range", self.longitude)));
        }
        if !self.magnitude.is_finite() {
            return Err(invalid("magnitude is not a finite number".to_string()));
        }
        if !self.km_depth.is_finite() {
            return Err(invalid("depth is not a finite number".to_string()));
        }
        Ok(())
    }
}

/// Checks a fetched collection: every record well-formed, every code unique.
///
/// Fetching never calls this; callers that want the guarantee run it
/// themselves.
pub fn validate_earthquakes(quakes: &[Earthquake]) -> Result<()> {
    let mut seen = HashSet::with_capacity(quakes.len());
    for quake in quakes {
        quake.validate()?;
        if !seen.insert(quake.code.as_str()) {
            return Err(QuakeError::ValidationError {
                message: format!("duplicate earthquake code '{}'", quake.code),
            });
        }
    }
    Ok(())
}
