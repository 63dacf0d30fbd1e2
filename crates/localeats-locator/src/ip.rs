//! IP-based geolocation over HTTP.
//!
//! One GET per lookup against a JSON endpoint in the style of `ipapi.co`
//! (`latitude`/`longitude`) or `ip-api.com` (`lat`/`lon`).

use std::time::Duration;

use localeats_core::Coordinate;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::{LocationFailure, LocatorError};
use crate::provider::LocationProvider;

#[derive(Debug, Deserialize)]
struct IpLocationResponse {
    #[serde(default, alias = "lat")]
    latitude: Option<f64>,
    #[serde(default, alias = "lon")]
    longitude: Option<f64>,
    /// `ipapi.co` sets `error: true` with a `reason`.
    #[serde(default)]
    error: Option<bool>,
    #[serde(default)]
    reason: Option<String>,
    /// `ip-api.com` sets `status: "fail"` with a `message`.
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl IpLocationResponse {
    fn into_coordinate(self) -> Result<Coordinate, LocatorError> {
        if self.error == Some(true) || self.status.as_deref() == Some("fail") {
            let reason = self
                .reason
                .or(self.message)
                .unwrap_or_else(|| "unknown reason".to_owned());
            return Err(LocatorError::Refused(reason));
        }
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Ok(Coordinate::new(lat, lng)?),
            _ => Err(LocatorError::MissingCoordinates),
        }
    }
}

/// Looks up the caller's approximate position from their public IP.
#[derive(Debug)]
pub struct IpGeolocator {
    client: Client,
    url: Url,
}

impl IpGeolocator {
    /// Creates a geolocator for `url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`LocatorError::InvalidUrl`] if `url` does not parse.
    pub fn new(url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, LocatorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent(user_agent)
            .build()?;
        let parsed = Url::parse(url).map_err(|e| LocatorError::InvalidUrl {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            client,
            url: parsed,
        })
    }

    /// Performs one lookup.
    ///
    /// # Errors
    ///
    /// - [`LocatorError::Http`] on network failure or timeout.
    /// - [`LocatorError::UnexpectedStatus`] on a non-2xx status.
    /// - [`LocatorError::Deserialize`] if the body is not JSON.
    /// - [`LocatorError::Refused`] if the service reports an error.
    /// - [`LocatorError::MissingCoordinates`] / [`LocatorError::InvalidCoordinate`]
    ///   if the body has no usable position.
    pub async fn locate(&self) -> Result<Coordinate, LocatorError> {
        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LocatorError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.url.to_string(),
            });
        }
        let body = response.text().await?;
        let parsed: IpLocationResponse =
            serde_json::from_str(&body).map_err(|e| LocatorError::Deserialize {
                context: self.url.to_string(),
                source: e,
            })?;
        parsed.into_coordinate()
    }
}

impl LocationProvider for IpGeolocator {
    async fn acquire_location(&self) -> Result<Coordinate, LocationFailure> {
        match self.locate().await {
            Ok(coordinate) => {
                tracing::debug!(%coordinate, "IP geolocation succeeded");
                Ok(coordinate)
            }
            Err(e) => {
                tracing::warn!(error = %e, url = %self.url, "IP geolocation failed");
                Err(LocationFailure::PermissionOrSignalDenied)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(value: serde_json::Value) -> Result<Coordinate, LocatorError> {
        serde_json::from_value::<IpLocationResponse>(value)
            .unwrap()
            .into_coordinate()
    }

    #[test]
    fn reads_ipapi_co_fields() {
        let c = parse(serde_json::json!({ "latitude": 18.79, "longitude": 98.98 })).unwrap();
        assert!((c.latitude - 18.79).abs() < f64::EPSILON);
        assert!((c.longitude - 98.98).abs() < f64::EPSILON);
    }

    #[test]
    fn reads_ip_api_com_fields() {
        let c = parse(serde_json::json!({ "status": "success", "lat": 1.29, "lon": 103.85 }))
            .unwrap();
        assert!((c.latitude - 1.29).abs() < f64::EPSILON);
    }

    #[test]
    fn error_flag_is_refused() {
        let err = parse(serde_json::json!({ "error": true, "reason": "RateLimited" })).unwrap_err();
        assert!(matches!(err, LocatorError::Refused(ref r) if r == "RateLimited"));
    }

    #[test]
    fn fail_status_is_refused() {
        let err = parse(serde_json::json!({ "status": "fail", "message": "private range" }))
            .unwrap_err();
        assert!(matches!(err, LocatorError::Refused(ref r) if r == "private range"));
    }

    #[test]
    fn missing_longitude_is_rejected() {
        let err = parse(serde_json::json!({ "latitude": 10.0 })).unwrap_err();
        assert!(matches!(err, LocatorError::MissingCoordinates));
    }

    #[test]
    fn out_of_range_is_rejected() {
        let err = parse(serde_json::json!({ "latitude": 100.0, "longitude": 0.0 })).unwrap_err();
        assert!(matches!(err, LocatorError::InvalidCoordinate(_)));
    }
}
