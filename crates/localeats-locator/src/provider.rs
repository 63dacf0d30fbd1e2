use std::future::Future;

use localeats_core::{AppConfig, Coordinate};

use crate::error::{LocationFailure, LocatorError};
use crate::ip::IpGeolocator;

/// A platform geolocation capability.
pub trait LocationProvider {
    /// Issues one fresh position request.
    fn acquire_location(
        &self,
    ) -> impl Future<Output = Result<Coordinate, LocationFailure>> + Send;
}

/// Reports a coordinate supplied up front (env vars or command-line flags).
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Coordinate);

impl LocationProvider for FixedLocation {
    async fn acquire_location(&self) -> Result<Coordinate, LocationFailure> {
        Ok(self.0)
    }
}

/// A host with no geolocation capability at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsupported;

impl LocationProvider for Unsupported {
    async fn acquire_location(&self) -> Result<Coordinate, LocationFailure> {
        Err(LocationFailure::UnsupportedPlatform)
    }
}

/// The location source chosen from configuration.
#[derive(Debug)]
pub enum PlatformLocator {
    Fixed(FixedLocation),
    Ip(IpGeolocator),
    Unsupported(Unsupported),
}

impl PlatformLocator {
    /// Picks a fixed coordinate if one is configured, else IP geolocation if
    /// enabled, else nothing.
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError`] if the IP geolocator cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, LocatorError> {
        if let Some(coordinate) = config.fixed_location {
            tracing::debug!("using fixed location from configuration");
            return Ok(Self::Fixed(FixedLocation(coordinate)));
        }
        if config.ip_geolocation_enabled {
            tracing::debug!(url = %config.ip_geolocation_url, "using IP geolocation");
            let geolocator = IpGeolocator::new(
                &config.ip_geolocation_url,
                config.geolocation_timeout_secs,
                &config.user_agent,
            )?;
            return Ok(Self::Ip(geolocator));
        }
        tracing::debug!("no geolocation source configured");
        Ok(Self::Unsupported(Unsupported))
    }
}

impl LocationProvider for PlatformLocator {
    async fn acquire_location(&self) -> Result<Coordinate, LocationFailure> {
        match self {
            Self::Fixed(p) => p.acquire_location().await,
            Self::Ip(p) => p.acquire_location().await,
            Self::Unsupported(p) => p.acquire_location().await,
        }
    }
}
