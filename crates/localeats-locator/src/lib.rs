//! Location Provider for LocalEats.
//!
//! A [`LocationProvider`] yields one [`localeats_core::Coordinate`] per call
//! or one of two user-facing [`LocationFailure`]s. Every call asks its source
//! afresh: no tracking, no caching, no retry.

pub mod error;
pub mod ip;
pub mod provider;

pub use error::{LocationFailure, LocatorError};
pub use ip::IpGeolocator;
pub use provider::{FixedLocation, LocationProvider, PlatformLocator, Unsupported};
