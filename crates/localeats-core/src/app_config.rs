use crate::coordinate::Coordinate;

/// Process-wide settings read once at startup.
///
/// The Gemini API key is deliberately absent: it is read from the
/// environment each time a request is built.
#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub user_agent: String,
    /// Coordinate to report instead of asking a geolocation service.
    pub fixed_location: Option<Coordinate>,
    pub ip_geolocation_enabled: bool,
    pub ip_geolocation_url: String,
    pub geolocation_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("gemini_model", &self.gemini_model)
            .field("user_agent", &self.user_agent)
            .field(
                "fixed_location",
                &self.fixed_location.as_ref().map(|_| "[redacted]"),
            )
            .field("ip_geolocation_enabled", &self.ip_geolocation_enabled)
            .field("ip_geolocation_url", &self.ip_geolocation_url)
            .field("geolocation_timeout_secs", &self.geolocation_timeout_secs)
            .finish()
    }
}
