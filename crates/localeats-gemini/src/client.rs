//! HTTP client for the Gemini `generateContent` REST endpoint.
//!
//! Wraps `reqwest` with Gemini-specific URL building, API key handling, and
//! typed response deserialization. Non-2xx responses surface as
//! [`GeminiError::Api`] carrying the message from Google's error envelope.

use localeats_core::{Coordinate, GroundedAnswer, GroundedAnswerSource};
use reqwest::{Client, Url};

use crate::error::GeminiError;
use crate::types::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};

/// Environment variables consulted for the API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Where the client gets its API key from.
#[derive(Clone)]
pub enum ApiKeySource {
    /// Read [`API_KEY_VARS`] every time a request is built. Missing means an
    /// empty key, which the API rejects.
    Environment,
    Static(String),
}

impl ApiKeySource {
    fn resolve(&self) -> String {
        match self {
            ApiKeySource::Environment => API_KEY_VARS
                .iter()
                .find_map(|var| std::env::var(var).ok().filter(|k| !k.is_empty()))
                .unwrap_or_default(),
            ApiKeySource::Static(key) => key.clone(),
        }
    }
}

impl std::fmt::Debug for ApiKeySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiKeySource::Environment => write!(f, "Environment"),
            ApiKeySource::Static(_) => write!(f, "Static([redacted])"),
        }
    }
}

/// Client for the Gemini REST API.
///
/// No request timeout is configured: a call resolves or fails purely on the
/// service's own behaviour.
#[derive(Debug)]
pub struct GeminiClient {
    client: Client,
    base_url: Url,
    model: String,
    api_key: ApiKeySource,
}

impl GeminiClient {
    /// Creates a client that reads its API key from the environment per request.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeminiError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn new(base_url: &str, model: &str, user_agent: &str) -> Result<Self, GeminiError> {
        Self::with_api_key(base_url, model, user_agent, ApiKeySource::Environment)
    }

    /// Creates a client with an explicit key source (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Same as [`GeminiClient::new`].
    pub fn with_api_key(
        base_url: &str,
        model: &str,
        user_agent: &str,
        api_key: ApiKeySource,
    ) -> Result<Self, GeminiError> {
        let client = Client::builder().user_agent(user_agent).build()?;

        // Exactly one trailing slash so `join` appends instead of replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| GeminiError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            model: model.to_owned(),
            api_key,
        })
    }

    /// Sends `prompt` with maps grounding centred on `coordinate`.
    ///
    /// # Errors
    ///
    /// - [`GeminiError::Http`] on network failure.
    /// - [`GeminiError::Api`] on a non-2xx status.
    /// - [`GeminiError::Deserialize`] if the body is not the expected shape.
    pub async fn generate_grounded(
        &self,
        prompt: &str,
        coordinate: Coordinate,
    ) -> Result<GroundedAnswer, GeminiError> {
        let url = self.endpoint()?;
        let body = GenerateContentRequest::maps_grounded(prompt, coordinate);

        tracing::debug!(model = %self.model, %coordinate, "sending generateContent request");

        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, self.api_key.resolve())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = api_error_message(&text);
            tracing::warn!(status = status.as_u16(), %message, "Gemini API returned an error");
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&text).map_err(|e| GeminiError::Deserialize {
                context: format!("generateContent(model={})", self.model),
                source: e,
            })?;

        Ok(parsed.into_grounded_answer())
    }

    /// `{base}/v1beta/models/{model}:generateContent`
    fn endpoint(&self) -> Result<Url, GeminiError> {
        let relative = format!("v1beta/models/{}:generateContent", self.model);
        self.base_url
            .join(&relative)
            .map_err(|e| GeminiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }
}

impl GroundedAnswerSource for GeminiClient {
    type Error = GeminiError;

    async fn request_grounded_answer(
        &self,
        prompt: &str,
        coordinate: Coordinate,
    ) -> Result<GroundedAnswer, Self::Error> {
        self.generate_grounded(prompt, coordinate).await
    }
}

/// Pulls `error.message` out of a Google error body, falling back to the raw
/// body (or a placeholder when empty).
fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => match envelope.error.status {
            Some(status) => format!("{status}: {}", envelope.error.message),
            None => envelope.error.message,
        },
        _ if body.trim().is_empty() => "empty response body".to_owned(),
        _ => body.trim().to_owned(),
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
