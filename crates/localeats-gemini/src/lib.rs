//! Gemini `generateContent` client with Google Maps grounding.
//!
//! [`GeminiClient`] sends one prompt per call with the `googleMaps` tool
//! enabled and the caller's coordinate as retrieval context, and converts the
//! first candidate into a vendor-neutral [`localeats_core::GroundedAnswer`].

pub mod client;
pub mod error;
pub mod types;

pub use client::{ApiKeySource, GeminiClient};
pub use error::GeminiError;
