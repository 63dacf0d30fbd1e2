//! Gemini `generateContent` wire types.
//!
//! Only the fields LocalEats sends or reads are modelled. Everything on the
//! response side is optional or defaulted: the API omits empty collections.

use localeats_core::{Coordinate, GroundedAnswer, GroundingCitation, MapsSource, WebSource};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest<'a> {
    pub contents: Vec<Content<'a>>,
    pub tools: Vec<Tool>,
    pub tool_config: ToolConfig,
}

#[derive(Debug, Serialize)]
pub struct Content<'a> {
    pub role: &'a str,
    pub parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
pub struct TextPart<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub google_maps: GoogleMaps,
}

/// Enables the Google Maps grounding tool. Serializes as `{}`.
#[derive(Debug, Serialize)]
pub struct GoogleMaps {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfig {
    pub retrieval_config: RetrievalConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievalConfig {
    pub lat_lng: LatLng,
}

#[derive(Debug, Serialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl<'a> GenerateContentRequest<'a> {
    /// Single-turn user prompt with maps grounding centred on `coordinate`.
    #[must_use]
    pub fn maps_grounded(prompt: &'a str, coordinate: Coordinate) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![TextPart { text: prompt }],
            }],
            tools: vec![Tool {
                google_maps: GoogleMaps {},
            }],
            tool_config: ToolConfig {
                retrieval_config: RetrievalConfig {
                    lat_lng: LatLng {
                        latitude: coordinate.latitude,
                        longitude: coordinate.longitude,
                    },
                },
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
    /// Set on "thinking" parts, which are not part of the answer text.
    #[serde(default)]
    pub thought: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
pub struct GroundingChunk {
    #[serde(default)]
    pub maps: Option<ChunkSource>,
    #[serde(default)]
    pub web: Option<ChunkSource>,
}

#[derive(Debug, Deserialize)]
pub struct ChunkSource {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
}

/// Google API error envelope: `{ "error": { "code", "message", "status" } }`.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl GenerateContentResponse {
    /// Collapses the first candidate into a [`GroundedAnswer`].
    ///
    /// Text is the concatenation of all non-thought text parts, or `None` when
    /// there are none. Citations keep the API's order.
    #[must_use]
    pub fn into_grounded_answer(self) -> GroundedAnswer {
        let Some(candidate) = self.candidates.into_iter().next() else {
            return GroundedAnswer::default();
        };

        let texts: Vec<String> = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter(|p| p.thought != Some(true))
            .filter_map(|p| p.text)
            .collect();
        let text = (!texts.is_empty()).then(|| texts.concat());

        let citations = candidate
            .grounding_metadata
            .map(|m| m.grounding_chunks)
            .unwrap_or_default()
            .into_iter()
            .map(|chunk| GroundingCitation {
                maps: chunk.maps.map(|s| MapsSource {
                    title: s.title,
                    uri: s.uri,
                }),
                web: chunk.web.map(|s| WebSource {
                    title: s.title,
                    uri: s.uri,
                }),
            })
            .collect();

        GroundedAnswer { text, citations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_maps_tool_and_lat_lng() {
        let coordinate = Coordinate::new(35.6762, 139.6503).unwrap();
        let request = GenerateContentRequest::maps_grounded("find ramen", coordinate);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "find ramen");
        assert_eq!(json["tools"][0]["googleMaps"], serde_json::json!({}));
        assert_eq!(
            json["toolConfig"]["retrievalConfig"]["latLng"]["latitude"],
            35.6762
        );
        assert_eq!(
            json["toolConfig"]["retrievalConfig"]["latLng"]["longitude"],
            139.6503
        );
    }

    #[test]
    fn grounded_answer_joins_text_parts_and_skips_thoughts() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": { "parts": [
                    { "text": "planning...", "thought": true },
                    { "text": "Try " },
                    { "text": "Ichiran." }
                ]}
            }]
        }))
        .unwrap();

        let answer = response.into_grounded_answer();
        assert_eq!(answer.text.as_deref(), Some("Try Ichiran."));
        assert!(answer.citations.is_empty());
    }

    #[test]
    fn grounded_answer_without_candidates_is_empty() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        let answer = response.into_grounded_answer();
        assert!(answer.text.is_none());
        assert!(answer.citations.is_empty());
    }

    #[test]
    fn grounded_answer_keeps_chunk_order_and_kinds() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "ok" }] },
                "groundingMetadata": { "groundingChunks": [
                    { "web": { "uri": "https://w", "title": "W" } },
                    { "maps": { "uri": "https://m", "title": "M", "placeId": "places/abc" } }
                ]}
            }]
        }))
        .unwrap();

        let answer = response.into_grounded_answer();
        assert_eq!(answer.citations.len(), 2);
        assert!(answer.citations[0].maps.is_none());
        assert_eq!(
            answer.citations[0].web.as_ref().and_then(|w| w.title.as_deref()),
            Some("W")
        );
        assert_eq!(
            answer.citations[1].maps.as_ref().and_then(|m| m.uri.as_deref()),
            Some("https://m")
        );
    }
}
