//! Vendor-neutral shape of a location-grounded AI answer.
//!
//! AI clients translate their wire format into [`GroundedAnswer`] and expose
//! it through [`GroundedAnswerSource`]; the recommendation pipeline never sees
//! vendor types.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;

/// Free-text answer plus the grounding citations that support it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundedAnswer {
    /// `None` when the service returned no text parts at all.
    pub text: Option<String>,
    /// Citations in the order the service returned them.
    pub citations: Vec<GroundingCitation>,
}

/// One grounding citation. At most one of the sub-objects is normally set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingCitation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maps: Option<MapsSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web: Option<WebSource>,
}

/// A maps place reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapsSource {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
}

/// A web page reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebSource {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
}

impl GroundingCitation {
    /// Citation pointing at a maps place.
    #[must_use]
    pub fn maps(title: Option<&str>, uri: Option<&str>) -> Self {
        Self {
            maps: Some(MapsSource {
                title: title.map(str::to_owned),
                uri: uri.map(str::to_owned),
            }),
            web: None,
        }
    }

    /// Citation pointing at a web page.
    #[must_use]
    pub fn web(title: Option<&str>, uri: Option<&str>) -> Self {
        Self {
            maps: None,
            web: Some(WebSource {
                title: title.map(str::to_owned),
                uri: uri.map(str::to_owned),
            }),
        }
    }
}

/// An AI service that answers a prompt with its maps-grounding tool enabled,
/// using `coordinate` as the retrieval location.
pub trait GroundedAnswerSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Sends exactly one request and returns the grounded answer.
    fn request_grounded_answer(
        &self,
        prompt: &str,
        coordinate: Coordinate,
    ) -> impl Future<Output = Result<GroundedAnswer, Self::Error>> + Send;
}
