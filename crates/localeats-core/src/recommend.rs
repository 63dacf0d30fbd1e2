//! Turns a user query and coordinate into recommendation records.
//!
//! [`find_local_food`] builds the prompt, asks the [`GroundedAnswerSource`]
//! once, and maps every maps-kind citation into a [`RecommendationRecord`].
//! Citations of any other kind are dropped. Order is the service's order.

use crate::coordinate::Coordinate;
use crate::error::FetchFailure;
use crate::grounding::{GroundedAnswerSource, GroundingCitation};
use crate::record::{LocalFoodAnswer, RecommendationRecord};

/// Query used when the caller supplies an empty one.
pub const DEFAULT_QUERY: &str = "authentic local food";

/// Explanation used when the service returns no text.
pub const NO_DETAILS_EXPLANATION: &str = "No specific details found.";

pub const FALLBACK_NAME: &str = "Nearby Gem";
pub const CUISINE_LABEL: &str = "Local Authentic";
pub const MAPS_DESCRIPTION: &str = "Found via Google Maps search. Reliable local choice.";

/// Added to a citation's position to pick its placeholder image.
const IMAGE_SEED_OFFSET: usize = 400;

/// Builds the natural-language prompt sent to the AI service.
///
/// Both coordinate components and the query are embedded verbatim.
#[must_use]
pub fn build_prompt(coordinate: Coordinate, query: &str) -> String {
    let query = if query.is_empty() { DEFAULT_QUERY } else { query };
    format!(
        "I am at latitude {lat}, longitude {lng}. Find me nearby authentic local food restaurants. \n  \
         Specific request: \"{query}\". \n  \
         Please describe the best options and tell me why they are special.",
        lat = coordinate.latitude,
        lng = coordinate.longitude,
    )
}

/// Deterministic placeholder image for the citation at `index`.
#[must_use]
pub fn placeholder_image(index: usize) -> String {
    format!(
        "https://picsum.photos/seed/{}/400/300",
        index + IMAGE_SEED_OFFSET
    )
}

/// Maps maps-kind citations to records, keeping the service's order.
///
/// The image seed uses the citation's position in the unfiltered list, so a
/// dropped web citation still consumes its seed.
#[must_use]
pub fn records_from_citations(citations: &[GroundingCitation]) -> Vec<RecommendationRecord> {
    citations
        .iter()
        .enumerate()
        .filter_map(|(index, citation)| {
            let maps = citation.maps.as_ref()?;
            let name = maps
                .title
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or(FALLBACK_NAME);
            let uri = maps.uri.as_deref().unwrap_or_default();
            Some(RecommendationRecord {
                name: name.to_owned(),
                cuisine: CUISINE_LABEL.to_owned(),
                description: MAPS_DESCRIPTION.to_owned(),
                address: Some(uri.to_owned()),
                rating: None,
                map_url: (!uri.is_empty()).then(|| uri.to_owned()),
                image: Some(placeholder_image(index)),
            })
        })
        .collect()
}

/// Requests grounded recommendations near `coordinate` for `query`.
///
/// # Errors
///
/// Returns [`FetchFailure`] for any failure of the underlying source. The
/// cause is logged and otherwise discarded.
pub async fn find_local_food<S>(
    source: &S,
    coordinate: Coordinate,
    query: &str,
) -> Result<LocalFoodAnswer, FetchFailure>
where
    S: GroundedAnswerSource + Sync,
{
    let prompt = build_prompt(coordinate, query);
    tracing::debug!(%coordinate, query, "requesting grounded recommendations");

    let answer = source
        .request_grounded_answer(&prompt, coordinate)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "grounded answer request failed");
            FetchFailure
        })?;

    let explanation = answer
        .text
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| NO_DETAILS_EXPLANATION.to_owned());
    let records = records_from_citations(&answer.citations);

    tracing::info!(
        citations = answer.citations.len(),
        records = records.len(),
        "recommendations ready"
    );

    Ok(LocalFoodAnswer {
        explanation,
        records,
    })
}

#[cfg(test)]
#[path = "recommend_test.rs"]
mod tests;
