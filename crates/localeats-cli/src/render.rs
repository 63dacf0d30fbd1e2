//! Plain-text rendering of a [`SearchState`].

use std::fmt::Write as _;

use localeats_core::{RecommendationRecord, SearchState, DEFAULT_FILTER, FILTER_CHIPS};

const SKELETON_CARDS: usize = 3;
const RULE: &str = "----------------------------------------";

/// Renders the whole screen for `state`.
#[must_use]
pub fn render(state: &SearchState) -> String {
    let mut out = String::new();

    out.push_str("LocalEats AI\nAuthentic flavors, intelligently found.\n\n");
    out.push_str(&filter_line(&state.active_filter));
    out.push_str("\n\n");

    if state.location.is_none() && state.error_message.is_none() {
        out.push_str(
            "i We need your location to find the best nearby food. Run `locate` to try again.\n\n",
        );
    }

    if let Some(message) = &state.error_message {
        let _ = writeln!(out, "! {message}\n");
    }

    if !state.explanation_text.is_empty() && !state.is_loading {
        let _ = writeln!(out, "AI INSIGHT\n\"{}\"\n", state.explanation_text);
    }

    let heading = if state.is_loading {
        "Finding Flavors..."
    } else {
        "Nearby Recommendations"
    };
    let _ = writeln!(out, "{heading} ({} Results)", state.records.len());
    out.push_str(RULE);
    out.push('\n');

    if state.is_loading {
        for _ in 0..SKELETON_CARDS {
            out.push_str("[ ........................ ]\n");
        }
    } else if !state.records.is_empty() {
        for record in &state.records {
            out.push_str(&card(record));
            out.push_str(RULE);
            out.push('\n');
        }
    } else if state.error_message.is_none() && state.location.is_some() {
        out.push_str("Hungry for something?\nHit search to find local delicacies nearby.\n");
    }

    out
}

/// Chip row with the active chip in brackets. `All` is shown only while it
/// is the active one.
fn filter_line(active: &str) -> String {
    let mut chips: Vec<String> = Vec::with_capacity(FILTER_CHIPS.len() + 1);
    if active == DEFAULT_FILTER {
        chips.push(format!("[{DEFAULT_FILTER}]"));
    }
    for chip in FILTER_CHIPS {
        if chip == active {
            chips.push(format!("[{chip}]"));
        } else {
            chips.push(chip.to_owned());
        }
    }
    chips.join("  ")
}

fn card(record: &RecommendationRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}  <{}>", record.name, record.cuisine);
    let _ = writeln!(out, "  {}", record.description);
    if let Some(rating) = record.rating.as_deref().filter(|r| !r.is_empty()) {
        let _ = writeln!(out, "  Rating: {rating}");
    }
    if let Some(url) = record.map_url.as_deref().filter(|u| !u.is_empty()) {
        let _ = writeln!(out, "  View on Maps: {url}");
    }
    if let Some(image) = record.image.as_deref() {
        let _ = writeln!(out, "  Image: {image}");
    }
    out
}

#[cfg(test)]
mod tests {
    use localeats_core::Coordinate;

    use super::*;

    fn record(name: &str) -> RecommendationRecord {
        RecommendationRecord {
            name: name.to_owned(),
            cuisine: "Local Authentic".to_owned(),
            description: "Found via Google Maps search. Reliable local choice.".to_owned(),
            address: Some("https://maps.google.com/?cid=1".to_owned()),
            rating: None,
            map_url: Some("https://maps.google.com/?cid=1".to_owned()),
            image: Some("https://picsum.photos/seed/400/400/300".to_owned()),
        }
    }

    fn located() -> SearchState {
        SearchState {
            location: Some(Coordinate::new(1.0, 2.0).unwrap()),
            ..SearchState::default()
        }
    }

    #[test]
    fn no_location_shows_hint() {
        let out = render(&SearchState::default());
        assert!(out.contains("We need your location"));
        assert!(!out.contains("Hungry for something?"));
    }

    #[test]
    fn located_without_results_shows_empty_state() {
        let out = render(&located());
        assert!(out.contains("Hungry for something?"));
        assert!(out.contains("Nearby Recommendations (0 Results)"));
    }

    #[test]
    fn loading_shows_skeletons_and_hides_insight() {
        let state = SearchState {
            is_loading: true,
            explanation_text: "old insight".to_owned(),
            records: vec![record("Old")],
            ..located()
        };
        let out = render(&state);
        assert!(out.contains("Finding Flavors..."));
        assert_eq!(out.matches("[ ....").count(), 3);
        assert!(!out.contains("old insight"));
        assert!(!out.contains("Old  <"));
    }

    #[test]
    fn results_render_as_cards_with_insight() {
        let state = SearchState {
            explanation_text: "Two great spots.".to_owned(),
            records: vec![record("Jay Fai"), record("Thip Samai")],
            ..located()
        };
        let out = render(&state);
        assert!(out.contains("AI INSIGHT\n\"Two great spots.\""));
        assert!(out.contains("Nearby Recommendations (2 Results)"));
        assert!(out.contains("Jay Fai  <Local Authentic>"));
        assert!(out.contains("View on Maps: https://maps.google.com/?cid=1"));
        assert!(out.find("Jay Fai").unwrap() < out.find("Thip Samai").unwrap());
    }

    #[test]
    fn error_banner_shown_above_stale_results() {
        let state = SearchState {
            error_message: Some("Failed to fetch local food recommendations. Please check your connection.".to_owned()),
            records: vec![record("Still Here")],
            ..located()
        };
        let out = render(&state);
        assert!(out.contains("! Failed to fetch"));
        assert!(out.contains("Still Here"));
        assert!(out.find("! Failed").unwrap() < out.find("Still Here").unwrap());
    }

    #[test]
    fn filter_line_brackets_active_chip() {
        assert!(filter_line("All").starts_with("[All]"));
        let line = filter_line("Street Food");
        assert!(line.contains("[Street Food]"));
        assert!(!line.contains("All"));
    }
}
