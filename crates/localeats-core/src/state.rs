use crate::coordinate::Coordinate;
use crate::record::RecommendationRecord;

/// Filter chip that is active before the user picks one.
pub const DEFAULT_FILTER: &str = "All";

/// Preset query labels offered as filter chips.
pub const FILTER_CHIPS: [&str; 5] = [
    "Local Gems",
    "Street Food",
    "Authentic",
    "Hidden Spots",
    "Traditional",
];

/// Everything the view needs to render one frame.
///
/// `records` and `explanation_text` are only ever replaced together.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub records: Vec<RecommendationRecord>,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub location: Option<Coordinate>,
    pub query_text: String,
    pub explanation_text: String,
    pub active_filter: String,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            is_loading: false,
            error_message: None,
            location: None,
            query_text: String::new(),
            explanation_text: String::new(),
            active_filter: DEFAULT_FILTER.to_owned(),
        }
    }
}

impl SearchState {
    /// Query to send: typed text, else the active chip label.
    #[must_use]
    pub fn effective_query(&self) -> &str {
        if self.query_text.is_empty() {
            &self.active_filter
        } else {
            &self.query_text
        }
    }
}
