//! Core domain types and the recommendation pipeline for LocalEats.
//!
//! Holds everything that does not touch the network: coordinates, display
//! records, the search state owned by the controller, the narrow
//! [`GroundedAnswerSource`] seam that AI vendors implement, and the
//! transformation from grounded answers into [`RecommendationRecord`]s.

pub mod app_config;
pub mod config;
pub mod coordinate;
pub mod error;
pub mod grounding;
pub mod recommend;
pub mod record;
pub mod state;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use coordinate::Coordinate;
pub use error::{ConfigError, CoordinateError, FetchFailure, UNHANDLED_ERROR_MESSAGE};
pub use grounding::{GroundedAnswer, GroundedAnswerSource, GroundingCitation, MapsSource, WebSource};
pub use recommend::{build_prompt, find_local_food, records_from_citations};
pub use record::{LocalFoodAnswer, RecommendationRecord};
pub use state::{SearchState, DEFAULT_FILTER, FILTER_CHIPS};
