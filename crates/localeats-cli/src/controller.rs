//! View/state controller.
//!
//! Owns the [`SearchState`] and the current [`Phase`], and is the only thing
//! that mutates them. Each user action maps to one transition method; the
//! async helpers [`Controller::locate`] and [`Controller::submit`] wire those
//! transitions to the location provider and recommendation source.
//!
//! Searches are split into [`Controller::begin_search`] and
//! [`Controller::complete_search`] so overlapping requests can be expressed.
//! There is no generation check: whichever completion lands last wins.

use localeats_core::{
    find_local_food, Coordinate, FetchFailure, GroundedAnswerSource, LocalFoodAnswer, SearchState,
    UNHANDLED_ERROR_MESSAGE,
};
use localeats_locator::{LocationFailure, LocationProvider};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    AwaitingLocation,
    Searching,
    Ready,
    Error(String),
}

/// One in-flight search: what was asked and where.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTicket {
    /// Sequence number, for logs only.
    pub id: u64,
    pub coordinate: Coordinate,
    pub query: String,
}

/// Outcome of a submit.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchTrigger {
    /// No location is held; the caller must locate instead of searching.
    NeedsLocation,
    Started(SearchTicket),
}

pub struct Controller<L, S> {
    locator: L,
    source: S,
    state: SearchState,
    phase: Phase,
    next_ticket: u64,
}

impl<L, S> Controller<L, S>
where
    L: LocationProvider,
    S: GroundedAnswerSource + Sync,
{
    #[must_use]
    pub fn new(locator: L, source: S) -> Self {
        Self {
            locator,
            source,
            state: SearchState::default(),
            phase: Phase::Idle,
            next_ticket: 1,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    pub fn begin_locate(&mut self) {
        self.phase = Phase::AwaitingLocation;
    }

    /// A failed fix keeps whatever location was held before.
    pub fn finish_locate(&mut self, result: Result<Coordinate, LocationFailure>) {
        match result {
            Ok(coordinate) => {
                tracing::info!(%coordinate, "location acquired");
                self.state.location = Some(coordinate);
                self.state.error_message = None;
                self.phase = Phase::Idle;
            }
            Err(failure) => {
                tracing::warn!(%failure, "location unavailable");
                self.fail(&failure);
            }
        }
    }

    /// Typed query text. Does not search.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.state.query_text = text.into();
    }

    /// Marks a filter chip active and copies its label into the query.
    /// Does not search and leaves displayed results alone.
    pub fn select_filter(&mut self, label: impl Into<String>) {
        let label = label.into();
        self.state.query_text.clone_from(&label);
        self.state.active_filter = label;
    }

    pub fn begin_search(&mut self) -> SearchTrigger {
        let Some(coordinate) = self.state.location else {
            tracing::debug!("search requested without a location");
            self.begin_locate();
            return SearchTrigger::NeedsLocation;
        };

        let ticket = SearchTicket {
            id: self.next_ticket,
            coordinate,
            query: self.state.effective_query().to_owned(),
        };
        self.next_ticket += 1;

        self.state.is_loading = true;
        self.state.error_message = None;
        self.phase = Phase::Searching;
        tracing::debug!(ticket = ticket.id, query = %ticket.query, "search started");

        SearchTrigger::Started(ticket)
    }

    /// Commits a search result. A failure keeps the previous records and
    /// explanation on screen behind the error.
    pub fn complete_search(
        &mut self,
        ticket: &SearchTicket,
        result: Result<LocalFoodAnswer, FetchFailure>,
    ) {
        self.state.is_loading = false;
        match result {
            Ok(answer) => {
                tracing::debug!(
                    ticket = ticket.id,
                    records = answer.records.len(),
                    "search completed"
                );
                self.state.records = answer.records;
                self.state.explanation_text = answer.explanation;
                self.state.error_message = None;
                self.phase = Phase::Ready;
            }
            Err(failure) => {
                tracing::debug!(ticket = ticket.id, "search failed");
                self.fail(&failure);
            }
        }
    }

    fn fail(&mut self, err: &dyn std::fmt::Display) {
        let message = banner_message(err);
        self.state.error_message = Some(message.clone());
        self.phase = Phase::Error(message);
    }

    // -----------------------------------------------------------------------
    // Orchestration
    // -----------------------------------------------------------------------

    /// Asks the location provider for a fresh fix.
    pub async fn locate(&mut self) {
        self.begin_locate();
        let result = self.locator.acquire_location().await;
        self.finish_locate(result);
    }

    /// Submits the current query, locating first if no location is held.
    pub async fn submit(&mut self) {
        match self.begin_search() {
            SearchTrigger::NeedsLocation => {
                let result = self.locator.acquire_location().await;
                self.finish_locate(result);
            }
            SearchTrigger::Started(ticket) => {
                let result = self.run_ticket(&ticket).await;
                self.complete_search(&ticket, result);
            }
        }
    }

    /// Runs a ticket against the source without touching state.
    pub async fn run_ticket(&self, ticket: &SearchTicket) -> Result<LocalFoodAnswer, FetchFailure> {
        find_local_food(&self.source, ticket.coordinate, &ticket.query).await
    }
}

/// Error text for the banner; empty messages get the generic fallback.
fn banner_message(err: &dyn std::fmt::Display) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        UNHANDLED_ERROR_MESSAGE.to_owned()
    } else {
        message
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
pub(crate) mod tests;
