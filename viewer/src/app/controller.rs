//! View controller
//!
//! Owns the UI state for one lookup screen and walks the search cycle:
//!
//! ```text
//! Idle -> Searching -> {AddressesShown | NoResults | SearchError}
//!      -> (selection) RatingLoading -> {ResultsShown | RatingError}
//! ```
//!
//! Every request carries a generation number. A completion whose generation
//! is no longer current belongs to a superseded request and is dropped, so
//! a slow first search can never overwrite the answer to a second one.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::entities::{Postcode, RatingResult};
use crate::domain::ports::{EpcBackend, HealthStatus, SearchResponse};
use crate::error::{BackendError, DomainError};
use crate::view::render_result;

use super::dispatch::{run_effect, ControllerEvent, Effect, UserAction};
use super::ui_state::{BannerKind, ErrorBanner, Section, UiState};

pub const NO_RESULTS_MESSAGE: &str = "No properties found for this postcode";
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to search for addresses. Please try again.";
pub const RATING_FAILED_MESSAGE: &str = "Failed to load energy rating. Please try again.";
pub const SEARCH_FIRST_MESSAGE: &str = "Please search for a postcode first";

/// Where the current search cycle is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Idle,
    Searching,
    AddressesShown,
    NoResults,
    SearchError,
    RatingLoading,
    ResultsShown,
    RatingError,
}

/// An address search in flight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub postcode: Postcode,
}

/// A rating fetch in flight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingTicket {
    pub generation: u64,
    pub postcode: Postcode,
    pub address: String,
}

pub struct ViewController<B: EpcBackend> {
    backend: Arc<B>,
    base_url: String,
    state: UiState,
    phase: Phase,
    /// Postcode whose addresses are in the selector
    postcode: Option<Postcode>,
    search_generation: u64,
    rating_generation: u64,
}

impl<B: EpcBackend> ViewController<B> {
    pub fn new(backend: Arc<B>, base_url: impl Into<String>) -> Self {
        Self {
            backend,
            base_url: base_url.into(),
            state: UiState::new(),
            phase: Phase::Idle,
            postcode: None,
            search_generation: 0,
            rating_generation: 0,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn postcode(&self) -> Option<&Postcode> {
        self.postcode.as_ref()
    }

    pub fn backend(&self) -> Arc<B> {
        Arc::clone(&self.backend)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Apply one event. Returns the backend call to make next, if any.
    pub fn handle(&mut self, event: ControllerEvent) -> Option<Effect> {
        match event {
            ControllerEvent::User(UserAction::Search { postcode }) => {
                self.begin_search(&postcode).map(Effect::FetchAddresses)
            }
            ControllerEvent::User(UserAction::SelectAddress { address }) => {
                self.begin_rating(&address).map(Effect::FetchRating)
            }
            ControllerEvent::User(UserAction::CheckHealth) => Some(Effect::CheckHealth),
            ControllerEvent::SearchCompleted { ticket, result } => {
                self.finish_search(ticket, result);
                None
            }
            ControllerEvent::RatingCompleted { ticket, result } => {
                self.finish_rating(ticket, result);
                None
            }
            ControllerEvent::HealthChecked(result) => {
                self.apply_health(result);
                None
            }
        }
    }

    /// Validate the postcode and reset the screen for a new search.
    ///
    /// Returns `None` when validation fails; the banner is already showing.
    pub fn begin_search(&mut self, input: &str) -> Option<SearchTicket> {
        let postcode = match Postcode::parse(input) {
            Ok(postcode) => postcode,
            Err(DomainError::Validation(message)) => {
                self.state
                    .show_error(ErrorBanner::new(BannerKind::Validation, message));
                return None;
            }
        };

        // A new search makes any pending rating meaningless too
        self.search_generation += 1;
        self.rating_generation += 1;
        self.postcode = None;
        self.phase = Phase::Searching;

        self.state.hide(Section::Error);
        self.state.hide(Section::Results);
        self.state.hide(Section::Address);
        self.state.show(Section::Loading);

        tracing::info!(postcode = %postcode, generation = self.search_generation, "searching");

        Some(SearchTicket {
            generation: self.search_generation,
            postcode,
        })
    }

    pub fn finish_search(
        &mut self,
        ticket: SearchTicket,
        result: Result<SearchResponse, BackendError>,
    ) {
        if ticket.generation != self.search_generation {
            tracing::debug!(
                stale = ticket.generation,
                current = self.search_generation,
                "dropping stale search response"
            );
            return;
        }

        self.state.hide(Section::Loading);

        match result {
            Ok(response) if response.addresses.is_empty() => {
                tracing::info!(postcode = %ticket.postcode, "no addresses found");
                self.state.hide(Section::Address);
                self.state
                    .show_error(ErrorBanner::new(BannerKind::NoResults, NO_RESULTS_MESSAGE));
                self.phase = Phase::NoResults;
            }
            Ok(response) => {
                tracing::info!(
                    postcode = %ticket.postcode,
                    count = response.addresses.len(),
                    "addresses found"
                );
                self.state.hide(Section::Error);
                self.state.show_addresses(response.addresses);
                self.postcode = Some(ticket.postcode);
                self.phase = Phase::AddressesShown;
            }
            Err(e) => {
                tracing::warn!(postcode = %ticket.postcode, error = %e, "search failed");
                self.state.hide(Section::Address);
                self.state.show_error(ErrorBanner::new(
                    banner_kind(&e),
                    e.user_message(SEARCH_FAILED_MESSAGE),
                ));
                self.phase = Phase::SearchError;
            }
        }
    }

    /// Start fetching the rating for a selected address.
    ///
    /// A blank address (the placeholder) just hides the results.
    pub fn begin_rating(&mut self, address: &str) -> Option<RatingTicket> {
        let address = address.trim();
        if address.is_empty() {
            self.state.hide(Section::Results);
            return None;
        }

        let Some(postcode) = self.postcode.clone() else {
            self.state.show_error(ErrorBanner::new(
                BannerKind::Validation,
                SEARCH_FIRST_MESSAGE,
            ));
            return None;
        };

        self.rating_generation += 1;
        self.phase = Phase::RatingLoading;

        self.state.selector_mut().select(address);
        self.state.hide(Section::Error);
        self.state.show(Section::Loading);

        tracing::info!(
            postcode = %postcode,
            address = %address,
            generation = self.rating_generation,
            "loading rating"
        );

        Some(RatingTicket {
            generation: self.rating_generation,
            postcode,
            address: address.to_string(),
        })
    }

    pub fn finish_rating(
        &mut self,
        ticket: RatingTicket,
        result: Result<RatingResult, BackendError>,
    ) {
        if ticket.generation != self.rating_generation {
            tracing::debug!(
                stale = ticket.generation,
                current = self.rating_generation,
                "dropping stale rating response"
            );
            return;
        }

        self.state.hide(Section::Loading);

        match result {
            Ok(result) => {
                tracing::info!(
                    address = %ticket.address,
                    rating = result.rating.as_deref().unwrap_or("-"),
                    recommendations = result.recommendations.len(),
                    "rating loaded"
                );
                let view = render_result(&result, &ticket.address, ticket.postcode.as_str());
                self.state.hide(Section::Error);
                self.state.show_result(view);
                self.phase = Phase::ResultsShown;
            }
            Err(e) => {
                tracing::warn!(address = %ticket.address, error = %e, "rating failed");
                self.state.show_error(ErrorBanner::new(
                    banner_kind(&e),
                    e.user_message(RATING_FAILED_MESSAGE),
                ));
                self.phase = Phase::RatingError;
            }
        }
    }

    /// Surface a failed reachability check. Never blocks anything else.
    pub fn apply_health(&mut self, result: Result<HealthStatus, BackendError>) {
        match result {
            Ok(status) => {
                tracing::debug!(status = ?status.status, database = ?status.database, "backend healthy");
            }
            // Any 2xx counts, whatever the body
            Err(BackendError::Deserialization(_)) => {
                tracing::debug!("backend healthy (unrecognised body)");
            }
            Err(e) => {
                tracing::warn!(base_url = %self.base_url, error = %e, "health check failed");
                let message = match &e {
                    BackendError::Api { status, .. } => format!(
                        "Server at {} is not healthy (HTTP {})",
                        self.base_url, status
                    ),
                    _ => format!(
                        "Cannot connect to the server at {}. Make sure the backend is running.",
                        self.base_url
                    ),
                };
                self.state
                    .show_error(ErrorBanner::new(BannerKind::Connectivity, message));
            }
        }
    }

    /// Run a user action to completion, making backend calls inline.
    pub async fn dispatch(&mut self, action: UserAction) {
        let mut next = self.handle(action.into());
        while let Some(effect) = next {
            let event = run_effect(self.backend.as_ref(), effect).await;
            next = self.handle(event);
        }
    }

    pub async fn search(&mut self, postcode: &str) {
        self.dispatch(UserAction::Search {
            postcode: postcode.to_string(),
        })
        .await
    }

    pub async fn select_address(&mut self, address: &str) {
        self.dispatch(UserAction::SelectAddress {
            address: address.to_string(),
        })
        .await
    }

    pub async fn check_health(&mut self) {
        self.dispatch(UserAction::CheckHealth).await
    }
}

fn banner_kind(error: &BackendError) -> BannerKind {
    match error {
        BackendError::Connection(_) => BannerKind::Connectivity,
        BackendError::Api { .. } | BackendError::Deserialization(_) => BannerKind::Server,
    }
}
