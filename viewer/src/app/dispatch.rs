//! Dispatch table
//!
//! User actions and backend completions are both events fed to
//! `ViewController::handle`. Handling an event may ask for one backend call
//! (an `Effect`); `run_effect` performs it and returns the completion event.
//! Front ends decide where effects run; tests can drive the controller
//! without any of them.

use crate::domain::entities::RatingResult;
use crate::domain::ports::{EpcBackend, HealthStatus, SearchResponse};
use crate::error::BackendError;

use super::controller::{RatingTicket, SearchTicket};

/// Something the user did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Submit the postcode box
    Search { postcode: String },
    /// Pick an entry from the address selector
    SelectAddress { address: String },
    /// Re-run the reachability check
    CheckHealth,
}

impl UserAction {
    pub fn name(&self) -> &'static str {
        match self {
            UserAction::Search { .. } => "search",
            UserAction::SelectAddress { .. } => "select_address",
            UserAction::CheckHealth => "check_health",
        }
    }
}

/// Input to the controller
#[derive(Debug, Clone, PartialEq)]
pub enum ControllerEvent {
    User(UserAction),
    SearchCompleted {
        ticket: SearchTicket,
        result: Result<SearchResponse, BackendError>,
    },
    RatingCompleted {
        ticket: RatingTicket,
        result: Result<RatingResult, BackendError>,
    },
    HealthChecked(Result<HealthStatus, BackendError>),
}

impl From<UserAction> for ControllerEvent {
    fn from(action: UserAction) -> Self {
        ControllerEvent::User(action)
    }
}

/// A backend call the controller wants made
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchAddresses(SearchTicket),
    FetchRating(RatingTicket),
    CheckHealth,
}

/// Perform one backend call and wrap its outcome as a completion event
pub async fn run_effect<B>(backend: &B, effect: Effect) -> ControllerEvent
where
    B: EpcBackend + ?Sized,
{
    match effect {
        Effect::FetchAddresses(ticket) => {
            let result = backend.search(&ticket.postcode).await;
            ControllerEvent::SearchCompleted { ticket, result }
        }
        Effect::FetchRating(ticket) => {
            let result = backend.rating(&ticket.postcode, &ticket.address).await;
            ControllerEvent::RatingCompleted { ticket, result }
        }
        Effect::CheckHealth => ControllerEvent::HealthChecked(backend.health().await),
    }
}
