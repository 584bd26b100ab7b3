//! Application layer
//!
//! The view controller, its UI state, and the dispatch table that connects
//! user actions and backend completions to it.

pub mod controller;
pub mod dispatch;
pub mod ui_state;

pub use controller::{
    Phase, RatingTicket, SearchTicket, ViewController, NO_RESULTS_MESSAGE,
    RATING_FAILED_MESSAGE, SEARCH_FAILED_MESSAGE, SEARCH_FIRST_MESSAGE,
};
pub use dispatch::{run_effect, ControllerEvent, Effect, UserAction};
pub use ui_state::{
    AddressSelector, BannerKind, ErrorBanner, Section, UiState, ADDRESS_PLACEHOLDER,
};
