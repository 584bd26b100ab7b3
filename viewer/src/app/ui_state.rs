//! UI state
//!
//! Visibility of every section of the lookup screen plus the content those
//! sections show. All show/hide helpers are idempotent.

use serde::Serialize;

use crate::view::ResultView;

/// First entry of the address selector; never a real address
pub const ADDRESS_PLACEHOLDER: &str = "Select an address...";

/// A section of the screen that can be shown or hidden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Section {
    Address,
    Results,
    Recommendations,
    Error,
    Loading,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Address,
        Section::Results,
        Section::Recommendations,
        Section::Error,
        Section::Loading,
    ];
}

/// What sort of problem the error banner is reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BannerKind {
    /// Bad input, e.g. an empty postcode
    Validation,
    /// Backend unreachable
    Connectivity,
    /// Backend answered with an error
    Server,
    /// Search succeeded but found no addresses
    NoResults,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBanner {
    pub kind: BannerKind,
    pub message: String,
}

impl ErrorBanner {
    pub fn new(kind: BannerKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// The address dropdown
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AddressSelector {
    options: Vec<String>,
    enabled: bool,
    selected: Option<String>,
}

impl AddressSelector {
    /// Entries as displayed, placeholder first
    pub fn entries(&self) -> Vec<&str> {
        std::iter::once(ADDRESS_PLACEHOLDER)
            .chain(self.options.iter().map(String::as_str))
            .collect()
    }

    /// Real addresses only
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Address at a 1-based position; 0 is the placeholder
    pub fn option(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }

    pub(crate) fn populate(&mut self, addresses: Vec<String>) {
        self.options = addresses;
        self.enabled = true;
        self.selected = None;
    }

    pub(crate) fn select(&mut self, address: &str) {
        self.selected = Some(address.to_string());
    }

    fn reset(&mut self) {
        self.options.clear();
        self.enabled = false;
        self.selected = None;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UiState {
    address_visible: bool,
    selector: AddressSelector,
    results_visible: bool,
    recommendations_visible: bool,
    result: Option<ResultView>,
    error_visible: bool,
    error: Option<ErrorBanner>,
    loading: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, section: Section) -> bool {
        match section {
            Section::Address => self.address_visible,
            Section::Results => self.results_visible,
            Section::Recommendations => self.recommendations_visible,
            Section::Error => self.error_visible,
            Section::Loading => self.loading,
        }
    }

    pub fn show(&mut self, section: Section) {
        match section {
            Section::Address => self.address_visible = true,
            Section::Results => {
                self.results_visible = true;
                self.recommendations_visible = true;
            }
            Section::Recommendations => self.recommendations_visible = true,
            Section::Error => self.error_visible = true,
            Section::Loading => self.loading = true,
        }
    }

    pub fn hide(&mut self, section: Section) {
        match section {
            Section::Address => {
                self.address_visible = false;
                self.selector.reset();
            }
            Section::Results => {
                self.results_visible = false;
                self.recommendations_visible = false;
            }
            Section::Recommendations => self.recommendations_visible = false,
            Section::Error => self.error_visible = false,
            Section::Loading => self.loading = false,
        }
    }

    pub fn show_error(&mut self, banner: ErrorBanner) {
        self.error = Some(banner);
        self.show(Section::Error);
    }

    pub fn show_addresses(&mut self, addresses: Vec<String>) {
        self.selector.populate(addresses);
        self.show(Section::Address);
    }

    pub fn show_result(&mut self, view: ResultView) {
        self.result = Some(view);
        self.show(Section::Results);
    }

    pub fn selector(&self) -> &AddressSelector {
        &self.selector
    }

    pub(crate) fn selector_mut(&mut self) -> &mut AddressSelector {
        &mut self.selector
    }

    /// The banner, if the error section is showing
    pub fn error(&self) -> Option<&ErrorBanner> {
        self.error.as_ref().filter(|_| self.error_visible)
    }

    /// The rendered result, if the results section is showing
    pub fn result(&self) -> Option<&ResultView> {
        self.result.as_ref().filter(|_| self.results_visible)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
