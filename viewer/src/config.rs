use std::env;

/// Port the EPC backend listens on, relative to the page host
pub const API_PORT: u16 = 5000;

/// Path prefix every backend endpoint lives under
pub const API_PREFIX: &str = "/api";

const DEFAULT_HOST: &str = "localhost";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host the viewer treats as its own (the page host)
    pub page_host: String,
    /// Base URL of the backend, without a trailing slash
    pub api_base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::resolve(
            env::var("EPC_PAGE_HOST").ok().as_deref(),
            env::var("EPC_API_URL").ok().as_deref(),
        )
    }

    /// Build a config from raw values; blank values count as absent.
    pub fn resolve(page_host: Option<&str>, api_url_override: Option<&str>) -> Self {
        let page_host = page_host
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .unwrap_or(DEFAULT_HOST)
            .to_string();

        let api_base_url = match api_url_override.map(str::trim).filter(|u| !u.is_empty()) {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => api_base_url_for_host(Some(&page_host)),
        };

        Self {
            page_host,
            api_base_url,
        }
    }
}

/// Derive the backend base URL from the page host.
///
/// Falls back to `localhost` when there is no usable host, e.g. a page
/// opened straight from disk.
pub fn api_base_url_for_host(host: Option<&str>) -> String {
    let host = host
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .unwrap_or(DEFAULT_HOST);
    format!("http://{}:{}{}", host, API_PORT, API_PREFIX)
}
