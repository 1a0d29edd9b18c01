//! Application configuration.
//!
//! Centralized configuration for the CargoHub frontend.
//! The API base URL is baked in at build time from the `API_BASE_URL`
//! environment variable; everything else is a plain constant.

use std::time::Duration;

/// Backend API base URL used when `API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Order intake endpoint, relative to the API base URL.
pub const ORDERS_PATH: &str = "/api/v1/orders/";

/// How long the "submitted" confirmation stays up before the modal closes.
pub const SUBMIT_SUCCESS_DELAY: Duration = Duration::from_secs(3);

/// Brand name shown in the header, footer and document title.
pub const APP_NAME: &str = "CargoHub";

/// Contact phone, display form.
pub const CONTACT_PHONE: &str = "+7 (999) 123-45-67";

/// Contact phone, `tel:` form.
pub const CONTACT_PHONE_HREF: &str = "tel:+79991234567";

pub const CONTACT_EMAIL: &str = "info@cargo-express.com";

/// Backend API base URL.
///
/// Taken from `API_BASE_URL` at compile time, falling back to
/// [`DEFAULT_API_BASE_URL`] for local development.
pub fn api_base_url() -> &'static str {
    match option_env!("API_BASE_URL") {
        Some(url) if !url.trim().is_empty() => url,
        _ => DEFAULT_API_BASE_URL,
    }
}

/// Full URL of the order intake endpoint for a given base URL.
///
/// A trailing slash on `base` is tolerated.
pub fn orders_endpoint(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), ORDERS_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_endpoint_joins_path() {
        assert_eq!(
            orders_endpoint("http://localhost:8000"),
            "http://localhost:8000/api/v1/orders/"
        );
    }

    #[test]
    fn test_orders_endpoint_tolerates_trailing_slash() {
        assert_eq!(
            orders_endpoint("https://api.example.com/"),
            "https://api.example.com/api/v1/orders/"
        );
    }

    #[test]
    fn test_api_base_url_is_never_empty() {
        assert!(!api_base_url().is_empty());
    }
}
