//! HTTP utilities for Sleeper API communication

use crate::Result;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT},
    Client,
};

/// Headers sent with every Sleeper request.
///
/// Sleeper's read API is public, so there is no auth; `SLEEPER_USER_AGENT`
/// overrides the default agent string.
pub fn default_header_map() -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    let agent = std::env::var("SLEEPER_USER_AGENT")
        .unwrap_or_else(|_| format!("sleeper-recap/{}", env!("CARGO_PKG_VERSION")));
    h.insert(USER_AGENT, HeaderValue::from_str(&agent)?);
    Ok(h)
}

/// Build the shared client used for all Sleeper calls in one run.
pub fn build_client() -> Result<Client> {
    Ok(Client::builder()
        .default_headers(default_header_map()?)
        .build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_header_map() {
        std::env::remove_var("SLEEPER_USER_AGENT");

        let headers = default_header_map().unwrap();
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert!(headers
            .get(USER_AGENT)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("sleeper-recap/"));
    }

    #[test]
    fn test_build_client() {
        assert!(build_client().is_ok());
    }
}
