//! Base-URL resolution.
//!
//! The backend location is resolved once, at client construction: the
//! `STOREFRONT_API_URL` environment variable wins, otherwise the fixed
//! default below is used. There is no config-file layer; one variable is
//! the whole configuration surface.

use std::env;

/// Environment variable that overrides the backend base URL.
pub const API_URL_ENV: &str = "STOREFRONT_API_URL";

/// Default backend base URL used when no override is set.
pub const DEFAULT_API_URL: &str =
    "https://sp-427290f0791a4ec8b9a2c15c192ee581.ecs.us-west-2.on.aws";

/// Resolves the base URL from the environment, falling back to the default.
pub fn resolve_base_url() -> String {
    base_url_or_default(env::var(API_URL_ENV).ok())
}

fn base_url_or_default(overridden: Option<String>) -> String {
    overridden.unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_when_unset() {
        assert_eq!(base_url_or_default(None), DEFAULT_API_URL);
    }

    #[test]
    fn environment_override_wins() {
        let url = base_url_or_default(Some("http://localhost:3001".to_string()));
        assert_eq!(url, "http://localhost:3001");
    }
}
