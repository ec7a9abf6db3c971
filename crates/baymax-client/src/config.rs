//! Client configuration

use crate::ApiError;
use reqwest::Url;
use std::fmt;

/// Environment variable holding the backend origin
pub const BASE_URL_ENV: &str = "BAYMAX_API_BASE_URL";

/// Environment variable holding the bearer token of the signed-in user
pub const AUTH_TOKEN_ENV: &str = "BAYMAX_AUTH_TOKEN";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/";

/// Header that tells a tunneling proxy to skip its interstitial page
pub const TUNNEL_WARNING_HEADER: &str = "ngrok-skip-browser-warning";

/// Server-relative directory the summary endpoint resolves record files in
pub const DEFAULT_SUMMARY_PREFIX: &str = "../data/fhir/";

/// Bearer token issued by the identity provider at sign-in
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

/// Connection settings for [`crate::HttpClinicalApi`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend origin; always ends with `/`
    pub base_url: Url,
    /// Send the tunnel warning header on every request
    pub tunnel_header: bool,
    /// Prefix prepended to the patient id in summary requests
    pub summary_prefix: String,
    pub auth_token: Option<AuthToken>,
}

impl ClientConfig {
    /// Create a configuration for the given backend origin
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            tunnel_header: true,
            summary_prefix: DEFAULT_SUMMARY_PREFIX.to_string(),
            auth_token: None,
        })
    }

    pub fn with_tunnel_header(mut self, enabled: bool) -> Self {
        self.tunnel_header = enabled;
        self
    }

    pub fn with_summary_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.summary_prefix = prefix.into();
        self
    }

    pub fn with_auth_token(mut self, token: Option<AuthToken>) -> Self {
        self.auth_token = token;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            tunnel_header: true,
            summary_prefix: DEFAULT_SUMMARY_PREFIX.to_string(),
            auth_token: None,
        }
    }
}

/// Parse a backend origin, adding the trailing slash `Url::join` relies on
fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let raw = raw.trim();
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    let url = Url::parse(&normalized)
        .map_err(|e| ApiError::Config(format!("invalid base URL '{raw}': {e}")))?;
    if url.cannot_be_a_base() {
        return Err(ApiError::Config(format!("'{raw}' cannot be used as a base URL")));
    }
    Ok(url)
}
