// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client configuration loaded from environment variables.
//!
//! Credentials are treated as opaque strings; Strava is the only judge of
//! whether they are valid.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Strava's OAuth token endpoint.
pub const STRAVA_AUTH_URL: &str = "https://www.strava.com/oauth/token";

/// Strava REST API base.
pub const STRAVA_API_BASE_URL: &str = "https://www.strava.com/api/v3";

/// Hard cap Strava enforces on `per_page` for activity listings.
pub const MAX_PAGE_SIZE: u32 = 200;

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Secrets ---
    /// Strava OAuth client ID
    pub strava_client_id: String,
    /// Strava OAuth client secret
    pub strava_client_secret: String,
    /// Long-lived refresh token used for the first token exchange
    pub strava_refresh_token: String,

    // --- Endpoints (overridable for testing against a fake provider) ---
    pub auth_url: String,
    pub api_base_url: String,

    // --- Fetch defaults ---
    /// Upper bound on activities fetched per run
    pub max_activities: usize,
    /// Page size for activity listing (at most `MAX_PAGE_SIZE`)
    pub per_page: u32,
    /// Per-request timeout
    pub http_timeout: Duration,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            strava_client_id: "test_client_id".to_string(),
            strava_client_secret: "test_secret".to_string(),
            strava_refresh_token: "test_refresh_token".to_string(),
            auth_url: STRAVA_AUTH_URL.to_string(),
            api_base_url: STRAVA_API_BASE_URL.to_string(),
            max_activities: 1000,
            per_page: MAX_PAGE_SIZE,
            http_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honoured if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let per_page: u32 = parse_or("STRAVA_PER_PAGE", MAX_PAGE_SIZE)?;
        if per_page == 0 || per_page > MAX_PAGE_SIZE {
            return Err(ConfigError::Invalid {
                name: "STRAVA_PER_PAGE",
                reason: format!("must be between 1 and {}", MAX_PAGE_SIZE),
            });
        }

        let max_activities: usize = parse_or("STRAVA_MAX_ACTIVITIES", 1000)?;
        if max_activities == 0 {
            return Err(ConfigError::Invalid {
                name: "STRAVA_MAX_ACTIVITIES",
                reason: "must be positive".to_string(),
            });
        }

        let timeout_secs: u64 = parse_or("STRAVA_HTTP_TIMEOUT_SECS", 30)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "STRAVA_HTTP_TIMEOUT_SECS",
                reason: "must be positive".to_string(),
            });
        }

        Ok(Self {
            strava_client_id: required("STRAVA_CLIENT_ID")?,
            strava_client_secret: required("STRAVA_CLIENT_SECRET")?,
            strava_refresh_token: required("STRAVA_REFRESH_TOKEN")?,
            auth_url: env::var("STRAVA_AUTH_URL").unwrap_or_else(|_| STRAVA_AUTH_URL.to_string()),
            api_base_url: env::var("STRAVA_API_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| STRAVA_API_BASE_URL.to_string()),
            max_activities,
            per_page,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .map(|v| v.trim().to_string())
        .map_err(|_| ConfigError::Missing(name))
}

fn parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}
