// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Low-level Strava HTTP client.
//!
//! Handles:
//! - Refresh-token grant against the OAuth endpoint
//! - Single-page activity listing
//! - Mapping transport/HTTP failures onto [`AppError`]
//!
//! Calls are blocking and carry a fixed per-request timeout. Nothing here
//! retries.

use crate::config::Config;
use crate::error::AppError;
use crate::models::RawActivity;
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: Client,
    auth_url: String,
    base_url: String,
    client_id: String,
    client_secret: String,
}

/// Why a single HTTP exchange failed, before it is attributed to auth or fetch.
#[derive(Debug)]
struct HttpFailure {
    status: Option<u16>,
    message: String,
}

impl StravaClient {
    /// Create a new Strava client from configuration.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            http,
            auth_url: config.auth_url.clone(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            client_id: config.strava_client_id.clone(),
            client_secret: config.strava_client_secret.clone(),
        })
    }

    /// Exchange a refresh token for a fresh access token.
    pub fn refresh_token(&self, refresh_token: &str) -> Result<TokenRefreshResponse, AppError> {
        let response = self
            .http
            .post(&self.auth_url)
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
            ])
            .send()
            .map_err(|e| HttpFailure::transport("Token refresh request failed", e));

        response
            .and_then(check_response_json)
            .map_err(|f| AppError::Auth {
                status: f.status,
                message: f.message,
            })
    }

    /// List one page of the authenticated athlete's activities.
    ///
    /// Pages are 1-based. An empty vector means Strava has no more data.
    pub fn list_activities(
        &self,
        access_token: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<RawActivity>, AppError> {
        let url = format!("{}/athlete/activities", self.base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .query(&[("page", page), ("per_page", per_page)])
            .send()
            .map_err(|e| HttpFailure::transport("Activity list request failed", e));

        response
            .and_then(check_response_json)
            .map_err(|f| AppError::Fetch {
                page,
                status: f.status,
                message: f.message,
            })
    }
}

impl HttpFailure {
    fn transport(context: &str, err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("{}: timed out: {}", context, err)
        } else {
            format!("{}: {}", context, err)
        };
        Self {
            status: err.status().map(|s| s.as_u16()),
            message,
        }
    }
}

/// Check response status and parse the JSON body.
fn check_response_json<T: DeserializeOwned>(response: Response) -> Result<T, HttpFailure> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().unwrap_or_default();

        if status.as_u16() == 429 {
            tracing::warn!("Strava rate limit hit (429)");
        }

        return Err(HttpFailure {
            status: Some(status.as_u16()),
            message: format!("HTTP {}: {}", status, body),
        });
    }

    response.json().map_err(|e| HttpFailure {
        status: Some(status.as_u16()),
        message: format!("JSON parse error: {}", e),
    })
}

/// Token refresh response from Strava.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRefreshResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix seconds
    pub expires_at: i64,
}
