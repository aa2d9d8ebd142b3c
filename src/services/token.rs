// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Access-token lifecycle for a single Strava session.

use chrono::{DateTime, Utc};

use crate::error::AppError;
use crate::models::Credential;
use crate::services::StravaClient;
use crate::time_utils::format_utc_rfc3339;

/// Owns the current [`Credential`] and refreshes it before expiry.
///
/// State lives in the instance, so two managers never share tokens. The
/// manager is not meant for concurrent use; callers that need it from several
/// threads must serialize access or keep one manager per thread.
pub struct TokenManager {
    client: StravaClient,
    /// Refresh token for the next exchange (follows Strava's rotation)
    refresh_token: String,
    credential: Option<Credential>,
}

impl TokenManager {
    /// Start without an access token; the first call will refresh.
    pub fn new(client: StravaClient, refresh_token: String) -> Self {
        Self {
            client,
            refresh_token,
            credential: None,
        }
    }

    /// Start from a previously obtained credential.
    pub fn with_credential(client: StravaClient, credential: Credential) -> Self {
        Self {
            client,
            refresh_token: credential.refresh_token.clone(),
            credential: Some(credential),
        }
    }

    /// Currently held credential, without any expiry check.
    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    /// Refresh token that the next exchange will send.
    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    /// Return a credential that is valid for at least the refresh margin.
    ///
    /// Performs at most one token exchange. On failure the held credential is
    /// left as it was and the error is returned as [`AppError::Auth`].
    pub fn ensure_valid_credential(&mut self) -> Result<&Credential, AppError> {
        let now = Utc::now();
        let stale = self.credential.as_ref().is_none_or(|c| c.needs_refresh(now));

        if stale {
            self.refresh(now)?;
        }

        self.credential.as_ref().ok_or_else(|| AppError::Auth {
            status: None,
            message: "No credential after refresh".to_string(),
        })
    }

    fn refresh(&mut self, now: DateTime<Utc>) -> Result<(), AppError> {
        match &self.credential {
            Some(c) => tracing::info!(
                expires_at = %format_utc_rfc3339(c.expires_at),
                "Access token expiring, refreshing"
            ),
            None => tracing::info!("No access token yet, refreshing"),
        }

        let response = self.client.refresh_token(&self.refresh_token)?;

        let expires_at =
            DateTime::from_timestamp(response.expires_at, 0).ok_or_else(|| AppError::Auth {
                status: None,
                message: format!("Invalid expires_at in token response: {}", response.expires_at),
            })?;

        if expires_at <= now {
            tracing::warn!(%expires_at, "Strava returned an already expired token");
        }

        if response.refresh_token != self.refresh_token {
            tracing::debug!("Strava rotated the refresh token");
        }

        self.refresh_token = response.refresh_token.clone();
        self.credential = Some(Credential {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            expires_at,
        });

        tracing::info!(expires_at = %format_utc_rfc3339(expires_at), "Token refreshed");
        Ok(())
    }
}
