// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Paginated retrieval of recent activities.
//!
//! Pages are requested one at a time: Strava's `page=N` addressing has no
//! snapshot, so an activity created mid-fetch can shift records across page
//! boundaries and show up twice. Duplicates are passed through untouched.

use crate::config::{Config, MAX_PAGE_SIZE};
use crate::error::AppError;
use crate::models::RawActivity;
use crate::services::{StravaClient, TokenManager};

/// Fetches recent activities with a managed access token.
pub struct ActivityFetcher {
    client: StravaClient,
    tokens: TokenManager,
    max_activities: usize,
    per_page: u32,
}

impl ActivityFetcher {
    pub fn new(client: StravaClient, tokens: TokenManager) -> Self {
        let defaults = Config::default();
        Self {
            client,
            tokens,
            max_activities: defaults.max_activities,
            per_page: defaults.per_page,
        }
    }

    /// Build the full client stack from configuration.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = StravaClient::new(config)?;
        let tokens = TokenManager::new(client.clone(), config.strava_refresh_token.clone());

        Ok(Self {
            client,
            tokens,
            max_activities: config.max_activities,
            per_page: config.per_page,
        })
    }

    pub fn tokens(&self) -> &TokenManager {
        &self.tokens
    }

    /// [`fetch_recent`](Self::fetch_recent) with the configured limits.
    pub fn fetch_recent_default(&mut self) -> Result<Vec<RawActivity>, AppError> {
        self.fetch_recent(self.max_activities, self.per_page)
    }

    /// Fetch up to `max_activities` of the athlete's most recent activities.
    ///
    /// Stops at the first empty page or once enough records are collected;
    /// the final page is truncated if it overshoots. Any failed page fails
    /// the whole fetch.
    pub fn fetch_recent(
        &mut self,
        max_activities: usize,
        page_size: u32,
    ) -> Result<Vec<RawActivity>, AppError> {
        if max_activities == 0 {
            return Err(AppError::InvalidArgument(
                "max_activities must be positive".to_string(),
            ));
        }
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(AppError::InvalidArgument(format!(
                "page_size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, page_size
            )));
        }

        let mut activities: Vec<RawActivity> = Vec::new();
        let mut page = 1u32;
        let mut requests = 0u32;

        while activities.len() < max_activities {
            // Only hits the network when the token is missing or near expiry
            let access_token = self.tokens.ensure_valid_credential()?.access_token.clone();

            let chunk = self
                .client
                .list_activities(&access_token, page, page_size)?;
            requests += 1;

            tracing::debug!(page, count = chunk.len(), "Fetched activity page");

            if chunk.is_empty() {
                break;
            }
            activities.extend(chunk);
            page += 1;
        }

        activities.truncate(max_activities);
        tracing::info!(
            count = activities.len(),
            requests,
            "Fetched recent activities"
        );
        Ok(activities)
    }
}
