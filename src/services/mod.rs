// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - Strava access and the normalization pipeline.

pub mod fetcher;
pub mod normalize;
pub mod strava;
pub mod token;

pub use fetcher::ActivityFetcher;
pub use normalize::ActivityNormalizer;
pub use strava::{StravaClient, TokenRefreshResponse};
pub use token::TokenManager;

use crate::config::Config;
use crate::error::AppError;
use crate::models::ActivityTable;

/// Fetch up to the configured number of recent activities and normalize them.
pub fn load_activities(config: &Config) -> Result<ActivityTable, AppError> {
    let mut fetcher = ActivityFetcher::from_config(config)?;
    let raw = fetcher.fetch_recent_default()?;
    Ok(ActivityNormalizer::normalize(&raw))
}
