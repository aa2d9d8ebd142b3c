// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava-Dashboard: pull your Strava activities into a clean table
//!
//! This crate provides a token-managed Strava client, a paginated activity
//! fetcher and a normalizer that turns Strava's loosely-typed JSON into
//! canonical rows, plus the filters and aggregates a dashboard needs.

pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod services;
pub mod time_utils;

pub use config::Config;
pub use error::AppError;
pub use models::{ActivityFilter, ActivityRow, ActivitySummary, ActivityTable, Credential};
pub use services::{load_activities, ActivityFetcher, ActivityNormalizer, TokenManager};
