// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod activity;
pub mod credential;
pub mod stats;

pub use activity::{ActivityRow, ActivityTable, RawActivity};
pub use credential::Credential;
pub use stats::{ActivityFilter, ActivitySummary};
