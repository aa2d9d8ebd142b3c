// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Conversion of raw Strava JSON into canonical [`ActivityRow`]s.
//!
//! Row-level problems never fail the batch: a field that is missing, null or
//! of the wrong type simply ends up absent in the row. Only records without a
//! usable `id` are dropped.

use serde_json::Value;

use crate::models::{ActivityRow, ActivityTable, RawActivity};
use crate::time_utils::{month_start, parse_local_datetime, week_start};
use chrono::Datelike;

/// Stateless normalizer for raw activity records.
pub struct ActivityNormalizer;

impl ActivityNormalizer {
    /// Normalize a batch, keeping input order.
    pub fn normalize(raw_activities: &[RawActivity]) -> ActivityTable {
        let table: ActivityTable = raw_activities
            .iter()
            .filter_map(Self::normalize_one)
            .collect();

        let skipped = raw_activities.len() - table.len();
        if skipped > 0 {
            tracing::debug!(skipped, "Skipped activities without a usable id");
        }
        table
    }

    /// Normalize a single record; `None` if it has no parseable id.
    pub fn normalize_one(raw: &RawActivity) -> Option<ActivityRow> {
        let activity_id = parse_id(raw.get("id")?)?;

        let distance_m = number(raw, "distance");
        let moving_time_s = number(raw, "moving_time");
        let distance_km = distance_m.map(|m| m / 1000.0);

        let start_date_local = string(raw, "start_date_local").and_then(parse_local_datetime);
        let date = start_date_local.map(|dt| dt.date());

        let pace_min_per_km = match (distance_km, moving_time_s) {
            (Some(km), Some(secs)) if km > 0.0 => Some(secs / 60.0 / km),
            _ => None,
        };

        Some(ActivityRow {
            activity_id,
            name: string(raw, "name").map(String::from),
            sport: string(raw, "sport_type")
                .or_else(|| string(raw, "type"))
                .map(String::from),
            distance_m,
            distance_km,
            moving_time_s,
            moving_time_h: moving_time_s.map(|s| s / 3600.0),
            elapsed_time_s: number(raw, "elapsed_time"),
            elev_gain_m: number(raw, "total_elevation_gain").unwrap_or(0.0),
            start_date_local,
            date,
            year: date.map(|d| d.year()),
            month: date.map(month_start),
            week: date.and_then(week_start),
            pace_min_per_km,
            avg_speed_mps: number(raw, "average_speed"),
            max_speed_mps: number(raw, "max_speed"),
            avg_hr: number(raw, "average_heartrate"),
            max_hr: number(raw, "max_heartrate"),
            avg_cadence: number(raw, "average_cadence"),
            kilo_joules: number(raw, "kilojoules"),
            has_hr: raw.get("has_heartrate").and_then(Value::as_bool),
            suffer_score: number(raw, "suffer_score"),
        })
    }
}

/// Strava IDs are integers, but accept digit strings too.
fn parse_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn number(raw: &RawActivity, key: &str) -> Option<f64> {
    raw.get(key).and_then(Value::as_f64).filter(|v| v.is_finite())
}

fn string<'a>(raw: &'a RawActivity, key: &str) -> Option<&'a str> {
    raw.get(key).and_then(Value::as_str)
}
