// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Raw and normalized Strava activity models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Activity record exactly as returned by the listing endpoint.
///
/// Strava's summary schema is not contractually fixed, so nothing is assumed
/// beyond "a JSON object"; the normalizer checks for each key it uses.
pub type RawActivity = serde_json::Map<String, serde_json::Value>;

/// Canonical, unit-converted activity row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRow {
    /// Strava activity ID
    pub activity_id: u64,
    pub name: Option<String>,
    /// `sport_type` when available, else the coarser `type`
    pub sport: Option<String>,

    // ─── Distance / Time ─────────────────────────────────────────
    pub distance_m: Option<f64>,
    pub distance_km: Option<f64>,
    pub moving_time_s: Option<f64>,
    pub moving_time_h: Option<f64>,
    pub elapsed_time_s: Option<f64>,
    /// Total elevation gain; missing in the source counts as flat
    pub elev_gain_m: f64,

    // ─── Calendar ────────────────────────────────────────────────
    /// Local wall-clock start time
    pub start_date_local: Option<NaiveDateTime>,
    pub date: Option<NaiveDate>,
    pub year: Option<i32>,
    /// First day of the month
    pub month: Option<NaiveDate>,
    /// Monday of the week
    pub week: Option<NaiveDate>,

    // ─── Intensity ───────────────────────────────────────────────
    /// Only set when distance is strictly positive
    pub pace_min_per_km: Option<f64>,
    pub avg_speed_mps: Option<f64>,
    pub max_speed_mps: Option<f64>,
    pub avg_hr: Option<f64>,
    pub max_hr: Option<f64>,
    pub avg_cadence: Option<f64>,
    pub kilo_joules: Option<f64>,
    pub has_hr: Option<bool>,
    pub suffer_score: Option<f64>,
}

impl ActivityRow {
    /// Row with only the ID set; everything else absent.
    pub fn empty(activity_id: u64) -> Self {
        Self {
            activity_id,
            name: None,
            sport: None,
            distance_m: None,
            distance_km: None,
            moving_time_s: None,
            moving_time_h: None,
            elapsed_time_s: None,
            elev_gain_m: 0.0,
            start_date_local: None,
            date: None,
            year: None,
            month: None,
            week: None,
            pace_min_per_km: None,
            avg_speed_mps: None,
            max_speed_mps: None,
            avg_hr: None,
            max_hr: None,
            avg_cadence: None,
            kilo_joules: None,
            has_hr: None,
            suffer_score: None,
        }
    }
}

/// Normalized activities in Strava's pagination order.
///
/// This is the hand-off to the presentation layer. An empty table is a
/// valid "no data" result, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityTable {
    rows: Vec<ActivityRow>,
}

impl ActivityTable {
    pub fn new(rows: Vec<ActivityRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[ActivityRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ActivityRow> {
        self.rows.iter()
    }

    pub fn into_rows(self) -> Vec<ActivityRow> {
        self.rows
    }

    /// Distinct sports present, sorted.
    pub fn sports(&self) -> Vec<String> {
        self.rows
            .iter()
            .filter_map(|r| r.sport.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Earliest and latest activity date, ignoring rows without one.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self.rows.iter().filter_map(|r| r.date);
        let first = dates.next()?;
        Some(dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
    }
}

impl FromIterator<ActivityRow> for ActivityTable {
    fn from_iter<I: IntoIterator<Item = ActivityRow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ActivityTable {
    type Item = &'a ActivityRow;
    type IntoIter = std::slice::Iter<'a, ActivityRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
