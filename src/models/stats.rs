// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Filtering and dashboard aggregates over a normalized activity table.
//!
//! Everything here is computed on demand from an [`ActivityTable`]; nothing
//! is cached or persisted.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::models::{ActivityRow, ActivityTable};

/// Row filter applied before summarizing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityFilter {
    /// Keep only these sports. `None` keeps every row, including rows
    /// without a sport.
    pub sports: Option<BTreeSet<String>>,
    /// Inclusive lower date bound
    pub from: Option<NaiveDate>,
    /// Inclusive upper date bound
    pub to: Option<NaiveDate>,
}

impl ActivityFilter {
    pub fn matches(&self, row: &ActivityRow) -> bool {
        if let Some(sports) = &self.sports {
            match &row.sport {
                Some(sport) if sports.contains(sport) => {}
                _ => return false,
            }
        }

        if self.from.is_none() && self.to.is_none() {
            return true;
        }

        // A date bound excludes rows whose date could not be parsed
        let Some(date) = row.date else {
            return false;
        };
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

/// Headline numbers for a set of activities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub activities: usize,
    pub distance_km: f64,
    pub moving_time_h: f64,
    pub elev_gain_m: f64,
}

/// Per-sport totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportTotals {
    pub sport: String,
    pub activities: usize,
    pub distance_km: f64,
    pub moving_time_h: f64,
}

/// Training load for one Monday-start week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyLoad {
    pub week: NaiveDate,
    pub distance_km: f64,
    pub moving_time_h: f64,
}

/// Distance for one (month, sport) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySport {
    pub month: NaiveDate,
    pub sport: String,
    pub activities: usize,
    pub distance_km: f64,
}

/// One point of the long-term distance progression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CumulativePoint {
    pub start_date_local: NaiveDateTime,
    pub cum_distance_km: f64,
}

/// One run with a usable pace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaceSample {
    pub activity_id: u64,
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
    pub distance_km: f64,
    pub pace_min_per_km: f64,
}

/// One activity with heart-rate data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateSample {
    pub activity_id: u64,
    pub name: Option<String>,
    pub sport: Option<String>,
    pub moving_time_h: f64,
    pub avg_hr: f64,
}

/// All dashboard aggregates for a table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivitySummary {
    pub totals: Totals,
    /// Sorted by distance, largest first
    pub by_sport: Vec<SportTotals>,
    /// Ascending by week
    pub weekly: Vec<WeeklyLoad>,
    /// Ascending by (month, sport)
    pub monthly: Vec<MonthlySport>,
    /// Ascending by start time
    pub cumulative: Vec<CumulativePoint>,
    pub run_paces: Vec<PaceSample>,
    pub heart_rate: Vec<HeartRateSample>,
}

impl ActivityTable {
    /// Rows matching `filter`, in table order.
    pub fn filter(&self, filter: &ActivityFilter) -> ActivityTable {
        self.iter().filter(|r| filter.matches(r)).cloned().collect()
    }

    /// Compute every dashboard aggregate for this table.
    pub fn summarize(&self) -> ActivitySummary {
        ActivitySummary {
            totals: self.totals(),
            by_sport: self.by_sport(),
            weekly: self.weekly(),
            monthly: self.monthly(),
            cumulative: self.cumulative(),
            run_paces: self.run_paces(),
            heart_rate: self.heart_rate(),
        }
    }

    pub fn totals(&self) -> Totals {
        self.iter().fold(Totals::default(), |mut t, row| {
            t.activities += 1;
            t.distance_km += row.distance_km.unwrap_or(0.0);
            t.moving_time_h += row.moving_time_h.unwrap_or(0.0);
            t.elev_gain_m += row.elev_gain_m;
            t
        })
    }

    pub fn by_sport(&self) -> Vec<SportTotals> {
        let mut groups: HashMap<&str, SportTotals> = HashMap::new();
        for row in self {
            let Some(sport) = row.sport.as_deref() else {
                continue;
            };
            let entry = groups.entry(sport).or_insert_with(|| SportTotals {
                sport: sport.to_string(),
                activities: 0,
                distance_km: 0.0,
                moving_time_h: 0.0,
            });
            entry.activities += 1;
            entry.distance_km += row.distance_km.unwrap_or(0.0);
            entry.moving_time_h += row.moving_time_h.unwrap_or(0.0);
        }

        let mut out: Vec<_> = groups.into_values().collect();
        out.sort_by(|a, b| {
            b.distance_km
                .total_cmp(&a.distance_km)
                .then_with(|| a.sport.cmp(&b.sport))
        });
        out
    }

    pub fn weekly(&self) -> Vec<WeeklyLoad> {
        let mut weeks: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();
        for row in self {
            if let Some(week) = row.week {
                let entry = weeks.entry(week).or_default();
                entry.0 += row.distance_km.unwrap_or(0.0);
                entry.1 += row.moving_time_h.unwrap_or(0.0);
            }
        }

        weeks
            .into_iter()
            .map(|(week, (distance_km, moving_time_h))| WeeklyLoad {
                week,
                distance_km,
                moving_time_h,
            })
            .collect()
    }

    pub fn monthly(&self) -> Vec<MonthlySport> {
        let mut months: BTreeMap<(NaiveDate, &str), (usize, f64)> = BTreeMap::new();
        for row in self {
            if let (Some(month), Some(sport)) = (row.month, row.sport.as_deref()) {
                let entry = months.entry((month, sport)).or_default();
                entry.0 += 1;
                entry.1 += row.distance_km.unwrap_or(0.0);
            }
        }

        months
            .into_iter()
            .map(|((month, sport), (activities, distance_km))| MonthlySport {
                month,
                sport: sport.to_string(),
                activities,
                distance_km,
            })
            .collect()
    }

    pub fn cumulative(&self) -> Vec<CumulativePoint> {
        let mut dated: Vec<(NaiveDateTime, f64)> = self
            .iter()
            .filter_map(|r| Some((r.start_date_local?, r.distance_km.unwrap_or(0.0))))
            .collect();
        // Stable sort keeps pagination order for identical start times
        dated.sort_by_key(|(start, _)| *start);

        let mut running = 0.0;
        dated
            .into_iter()
            .map(|(start_date_local, km)| {
                running += km;
                CumulativePoint {
                    start_date_local,
                    cum_distance_km: running,
                }
            })
            .collect()
    }

    pub fn run_paces(&self) -> Vec<PaceSample> {
        self.iter()
            .filter(|r| r.sport.as_deref().is_some_and(|s| s.contains("Run")))
            .filter_map(|r| {
                let pace = r.pace_min_per_km.filter(|p| *p > 0.0)?;
                Some(PaceSample {
                    activity_id: r.activity_id,
                    name: r.name.clone(),
                    date: r.date,
                    distance_km: r.distance_km.unwrap_or(0.0),
                    pace_min_per_km: pace,
                })
            })
            .collect()
    }

    pub fn heart_rate(&self) -> Vec<HeartRateSample> {
        self.iter()
            .filter_map(|r| {
                Some(HeartRateSample {
                    activity_id: r.activity_id,
                    name: r.name.clone(),
                    sport: r.sport.clone(),
                    moving_time_h: r.moving_time_h.unwrap_or(0.0),
                    avg_hr: r.avg_hr?,
                })
            })
            .collect()
    }
}
