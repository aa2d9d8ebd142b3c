// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Plain-text rendering of an [`ActivitySummary`] for the command line.

use std::fmt::Write;

use crate::models::ActivitySummary;

/// Shown when Strava returned nothing at all.
pub const NO_ACTIVITIES: &str =
    "No activities found. Check your API keys or increase max activities.";

/// Shown when activities exist but none survive the filters.
pub const NO_MATCHING_ACTIVITIES: &str = "No activities for the selected filters.";

/// Render the headline totals followed by per-sport, weekly and monthly tables.
pub fn render_text(summary: &ActivitySummary) -> String {
    let mut out = String::new();
    write_text(&mut out, summary).expect("formatting into a String is infallible");
    out
}

fn write_text(out: &mut String, summary: &ActivitySummary) -> std::fmt::Result {
    let t = &summary.totals;
    writeln!(out, "Activities:        {}", t.activities)?;
    writeln!(out, "Total distance:    {:.1} km", t.distance_km)?;
    writeln!(out, "Total time:        {:.1} h", t.moving_time_h)?;
    writeln!(out, "Total elevation:   {:.0} m", t.elev_gain_m)?;

    writeln!(out)?;
    writeln!(out, "By sport")?;
    writeln!(out, "{:<20} {:>6} {:>12} {:>10}", "sport", "count", "distance_km", "time_h")?;
    for s in &summary.by_sport {
        writeln!(
            out,
            "{:<20} {:>6} {:>12.1} {:>10.1}",
            s.sport, s.activities, s.distance_km, s.moving_time_h
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Weekly training load")?;
    writeln!(out, "{:<12} {:>12} {:>10}", "week", "distance_km", "time_h")?;
    for w in &summary.weekly {
        writeln!(
            out,
            "{:<12} {:>12.1} {:>10.1}",
            w.week.to_string(),
            w.distance_km,
            w.moving_time_h
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Monthly distance by sport")?;
    writeln!(out, "{:<8} {:<20} {:>6} {:>12}", "month", "sport", "count", "distance_km")?;
    for m in &summary.monthly {
        writeln!(
            out,
            "{:<8} {:<20} {:>6} {:>12.1}",
            m.month.format("%Y-%m").to_string(),
            m.sport,
            m.activities,
            m.distance_km
        )?;
    }

    if !summary.run_paces.is_empty() {
        let n = summary.run_paces.len();
        let mean = summary.run_paces.iter().map(|p| p.pace_min_per_km).sum::<f64>() / n as f64;
        writeln!(out)?;
        writeln!(out, "Runs with pace:    {} (mean {:.2} min/km)", n, mean)?;
    }

    if !summary.heart_rate.is_empty() {
        let n = summary.heart_rate.len();
        let mean = summary.heart_rate.iter().map(|h| h.avg_hr).sum::<f64>() / n as f64;
        writeln!(out, "With heart rate:   {} (mean {:.0} bpm)", n, mean)?;
    }

    Ok(())
}
