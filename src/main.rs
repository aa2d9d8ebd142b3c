// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava-Dashboard CLI
//!
//! Fetches recent Strava activities, normalizes them and prints a training
//! summary (or the full table as JSON).

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use strava_dashboard::{
    config::Config, report, services::ActivityFetcher, ActivityFilter, ActivityNormalizer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "strava-dashboard")]
#[command(about = "Summarize your recent Strava activities")]
#[command(version)]
struct Args {
    /// Max number of activities to load (default: STRAVA_MAX_ACTIVITIES or 1000)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    max_activities: Option<u64>,

    /// Page size for the Strava listing, at most 200
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=200))]
    per_page: Option<u32>,

    /// Only include this sport (repeatable)
    #[arg(long = "sport")]
    sports: Vec<String>,

    /// First day to include (YYYY-MM-DD)
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Last day to include (YYYY-MM-DD)
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize structured JSON logging (stderr, so stdout stays clean)
    init_logging()?;

    let mut config = Config::from_env().context("failed to load configuration")?;
    if let Some(max) = args.max_activities {
        config.max_activities = usize::try_from(max).context("max activities out of range")?;
    }
    if let Some(per_page) = args.per_page {
        config.per_page = per_page;
    }
    tracing::info!(
        max_activities = config.max_activities,
        per_page = config.per_page,
        "Loading activities from Strava"
    );

    let mut fetcher = ActivityFetcher::from_config(&config)?;
    let raw = fetcher
        .fetch_recent_default()
        .context("failed to fetch activities from Strava")?;
    let table = ActivityNormalizer::normalize(&raw);

    if table.is_empty() {
        println!("{}", report::NO_ACTIVITIES);
        return Ok(());
    }

    let filter = ActivityFilter {
        sports: (!args.sports.is_empty()).then(|| args.sports.iter().cloned().collect()),
        from: args.from,
        to: args.to,
    };
    let filtered = table.filter(&filter);
    tracing::info!(
        total = table.len(),
        in_view = filtered.len(),
        "Activities normalized"
    );

    if filtered.is_empty() {
        println!("{}", report::NO_MATCHING_ACTIVITIES);
        return Ok(());
    }

    let summary = filtered.summarize();
    match args.format {
        Format::Text => print!("{}", report::render_text(&summary)),
        Format::Json => {
            let body = serde_json::json!({
                "rows": filtered,
                "summary": summary,
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
    }

    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("strava_dashboard=info".parse()?)
                .add_directive("warn".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
