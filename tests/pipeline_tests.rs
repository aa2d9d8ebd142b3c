// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! End-to-end: token refresh, pagination, normalization and summary.

use httpmock::prelude::*;
use serde_json::json;
use strava_dashboard::{load_activities, ActivityFilter};

mod common;
use common::{mock_page, mock_token_endpoint, test_config};

#[test]
fn test_load_activities_end_to_end() {
    let server = MockServer::start();
    let token_mock =
        mock_token_endpoint(&server, "test_refresh_token", "e2e-token", "e2e-refresh", 21600);
    mock_page(
        &server,
        "e2e-token",
        1,
        2,
        vec![
            json!({
                "id": 1, "name": "Tempo", "type": "Run", "distance": 10000,
                "moving_time": 3000, "start_date_local": "2024-05-01T07:00:00Z",
                "average_heartrate": 160.0
            }),
            json!({
                "id": 2, "name": "Commute", "type": "Ride", "sport_type": "EBikeRide",
                "distance": 12000, "moving_time": 1800, "total_elevation_gain": 40,
                "start_date_local": "2024-05-20T08:00:00Z"
            }),
        ],
    );
    mock_page(
        &server,
        "e2e-token",
        2,
        2,
        vec![json!({ "id": 3, "type": "Workout", "moving_time": 2700 })],
    );
    mock_page(&server, "e2e-token", 3, 2, vec![]);

    let mut config = test_config(&server);
    config.per_page = 2;
    config.max_activities = 10;

    let table = load_activities(&config).unwrap();

    assert_eq!(table.len(), 3);
    token_mock.assert_hits(1);
    assert_eq!(
        table.sports(),
        vec!["EBikeRide".to_string(), "Run".to_string(), "Workout".to_string()]
    );

    let summary = table.summarize();
    assert_eq!(summary.totals.activities, 3);
    assert_eq!(summary.totals.distance_km, 22.0);
    assert_eq!(summary.totals.elev_gain_m, 40.0);
    assert_eq!(summary.by_sport[0].sport, "EBikeRide");
    assert_eq!(summary.run_paces.len(), 1);
    assert_eq!(summary.run_paces[0].pace_min_per_km, 5.0);
    assert_eq!(summary.heart_rate.len(), 1);
    // Workout has no start date, so it is missing from the time series
    assert_eq!(summary.cumulative.len(), 2);
    assert_eq!(summary.weekly.len(), 2);

    let runs_only = table.filter(&ActivityFilter {
        sports: Some(["Run".to_string()].into_iter().collect()),
        ..Default::default()
    });
    assert_eq!(runs_only.len(), 1);
    assert_eq!(runs_only.rows()[0].activity_id, 1);
}

#[test]
fn test_load_activities_no_data_is_not_an_error() {
    let server = MockServer::start();
    mock_token_endpoint(&server, "test_refresh_token", "t", "r", 21600);
    mock_page(&server, "t", 1, 200, vec![]);

    let table = load_activities(&test_config(&server)).unwrap();

    assert!(table.is_empty());
    assert!(table.summarize().by_sport.is_empty());
}
