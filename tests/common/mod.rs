// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{Duration, Utc};
use httpmock::prelude::*;
use httpmock::Mock;
use serde_json::{json, Value};
use strava_dashboard::config::Config;
use strava_dashboard::models::Credential;

pub const TOKEN_PATH: &str = "/oauth/token";
pub const ACTIVITIES_PATH: &str = "/api/v3/athlete/activities";

/// Config pointing both endpoints at the fake provider.
#[allow(dead_code)]
pub fn test_config(server: &MockServer) -> Config {
    Config {
        auth_url: server.url(TOKEN_PATH),
        api_base_url: server.url("/api/v3"),
        http_timeout: std::time::Duration::from_secs(5),
        ..Config::default()
    }
}

/// Config whose endpoints refuse connections.
#[allow(dead_code)]
pub fn unreachable_config() -> Config {
    Config {
        auth_url: "http://127.0.0.1:1/oauth/token".to_string(),
        api_base_url: "http://127.0.0.1:1/api/v3".to_string(),
        http_timeout: std::time::Duration::from_secs(2),
        ..Config::default()
    }
}

/// Credential expiring `secs` from now (negative for already expired).
#[allow(dead_code)]
pub fn credential_expiring_in(access_token: &str, secs: i64) -> Credential {
    Credential {
        access_token: access_token.to_string(),
        refresh_token: "seeded-refresh".to_string(),
        expires_at: Utc::now() + Duration::seconds(secs),
    }
}

/// Fake summary activities with sequential IDs starting at `first_id`.
#[allow(dead_code)]
pub fn fake_activities(first_id: u64, count: usize) -> Vec<Value> {
    (0..count as u64)
        .map(|i| {
            let id = first_id + i;
            json!({
                "id": id,
                "name": format!("Morning Run {}", id),
                "type": "Run",
                "sport_type": "Run",
                "distance": 5000.0 + i as f64,
                "moving_time": 1500,
                "total_elevation_gain": 12.5,
                "start_date_local": "2024-05-01T07:00:00Z",
            })
        })
        .collect()
}

/// Token endpoint answering with the given tokens, valid for `expires_in` seconds.
#[allow(dead_code)]
pub fn mock_token_endpoint<'a>(
    server: &'a MockServer,
    expected_refresh: &str,
    access_token: &str,
    new_refresh: &str,
    expires_in: i64,
) -> Mock<'a> {
    let body = json!({
        "token_type": "Bearer",
        "access_token": access_token,
        "refresh_token": new_refresh,
        "expires_at": (Utc::now() + Duration::seconds(expires_in)).timestamp(),
        "expires_in": expires_in,
    });
    let expected = format!("refresh_token={}", expected_refresh);

    server.mock(|when, then| {
        when.method(POST)
            .path(TOKEN_PATH)
            .body_contains("grant_type=refresh_token")
            .body_contains(expected.as_str());
        then.status(200)
            .header("content-type", "application/json")
            .json_body(body);
    })
}

/// One page of the activity listing, served only to `access_token`.
#[allow(dead_code)]
pub fn mock_page<'a>(
    server: &'a MockServer,
    access_token: &str,
    page: u32,
    per_page: u32,
    records: Vec<Value>,
) -> Mock<'a> {
    let auth = format!("Bearer {}", access_token);
    server.mock(|when, then| {
        when.method(GET)
            .path(ACTIVITIES_PATH)
            .query_param("page", page.to_string().as_str())
            .query_param("per_page", per_page.to_string().as_str())
            .header("Authorization", auth.as_str());
        then.status(200)
            .header("content-type", "application/json")
            .json_body(Value::Array(records));
    })
}
