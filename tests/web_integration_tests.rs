//! Router tests driven through `tower::ServiceExt::oneshot`

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use courtside_stats::error::AppError;
use courtside_stats::resolver::{PlayerId, StatResolver};
use courtside_stats::testing_utils::{FakeStatsSource, TestDataBuilder};
use courtside_stats::web::{AppState, router};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn app_with(source: FakeStatsSource) -> Router {
    let resolver = StatResolver::new(PlayerId::new(TestDataBuilder::PLAYER_ID), Arc::new(source));
    router(AppState::new(resolver))
}

fn app() -> Router {
    app_with(TestDataBuilder::cavaliers_2007_source())
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_static_pages_are_served() {
    for uri in ["/", "/about", "/lebron", "/lakers", "/trivia", "/stats"] {
        let (status, body) = get(app(), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.contains("<html"), "{uri}");
    }
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (status, _) = get(app(), "/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_game_page_renders_stat_table() {
    let (status, body) = get(app(), "/stats/2007-01-24").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("01/24/2007"));
    assert!(body.contains("Season 2006-07"));
    assert!(body.contains("<td>25</td>"));
}

#[tokio::test]
async fn test_game_page_without_game() {
    let (status, body) = get(app(), "/stats/2007-02-01").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No game that day."));
}

#[tokio::test]
async fn test_malformed_dates_are_bad_requests() {
    for uri in ["/stats/not-a-date", "/stats/2023-02-30", "/api/stats/2007-13-01"] {
        let (status, _) = get(app(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn test_provider_outage_is_service_unavailable() {
    let source = TestDataBuilder::cavaliers_2007_source().failing_schedule(|| {
        AppError::api_service_unavailable(503, "Service Unavailable", "u")
    });

    let (status, body) = get(app_with(source.clone()), "/stats/2007-01-24").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body.contains("unavailable"));
    assert!(!body.contains("No game that day"));

    let (status, _) = get(app_with(source), "/api/stats/2007-01-24").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_game_stats_json() {
    let (status, body) = get(app(), "/api/stats/2007-01-24").await;
    let json: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["player_id"], "jamesle01");
    assert_eq!(json["date"], "2007-01-24");
    assert_eq!(json["season"], "2006-07");
    assert_eq!(json["stats"]["points"], 25);
    assert_eq!(json["stats"]["defensive_rebounds"], 9);
}

#[tokio::test]
async fn test_game_stats_json_absent_is_null() {
    let (status, body) = get(app(), "/api/stats/2007-01-26").await;
    let json: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert!(json["stats"].is_null());
}

#[tokio::test]
async fn test_season_json_has_averaged_keys_only() {
    let (status, body) = get(app(), "/api/seasons/2007").await;
    let json: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["season"], "2006-07");
    for key in ["ppg", "apg", "orpg", "drpg", "spg", "bpg", "tpg"] {
        assert!(json["stats"][key].is_number(), "{key}");
    }
    assert!(json["stats"].get("points").is_none());
}

#[tokio::test]
async fn test_unknown_season_json_is_not_found() {
    let (status, body) = get(app(), "/api/seasons/1991").await;
    let json: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_non_numeric_season_is_bad_request() {
    let (status, _) = get(app(), "/api/seasons/last").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_out_of_range_season_year_is_bad_request() {
    for uri in ["/api/seasons/-2147483648", "/api/seasons/2147483647"] {
        let (status, body) = get(app(), uri).await;
        let json: Value = serde_json::from_str(&body).unwrap();

        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(json["error"].as_str().unwrap().contains("Invalid season"), "{uri}");
    }
}

#[tokio::test]
async fn test_career_json() {
    let (status, body) = get(app(), "/api/career").await;
    let json: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    let ppg = json["stats"]["ppg"].as_f64().unwrap();
    assert!((ppg - 4000.0 / 150.0).abs() < 1e-9);
}
