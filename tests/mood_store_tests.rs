//! Integration tests for the mood store façade.
//!
//! These tests run the façade against a local mock endpoint and verify the
//! upsert and windowed-load behavior: input normalization, the variables
//! sent over the wire, one-row-per-pin-per-day overwrite semantics, and
//! that validation failures never produce a network call.

use chrono::Local;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use moodlog::{
    cutoff_date, AdminSecret, EndpointUrl, MoodStore, StoreConfig, StoreError, ValidationError,
    DEFAULT_WINDOW_DAYS,
};

/// Creates a store pointing at the given mock server.
fn create_test_store(server: &MockServer) -> MoodStore {
    let config = StoreConfig::builder()
        .endpoint(EndpointUrl::new(format!("{}/v1/graphql", server.uri())).unwrap())
        .admin_secret(AdminSecret::new("test-secret").unwrap())
        .build()
        .unwrap();
    MoodStore::new(&config)
}

fn upsert_row(mood_label: &str, score: i16, comments: Option<&str>) -> serde_json::Value {
    json!({
        "insert_mood_logs_one": {
            "id": "0b9f3f6e-1d1e-4c44-9edb-0a6a2f3f9f10",
            "date": "2026-08-28",
            "team_member": "Rahim Uddin",
            "pin": "85",
            "mood_label": mood_label,
            "score": score,
            "comments": comments,
            "created_at": "2026-08-28T09:30:00Z"
        }
    })
}

// ============================================================================
// Upsert Tests
// ============================================================================

#[tokio::test]
async fn test_upsert_sends_trimmed_inputs_and_derived_score() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/graphql"))
        .and(body_partial_json(json!({
            "variables": {
                "team_member": "Rahim Uddin",
                "pin": "85",
                "mood_label": "😄 Great",
                "score": 5,
                "comments": null,
            }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": upsert_row("😄 Great", 5, None) })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = create_test_store(&server);
    let saved = store
        .upsert("  Rahim Uddin  ", " 85 ", "😄 Great", "")
        .await
        .unwrap();

    assert_eq!(saved.team_member, "Rahim Uddin");
    assert_eq!(saved.pin, "85");
    assert_eq!(saved.score, 5);
    assert!(saved.comments.is_none());
    assert!(saved.id.is_some());
    assert!(saved.created_at.is_some());
}

#[tokio::test]
async fn test_upsert_normalizes_blank_comments_to_null() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "variables": { "comments": null } })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": upsert_row("🙂 Good", 4, None) })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = create_test_store(&server);
    store
        .upsert("Rahim Uddin", "85", "🙂 Good", "   ")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_upsert_trims_comments() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(
            json!({ "variables": { "comments": "rough standup" } }),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({ "data": upsert_row("🙁 Low", 2, Some("rough standup")) }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let store = create_test_store(&server);
    let saved = store
        .upsert("Rahim Uddin", "85", "🙁 Low", "  rough standup  ")
        .await
        .unwrap();

    assert_eq!(saved.comments.as_deref(), Some("rough standup"));
}

#[tokio::test]
async fn test_second_upsert_same_day_overwrites_in_place() {
    // The store resolves the (pin, date) conflict by overwriting; the second
    // call returns the same row id with the new mood and score.
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": { "pin": "85", "mood_label": "😢 Bad", "score": 1 }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": upsert_row("😢 Bad", 1, None) })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = create_test_store(&server);
    let saved = store.upsert("Rahim Uddin", "85", "😢 Bad", "").await.unwrap();

    assert_eq!(saved.id.as_deref(), Some("0b9f3f6e-1d1e-4c44-9edb-0a6a2f3f9f10"));
    assert_eq!(saved.mood_label, "😢 Bad");
    assert_eq!(saved.score, 1);
}

#[tokio::test]
async fn test_upsert_propagates_remote_errors_unchanged() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{ "message": "permission denied for table mood_logs" }]
        })))
        .mount(&server)
        .await;

    let store = create_test_store(&server);
    let error = store
        .upsert("Rahim Uddin", "85", "😄 Great", "")
        .await
        .unwrap_err();

    assert!(matches!(error, StoreError::Graphql(_)));
    assert!(error.to_string().contains("permission denied"));
}

// ============================================================================
// Validation Tests (no network call)
// ============================================================================

#[tokio::test]
async fn test_rejected_inputs_never_reach_the_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let store = create_test_store(&server);

    let result = store.upsert("", "85", "😄 Great", "").await;
    assert!(matches!(
        result,
        Err(StoreError::Validation(ValidationError::EmptyTeamMember))
    ));

    let result = store.upsert("Rahim Uddin", "ab#", "😄 Great", "").await;
    assert!(matches!(
        result,
        Err(StoreError::Validation(ValidationError::InvalidPin { .. }))
    ));

    let result = store.upsert("Rahim Uddin", "85", "no such mood", "").await;
    assert!(matches!(
        result,
        Err(StoreError::Validation(ValidationError::UnknownMood { .. }))
    ));

    let result = store.load_recent(0).await;
    assert!(matches!(
        result,
        Err(StoreError::Validation(ValidationError::InvalidWindow { days: 0 }))
    ));
}

// ============================================================================
// Windowed Load Tests
// ============================================================================

#[tokio::test]
async fn test_load_recent_on_empty_store_returns_empty_sequence() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "mood_logs": [] } })),
        )
        .mount(&server)
        .await;

    let store = create_test_store(&server);
    let logs = store.load_recent(DEFAULT_WINDOW_DAYS).await.unwrap();

    assert!(logs.is_empty());
}

#[tokio::test]
async fn test_load_recent_sends_inclusive_cutoff_date() {
    let server = MockServer::start().await;
    let expected_from = cutoff_date(Local::now().date_naive(), 90).unwrap();

    Mock::given(method("POST"))
        .and(body_partial_json(
            json!({ "variables": { "from": expected_from } }),
        ))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "mood_logs": [] } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = create_test_store(&server);
    store.load_recent(90).await.unwrap();
}

#[tokio::test]
async fn test_load_recent_decodes_rows_newest_first() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "mood_logs": [
                    {
                        "date": "2026-08-28",
                        "team_member": "Rahim Uddin",
                        "pin": "85",
                        "mood_label": "😄 Great",
                        "score": 5,
                        "comments": null
                    },
                    {
                        "date": "2026-08-27",
                        "team_member": "Selina Akter",
                        "pin": "01234",
                        "mood_label": "😐 Okay",
                        "score": 3,
                        "comments": "long release call"
                    }
                ]
            }
        })))
        .mount(&server)
        .await;

    let store = create_test_store(&server);
    let logs = store.load_recent(90).await.unwrap();

    assert_eq!(logs.len(), 2);
    assert!(logs[0].date > logs[1].date);
    assert_eq!(logs[0].pin, "85");
    assert_eq!(logs[0].score, 5);
    assert!(logs[0].comments.is_none());
    assert_eq!(logs[1].comments.as_deref(), Some("long release call"));
}

#[tokio::test]
async fn test_load_recent_propagates_transport_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let store = create_test_store(&server);
    let error = store.load_recent(90).await.unwrap_err();

    assert!(matches!(
        error,
        StoreError::Graphql(moodlog::GraphqlError::Transport(_))
    ));
}

// ============================================================================
// Save-then-Reload Scenario
// ============================================================================

#[tokio::test]
async fn test_save_then_reload_shows_the_saved_entry() {
    let server = MockServer::start().await;

    // The submit handler upserts, then the render path re-fetches.
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "variables": { "pin": "85" } })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": upsert_row("😄 Great", 5, None) })),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(body_partial_json(
            json!({ "variables": { "from": cutoff_date(Local::now().date_naive(), 90).unwrap() } }),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "mood_logs": [{
                    "date": "2026-08-28",
                    "team_member": "Rahim Uddin",
                    "pin": "85",
                    "mood_label": "😄 Great",
                    "score": 5,
                    "comments": null
                }]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = create_test_store(&server);
    store.upsert("Rahim Uddin", "85", "😄 Great", "").await.unwrap();
    let logs = store.load_recent(90).await.unwrap();

    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].team_member, "Rahim Uddin");
    assert_eq!(logs[0].pin, "85");
    assert_eq!(logs[0].mood_label, "😄 Great");
    assert_eq!(logs[0].score, 5);
    assert!(logs[0].comments.is_none());
}
