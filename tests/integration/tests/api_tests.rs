//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;
use uuid::Uuid;

async fn create_night(server: &TestServer, days: i64) -> NightBody {
    let response = server
        .post_admin("/nights", &CreateNightRequest::in_days(days))
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn delete_night(server: &TestServer, id: Uuid) {
    let response = server.delete_admin(&format!("/nights/{id}")).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

async fn toggle(server: &TestServer, request: &ToggleRequest) -> ToggleResponse {
    let response = server.post("/availability/toggle", request).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

async fn my_availability(server: &TestServer, email: &str) -> Vec<MyAvailabilityRow> {
    let response = server
        .client
        .get(format!("{}/my-availability", server.base_url()))
        .query(&[("email", email)])
        .send()
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

async fn night_responses(server: &TestServer, night_id: Uuid) -> Vec<NightResponseRow> {
    let response = server
        .get(&format!("/availability/{night_id}"))
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["ok"], true);
    assert!(body["time"].is_string());
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_dbtest() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/dbtest").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["ok"], true);
    assert!(body["server_time"].is_string());
}

// ============================================================================
// Night Catalogue Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_list_night() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateNightRequest {
        notes: Some("Board games".to_string()),
        start_time: "18:30:00".to_string(),
        ..CreateNightRequest::in_days(2)
    };
    let response = server.post_admin("/nights", &request).await.unwrap();
    let night: NightBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(night.night_date.format("%Y-%m-%d").to_string(), request.night_date);
    assert_eq!(night.start_time.format("%H:%M").to_string(), "18:30");
    assert_eq!(night.end_time.format("%H:%M").to_string(), "23:00");
    assert_eq!(night.notes.as_deref(), Some("Board games"));

    let response = server.get("/nights").await.unwrap();
    let nights: Vec<NightBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(nights.iter().any(|n| n.id == night.id));
    assert!(nights.windows(2).all(|w| w[0].night_date <= w[1].night_date));

    delete_night(&server, night.id).await;
}

#[tokio::test]
async fn test_empty_notes_stored_as_null() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateNightRequest {
        notes: Some(String::new()),
        ..CreateNightRequest::in_days(1)
    };
    let response = server.post_admin("/nights", &request).await.unwrap();
    let night: NightBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(night.notes.is_none());

    delete_night(&server, night.id).await;
}

#[tokio::test]
async fn test_create_night_validation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post_admin("/nights", &json!({ "night_date": "2026-10-16", "start_time": "19:00" }))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_INPUT");

    let response = server
        .post_admin(
            "/nights",
            &json!({ "night_date": "16/10/2026", "start_time": "19:00", "end_time": "23:00" }),
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(body.error.message.contains("night_date"));
}

#[tokio::test]
async fn test_admin_endpoints_require_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/nights", &CreateNightRequest::in_days(1))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "UNAUTHORIZED");

    let response = server
        .get_with_auth("/nights-with-counts", "Bearer not-the-token")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // Scheme is case-insensitive, token whitespace is ignored
    let response = server
        .get_with_auth(
            "/nights-with-counts",
            &format!("bearer {} ", integration_tests::TEST_ADMIN_TOKEN),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_delete_unknown_night() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .delete_admin(&format!("/nights/{}", Uuid::new_v4()))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_NIGHT");
}

#[tokio::test]
async fn test_delete_night_cascades() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let night = create_night(&server, 3).await;
    toggle(&server, &ToggleRequest::new(&unique_email("cascade"), night.id, "available")).await;

    let response = server.delete_admin(&format!("/nights/{}", night.id)).await.unwrap();
    let body: OkBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.ok);

    assert!(night_responses(&server, night.id).await.is_empty());
    let response = server.get("/nights").await.unwrap();
    let nights: Vec<NightBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!nights.iter().any(|n| n.id == night.id));
}

#[tokio::test]
async fn test_nights_with_counts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let night = create_night(&server, 4).await;

    for (tag, status) in [("c1", "available"), ("c2", "available"), ("c3", "unavailable")] {
        toggle(&server, &ToggleRequest::new(&unique_email(tag), night.id, status)).await;
    }
    // Resolved but never toggled; not counted
    my_availability(&server, &unique_email("c4")).await;

    let response = server.get_admin("/nights-with-counts").await.unwrap();
    let rows: Vec<NightCountsBody> = assert_json(response, StatusCode::OK).await.unwrap();
    let row = rows.iter().find(|r| r.id == night.id).expect("night listed");
    assert_eq!(row.available_count, 2);
    assert_eq!(row.unavailable_count, 1);

    delete_night(&server, night.id).await;
}

// ============================================================================
// Availability Tests
// ============================================================================

#[tokio::test]
async fn test_toggle_and_read_back() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let night1 = create_night(&server, 1).await;
    let night2 = create_night(&server, 2).await;
    let email = unique_email("ann");

    let response = toggle(&server, &ToggleRequest::new(&email, night1.id, "available").named("Ann")).await;
    assert!(response.ok);
    assert_eq!(response.availability.night_id, night1.id);
    assert_eq!(response.availability.status, "available");

    let rows = night_responses(&server, night1.id).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, response.availability.id);
    assert_eq!(rows[0].member_id, response.availability.member_id);
    assert_eq!(rows[0].email, email);
    assert_eq!(rows[0].full_name.as_deref(), Some("Ann"));
    assert_eq!(rows[0].status, "available");

    let mine = my_availability(&server, &email).await;
    let status_of = |id: Uuid| mine.iter().find(|r| r.night_id == id).map(|r| r.status.as_str());
    assert_eq!(status_of(night1.id), Some("available"));
    assert_eq!(status_of(night2.id), Some("unavailable"));

    // Admin view returns the same rows
    let response = server
        .get_admin(&format!("/nights/{}/availability", night1.id))
        .await
        .unwrap();
    let admin_rows: Vec<NightResponseRow> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(admin_rows.len(), 1);
    assert_eq!(admin_rows[0].email, email);

    delete_night(&server, night1.id).await;
    delete_night(&server, night2.id).await;
}

#[tokio::test]
async fn test_toggle_overwrites_single_row() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let night = create_night(&server, 1).await;
    let email = unique_email("flip");

    let first = toggle(&server, &ToggleRequest::new(&email, night.id, "available")).await;
    let second = toggle(&server, &ToggleRequest::new(&email, night.id, "unavailable")).await;
    assert_eq!(second.availability.id, first.availability.id);
    assert!(second.availability.updated_at > first.availability.updated_at);

    let rows = night_responses(&server, night.id).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, "unavailable");

    delete_night(&server, night.id).await;
}

#[tokio::test]
async fn test_name_is_never_erased() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let night = create_night(&server, 1).await;
    let email = unique_email("alice");

    toggle(&server, &ToggleRequest::new(&email, night.id, "available")).await;
    toggle(&server, &ToggleRequest::new(&email, night.id, "available").named("Alice")).await;
    toggle(&server, &ToggleRequest::new(&email, night.id, "unavailable")).await;

    let rows = night_responses(&server, night.id).await;
    assert_eq!(rows[0].full_name.as_deref(), Some("Alice"));

    delete_night(&server, night.id).await;
}

#[tokio::test]
async fn test_untoggled_member_reads_unavailable() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let night = create_night(&server, 0).await;
    let email = unique_email("b");

    let mine = my_availability(&server, &email).await;
    let row = mine.iter().find(|r| r.night_id == night.id).expect("night listed");
    assert_eq!(row.status, "unavailable");

    // Reading never materializes a row
    assert!(night_responses(&server, night.id).await.iter().all(|r| r.email != email));

    delete_night(&server, night.id).await;
}

#[tokio::test]
async fn test_concurrent_toggles_keep_one_row() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let night = create_night(&server, 1).await;
    let email = unique_email("race");

    let requests: Vec<_> = (0..10)
        .map(|i| {
            let status = if i % 2 == 0 { "available" } else { "unavailable" };
            ToggleRequest::new(&email, night.id, status)
        })
        .collect();
    let responses =
        futures::future::join_all(requests.iter().map(|r| server.post("/availability/toggle", r)))
            .await;
    for response in responses {
        assert_status(response.unwrap(), StatusCode::OK).await.unwrap();
    }

    assert_eq!(night_responses(&server, night.id).await.len(), 1);

    delete_night(&server, night.id).await;
}

#[tokio::test]
async fn test_invalid_toggles_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let night = create_night(&server, 1).await;
    let email = unique_email("maybe");

    let response = server
        .post("/availability/toggle", &ToggleRequest::new(&email, night.id, "maybe"))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_STATUS");

    let response = server
        .post("/availability/toggle", &json!({ "email": email, "status": "available" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .post(
            "/availability/toggle",
            &ToggleRequest::new("not-an-email", night.id, "available"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Nothing was written for the rejected requests
    assert!(night_responses(&server, night.id).await.is_empty());

    delete_night(&server, night.id).await;
}

#[tokio::test]
async fn test_toggle_unknown_night() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(
            "/availability/toggle",
            &ToggleRequest::new(&unique_email("ghost"), Uuid::new_v4(), "available"),
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_NIGHT");
}

#[tokio::test]
async fn test_my_availability_requires_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/my-availability").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}
