use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::integration::common::{
    MISSING_USER, SLOW_USER, closed_base, get_json, post_json, setup_healthy_app, setup_test_app,
    spawn_upstream,
};

#[tokio::test]
async fn health_returns_200() {
    let app = setup_healthy_app().await;

    let (status, json) = get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = setup_healthy_app().await;

    let response = app
        .oneshot(
            Request::get("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Per-provider endpoints
// ---------------------------------------------------------------------------

#[tokio::test]
async fn gfg_returns_scraped_profile() {
    let app = setup_healthy_app().await;

    let (status, json) = get_json(app, "/api/gfg?username=alice").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert!(json.get("error").is_none());
    let data = &json["data"];
    assert_eq!(data["username"], "alice");
    assert_eq!(data["totalSolved"], 50);
    assert_eq!(data["byDifficulty"]["easy"]["count"], 20);
    assert_eq!(data["activeDays"], 12);
    assert_eq!(data["streak"], 3);
    assert_eq!(data["activityHistory"].as_array().unwrap().len(), 2);
    assert_eq!(data["activityHistory"][0]["date"], "2024-03-01");
    assert_eq!(json["recentProblems"][0]["name"], "Reverse a Linked List");
}

#[tokio::test]
async fn gfg_uses_demo_username_when_omitted() {
    let app = setup_healthy_app().await;

    let (status, json) = get_json(app, "/api/gfg").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["username"], "anilpaj39t");
}

#[tokio::test]
async fn gfg_fetch_failure_returns_default_record() {
    let app = setup_healthy_app().await;

    let (status, json) = get_json(app, &format!("/api/gfg?username={MISSING_USER}")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("404"));
    assert_eq!(json["data"]["totalSolved"], 85);
    assert_eq!(json["data"]["byDifficulty"]["medium"]["count"], 35);
    assert_eq!(json["recentProblems"], json!([]));
}

#[tokio::test]
async fn leetcode_returns_scraped_profile() {
    let app = setup_healthy_app().await;

    let (status, json) = get_json(app, "/api/leetcode?username=bob").await;

    assert_eq!(status, StatusCode::OK);
    let data = &json["data"];
    assert_eq!(data["totalSolved"], 75);
    assert_eq!(data["byDifficulty"]["hard"]["count"], 5);
    assert_eq!(data["submissions"], 180);
    assert_eq!(data["acceptanceRate"], 58.2);
    assert_eq!(data["ranking"], 99000);
    assert!(json.get("recentProblems").is_none());
}

#[tokio::test]
async fn leetcode_network_failure_returns_default_record() {
    let closed = closed_base().await;
    let app = setup_test_app(&closed, &closed);

    let (status, json) = get_json(app, "/api/leetcode?username=bob").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    assert_eq!(json["data"]["totalSolved"], 130);
    assert_eq!(json["data"]["byDifficulty"]["easy"]["count"], 65);
}

// ---------------------------------------------------------------------------
// Combined statistics
// ---------------------------------------------------------------------------

#[tokio::test]
async fn combined_sums_both_providers() {
    let app = setup_healthy_app().await;

    let (status, json) = get_json(
        app,
        "/api/profile-stats?gfgUsername=alice&leetcodeUsername=bob",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    let combined = &json["data"]["combined"];
    assert_eq!(combined["totalSolved"], 125);
    assert_eq!(combined["byDifficulty"]["easy"]["count"], 60);
    assert_eq!(combined["byDifficulty"]["medium"]["count"], 50);
    assert_eq!(combined["byDifficulty"]["hard"]["count"], 15);

    let platforms = combined["byPlatform"].as_array().unwrap();
    assert_eq!(platforms.len(), 4);
    assert_eq!(platforms[0]["platformName"], "GeeksforGeeks");
    assert_eq!(platforms[0]["count"], 50);
    assert_eq!(platforms[1]["count"], 75);
    assert_eq!(platforms[2]["count"], 0);

    assert_eq!(combined["byCategory"][1]["name"], "DSA");
    assert_eq!(combined["byCategory"][1]["count"], 125);

    assert_eq!(json["data"]["gfg"]["username"], "alice");
    assert_eq!(json["data"]["leetcode"]["username"], "bob");
    assert_eq!(json["recentProblems"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn combined_substitutes_failed_gfg_with_defaults() {
    let upstream = spawn_upstream().await;
    let closed = closed_base().await;
    let app = setup_test_app(&closed, &upstream);

    let (status, json) = get_json(app, "/api/profile-stats?leetcodeUsername=bob").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["gfg"], serde_json::Value::Null);
    assert_eq!(json["data"]["leetcode"]["totalSolved"], 75);
    assert_eq!(json["data"]["combined"]["totalSolved"], 85 + 75);
    assert_eq!(json["data"]["combined"]["byDifficulty"]["easy"]["count"], 40 + 40);
    assert_eq!(json["recentProblems"], json!([]));
}

#[tokio::test]
async fn combined_substitutes_failed_leetcode_with_defaults() {
    let app = setup_healthy_app().await;

    let (status, json) = get_json(
        app,
        &format!("/api/profile-stats?gfgUsername=alice&leetcodeUsername={MISSING_USER}"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["leetcode"], serde_json::Value::Null);
    assert_eq!(json["data"]["combined"]["totalSolved"], 50 + 130);
}

#[tokio::test]
async fn combined_treats_timeout_as_provider_failure() {
    let app = setup_healthy_app().await;

    let (status, json) = get_json(
        app,
        &format!("/api/profile-stats?gfgUsername={SLOW_USER}&leetcodeUsername=bob"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["gfg"], serde_json::Value::Null);
    assert_eq!(json["data"]["combined"]["totalSolved"], 85 + 75);
}

#[tokio::test]
async fn combined_both_down_returns_static_fallback() {
    let closed = closed_base().await;
    let app = setup_test_app(&closed, &closed);

    let (status, json) = get_json(app, "/api/profile-stats").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    assert!(json["error"].is_string());
    let combined = &json["data"]["combined"];
    assert_eq!(combined["totalSolved"], 215);
    assert_eq!(combined["byDifficulty"]["easy"]["count"], 105);
    assert_eq!(combined["byDifficulty"]["medium"]["count"], 85);
    assert_eq!(combined["byDifficulty"]["hard"]["count"], 25);
    assert_eq!(combined["byPlatform"][0]["count"], 85);
    assert_eq!(combined["byPlatform"][1]["count"], 130);
}

#[tokio::test]
async fn dashboard_renders_view_model() {
    let app = setup_healthy_app().await;

    let (status, json) = get_json(
        app,
        "/api/dashboard?gfgUsername=alice&leetcodeUsername=bob",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = &json["data"];
    assert_eq!(data["totalSolved"], 125);
    assert_eq!(data["streak"], 6);
    assert_eq!(data["activeDays"], 12);
    assert_eq!(data["difficulties"][0]["percent"], 100);

    // 2024-03-01 .. 2024-03-04, gaps filled
    let days = data["heatmap"]["days"].as_array().unwrap();
    assert_eq!(days.len(), 4);
    assert_eq!(days[1]["count"], 0);
    assert_eq!(days[3]["level"], 4);
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[tokio::test]
async fn signup_verify_login_flow() {
    let app = setup_healthy_app().await;

    let (status, json) = post_json(
        app.clone(),
        "/api/auth/signup",
        json!({"name": "Ada", "email": "ada@example.com", "password": "secret"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let otp = json["otp"].as_str().unwrap().to_string();
    assert_eq!(otp.len(), 6);
    assert_eq!(json["user"]["email"], "ada@example.com");

    let (status, json) = post_json(
        app.clone(),
        "/api/auth/verify-otp",
        json!({"email": "ada@example.com", "otp": otp}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["user"]["name"], "Ada");
    assert!(json.get("otp").is_none());

    let (status, json) = post_json(
        app.clone(),
        "/api/auth/login",
        json!({"email": "ada@example.com", "password": "secret"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Login successful");

    let (status, json) = post_json(
        app,
        "/api/auth/login",
        json!({"email": "ada@example.com", "password": "wrong"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Invalid credentials");
}

#[tokio::test]
async fn signup_missing_fields_returns_400() {
    let app = setup_healthy_app().await;

    let (status, json) = post_json(app, "/api/auth/signup", json!({"email": "a@b.c"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Missing required fields");
}

#[tokio::test]
async fn signup_existing_user_returns_409() {
    let app = setup_healthy_app().await;

    let (status, _) = post_json(
        app.clone(),
        "/api/auth/login",
        json!({"email": "taken@example.com", "password": "pw"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = post_json(
        app,
        "/api/auth/signup",
        json!({"name": "T", "email": "taken@example.com", "password": "pw"}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["message"], "User already exists");
}

#[tokio::test]
async fn verify_unknown_otp_returns_400() {
    let app = setup_healthy_app().await;

    let (status, json) = post_json(
        app,
        "/api/auth/verify-otp",
        json!({"email": "nobody@example.com", "otp": "123456"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "OTP expired or not found");
}
