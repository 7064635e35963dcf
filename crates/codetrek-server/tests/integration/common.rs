use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::extract::Path;
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use http_body_util::BodyExt;
use tokio::net::TcpListener;
use tower::ServiceExt;

use codetrek_core::ProviderConfig;
use codetrek_server::routes;
use codetrek_server::state::AppState;

/// GeeksforGeeks profile: 50 solved (20/20/10), two active heatmap days.
pub const GFG_PAGE: &str = r#"<html><body>
  <div class="profile_details_container">
    <div class="profile_details"><span>Problems Solved</span><span class="profile_details_value">50</span></div>
    <div class="profile_details"><span>Active Days</span><span class="profile_details_value">12</span></div>
    <div class="profile_details"><span>Streak</span><span class="profile_details_value">3</span></div>
  </div>
  <div class="difficulty-breakup-container">
    <div class="difficulty-breakup"><span class="difficulty-breakup-heading">Easy</span><span class="difficulty-breakup-value">20</span></div>
    <div class="difficulty-breakup"><span class="difficulty-breakup-heading">Medium</span><span class="difficulty-breakup-value">20</span></div>
    <div class="difficulty-breakup"><span class="difficulty-breakup-heading">Hard</span><span class="difficulty-breakup-value">10</span></div>
  </div>
  <div class="recent-problems-container">
    <div class="recent-problem"><span class="recent-problem-name">Reverse a Linked List</span><span class="recent-problem-difficulty">Easy</span><span class="recent-problem-time">1 day ago</span></div>
  </div>
  <script>var heatmap_data = [{'date':'2024-03-01','count':2},{'date':'2024-03-04','count':5}];</script>
</body></html>"#;

/// LeetCode profile: 75 solved (40/30/5).
pub const LEETCODE_PAGE: &str = r#"<script>{"problemsSolvedTotal":75,"problemsSolvedEasy":40,
  "problemsSolvedMedium":30,"problemsSolvedHard":5,"totalSubmissions":180,
  "acceptanceRate":58.2,"ranking":99000,"daysStreak":6}</script>"#;

/// Usernames the fake upstream treats specially.
pub const MISSING_USER: &str = "missing";
pub const SLOW_USER: &str = "slow";

async fn profile(user: &str, page: &'static str) -> axum::response::Response {
    match user {
        MISSING_USER => StatusCode::NOT_FOUND.into_response(),
        SLOW_USER => {
            tokio::time::sleep(Duration::from_secs(3)).await;
            page.into_response()
        }
        _ => page.into_response(),
    }
}

/// Start a local server impersonating both providers; returns its base URL.
pub async fn spawn_upstream() -> String {
    let router = Router::new()
        .route(
            "/gfg/{user}/",
            get(|Path(user): Path<String>| async move { profile(&user, GFG_PAGE).await }),
        )
        .route(
            "/lc/{user}/",
            get(|Path(user): Path<String>| async move { profile(&user, LEETCODE_PAGE).await }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Base URL of a port nothing listens on.
pub async fn closed_base() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// App router whose providers live at `{gfg_base}/gfg/` and `{leetcode_base}/lc/`.
pub fn setup_test_app(gfg_base: &str, leetcode_base: &str) -> Router {
    let config = ProviderConfig {
        gfg_base_url: format!("{gfg_base}/gfg/"),
        leetcode_base_url: format!("{leetcode_base}/lc/"),
        fetch_timeout: Duration::from_secs(1),
        ..ProviderConfig::default()
    };
    let state = AppState::new(config).expect("Failed to build app state");
    routes::router(Arc::new(state))
}

/// Router with both providers served by a fresh fake upstream.
pub async fn setup_healthy_app() -> Router {
    let upstream = spawn_upstream().await;
    setup_test_app(&upstream, &upstream)
}

pub async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read_json(response).await
}

pub async fn post_json(
    router: Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(
            Request::post(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read_json(response).await
}

async fn read_json(response: axum::response::Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap();
    (status, json)
}
