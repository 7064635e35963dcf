use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use chrono::Utc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use codetrek_core::presentation::DashboardView;
use codetrek_core::{CombinedReport, CombinedStatistics, Provider, ProviderStatistics};

use crate::dto::{
    AuthResponse, CombinedData, CombinedQuery, CombinedResponse, DashboardResponse, GfgResponse,
    HealthResponse, LeetCodeResponse, LoginRequest, ProviderQuery, SignupRequest,
    VerifyOtpRequest,
};
use crate::error::ApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Build the full router with all routes.
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/api/gfg", get(gfg_stats))
        .route("/api/leetcode", get(leetcode_stats))
        .route("/api/profile-stats", get(profile_stats))
        .route("/api/dashboard", get(dashboard))
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/verify-otp", post(verify_otp))
        .route("/api/auth/login", post(login));

    let public = Router::new()
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    public.merge(api).with_state(state)
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/api/gfg",
    params(ProviderQuery),
    responses(
        (status = 200, description = "GeeksforGeeks statistics", body = GfgResponse),
        (status = 500, description = "Profile unavailable; default record", body = GfgResponse),
    ),
    tag = "stats"
)]
pub async fn gfg_stats(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProviderQuery>,
) -> impl IntoResponse {
    let provider = Provider::GeeksforGeeks;
    let username = state
        .stats
        .config()
        .resolve_username(provider, query.username.as_deref());

    match state.stats.gfg(&username).await {
        Ok(report) => (
            StatusCode::OK,
            axum::Json(GfgResponse {
                success: true,
                data: report.stats,
                recent_problems: report.recent_problems,
                error: None,
            }),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(GfgResponse {
                success: false,
                data: ProviderStatistics::fallback(provider, &username),
                recent_problems: Vec::new(),
                error: Some(e.to_string()),
            }),
        ),
    }
}

#[utoipa::path(
    get,
    path = "/api/leetcode",
    params(ProviderQuery),
    responses(
        (status = 200, description = "LeetCode statistics", body = LeetCodeResponse),
        (status = 500, description = "Profile unavailable; default record", body = LeetCodeResponse),
    ),
    tag = "stats"
)]
pub async fn leetcode_stats(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProviderQuery>,
) -> impl IntoResponse {
    let provider = Provider::LeetCode;
    let username = state
        .stats
        .config()
        .resolve_username(provider, query.username.as_deref());

    match state.stats.leetcode(&username).await {
        Ok(report) => (
            StatusCode::OK,
            axum::Json(LeetCodeResponse {
                success: true,
                data: report.stats,
                error: None,
            }),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(LeetCodeResponse {
                success: false,
                data: ProviderStatistics::fallback(provider, &username),
                error: Some(e.to_string()),
            }),
        ),
    }
}

/// Resolve both usernames and run the combined pipeline.
///
/// When both providers fail, the static fallback report is returned together
/// with the error message.
async fn combined_report(
    state: &AppState,
    query: &CombinedQuery,
) -> (CombinedReport, Option<String>) {
    let config = state.stats.config();
    let gfg_username =
        config.resolve_username(Provider::GeeksforGeeks, query.gfg_username.as_deref());
    let leetcode_username =
        config.resolve_username(Provider::LeetCode, query.leetcode_username.as_deref());

    match state.stats.combined(&gfg_username, &leetcode_username).await {
        Ok(report) => (report, None),
        Err(e) => {
            let report = CombinedReport {
                gfg: None,
                leetcode: None,
                combined: CombinedStatistics::fallback(),
                recent_problems: Vec::new(),
            };
            (report, Some(e.to_string()))
        }
    }
}

fn status_for(failed: bool) -> StatusCode {
    if failed {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    }
}

#[utoipa::path(
    get,
    path = "/api/profile-stats",
    params(CombinedQuery),
    responses(
        (status = 200, description = "Combined statistics, possibly degraded", body = CombinedResponse),
        (status = 500, description = "Both providers failed; static fallback", body = CombinedResponse),
    ),
    tag = "stats"
)]
pub async fn profile_stats(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CombinedQuery>,
) -> impl IntoResponse {
    let (report, error) = combined_report(&state, &query).await;

    let response = CombinedResponse {
        success: error.is_none(),
        data: CombinedData {
            gfg: report.gfg,
            leetcode: report.leetcode,
            combined: report.combined,
        },
        recent_problems: report.recent_problems,
        error,
    };

    (status_for(response.error.is_some()), axum::Json(response))
}

#[utoipa::path(
    get,
    path = "/api/dashboard",
    params(CombinedQuery),
    responses(
        (status = 200, description = "Dashboard view model", body = DashboardResponse),
        (status = 500, description = "Both providers failed; static fallback", body = DashboardResponse),
    ),
    tag = "stats"
)]
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CombinedQuery>,
) -> impl IntoResponse {
    let (report, error) = combined_report(&state, &query).await;

    let response = DashboardResponse {
        success: error.is_none(),
        data: DashboardView::new(&report, Utc::now().date_naive()),
        error,
    };

    (status_for(response.error.is_some()), axum::Json(response))
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Pending account created", body = AuthResponse),
        (status = 400, description = "Missing fields", body = crate::dto::ErrorResponse),
        (status = 409, description = "User already exists", body = crate::dto::ErrorResponse),
    ),
    tag = "auth"
)]
pub async fn signup(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<SignupRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let outcome = state
        .accounts
        .signup(&body.name, &body.email, &body.password)
        .await?;

    Ok(axum::Json(AuthResponse::from(outcome)))
}

#[utoipa::path(
    post,
    path = "/api/auth/verify-otp",
    request_body = VerifyOtpRequest,
    responses(
        (status = 200, description = "Account activated", body = AuthResponse),
        (status = 400, description = "Missing fields, unknown or wrong code", body = crate::dto::ErrorResponse),
    ),
    tag = "auth"
)]
pub async fn verify_otp(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<VerifyOtpRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.accounts.verify_otp(&body.email, &body.otp).await?;

    Ok(axum::Json(AuthResponse {
        message: "OTP verified successfully".into(),
        user,
        otp: None,
    }))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = AuthResponse),
        (status = 400, description = "Missing fields", body = crate::dto::ErrorResponse),
        (status = 401, description = "Invalid credentials", body = crate::dto::ErrorResponse),
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let outcome = state.accounts.login(&body.email, &body.password).await?;

    Ok(axum::Json(AuthResponse::from(outcome)))
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health() -> impl IntoResponse {
    axum::Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}
