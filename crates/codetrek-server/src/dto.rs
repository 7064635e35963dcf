use serde::{Deserialize, Serialize};

use codetrek_core::PublicUser;
use codetrek_core::accounts::{LoginOutcome, SignupOutcome};
use codetrek_core::models::{CombinedStatistics, ProviderStatistics, RecentProblem};
use codetrek_core::presentation::DashboardView;

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ProviderQuery {
    /// Profile username; the configured demo user when omitted.
    pub username: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct CombinedQuery {
    pub gfg_username: Option<String>,
    pub leetcode_username: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GfgResponse {
    pub success: bool,
    /// Scraped statistics, or the default record when the fetch failed.
    pub data: ProviderStatistics,
    pub recent_problems: Vec<RecentProblem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct LeetCodeResponse {
    pub success: bool,
    /// Scraped statistics, or the default record when the fetch failed.
    pub data: ProviderStatistics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CombinedData {
    /// `null` when the GeeksforGeeks pipeline failed.
    pub gfg: Option<ProviderStatistics>,
    /// `null` when the LeetCode pipeline failed.
    pub leetcode: Option<ProviderStatistics>,
    pub combined: CombinedStatistics,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CombinedResponse {
    pub success: bool,
    pub data: CombinedData,
    pub recent_problems: Vec<RecentProblem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct DashboardResponse {
    pub success: bool,
    pub data: DashboardView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

// Missing fields deserialize as empty and are rejected by the account service.

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct VerifyOtpRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub otp: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct AuthResponse {
    pub message: String,
    pub user: PublicUser,
    /// One-time code, returned only by signup in this demo flow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
}

impl From<SignupOutcome> for AuthResponse {
    fn from(outcome: SignupOutcome) -> Self {
        Self {
            message: "User created successfully. Please verify OTP.".into(),
            user: outcome.user,
            otp: Some(outcome.otp),
        }
    }
}

impl From<LoginOutcome> for AuthResponse {
    fn from(outcome: LoginOutcome) -> Self {
        Self {
            message: "Login successful".into(),
            user: outcome.user,
            otp: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
