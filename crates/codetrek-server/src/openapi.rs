use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CodeTrek API",
        version = "0.1.0",
        description = "Coding-practice statistics scraped from GeeksforGeeks and LeetCode profiles."
    ),
    paths(
        crate::routes::gfg_stats,
        crate::routes::leetcode_stats,
        crate::routes::profile_stats,
        crate::routes::dashboard,
        crate::routes::signup,
        crate::routes::verify_otp,
        crate::routes::login,
        crate::routes::health,
    ),
    components(schemas(
        crate::dto::GfgResponse,
        crate::dto::LeetCodeResponse,
        crate::dto::CombinedData,
        crate::dto::CombinedResponse,
        crate::dto::DashboardResponse,
        crate::dto::SignupRequest,
        crate::dto::VerifyOtpRequest,
        crate::dto::LoginRequest,
        crate::dto::AuthResponse,
        crate::dto::HealthResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "stats", description = "Provider and combined statistics"),
        (name = "auth", description = "Demo sign-up and login"),
        (name = "system", description = "Health and system status"),
    )
)]
pub struct ApiDoc;
