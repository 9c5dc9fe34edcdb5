use super::dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
use super::service::AuthService;
use super::token::TokenClaims;
use crate::common::extract::AppJson;
use crate::common::response::ApiSuccess;
use crate::state::AppState;
use axum::{
    extract::{Extension, State},
    response::IntoResponse,
};

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created successfully", body = AuthResponse),
        (status = 400, description = "Bad Request")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> impl IntoResponse {
    match AuthService::register(state, payload).await {
        Ok(res) => ApiSuccess::created(res).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Login user and get a token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 400, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> impl IntoResponse {
    match AuthService::login(state, payload).await {
        Ok(res) => ApiSuccess::ok(res).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Login as administrator
#[utoipa::path(
    post,
    path = "/api/auth/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Admin login successful", body = AuthResponse),
        (status = 400, description = "Invalid credentials"),
        (status = 403, description = "Not an admin account")
    ),
    tag = "Auth"
)]
pub async fn admin_login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> impl IntoResponse {
    match AuthService::admin_login(state, payload).await {
        Ok(res) => ApiSuccess::ok(res).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Current user
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Auth"
)]
pub async fn get_me(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
) -> impl IntoResponse {
    match AuthService::me(state, claims.sub).await {
        Ok(user) => ApiSuccess::ok(user).into_response(),
        Err(e) => e.into_response(),
    }
}
