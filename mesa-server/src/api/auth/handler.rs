//! Authentication Handlers
//!
//! Handles token issuance/refresh, registration and profile management

use std::time::Duration;

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::TOKEN_TYPE_REFRESH;
use crate::auth::{CurrentUser, TokenPair, password};
use crate::core::ServerState;
use crate::db::repository::user;
use crate::utils::validation::{
    MAX_NAME_LEN, validate_email, validate_password, validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{ProfileUpdate, RegisterRequest, Role, User};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Token request payload
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub email: String,
    pub password: String,
}

/// Refresh request payload
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Refresh response: a fresh access token
#[derive(Debug, Serialize)]
pub struct AccessTokenResponse {
    pub access: String,
}

/// POST /api/token - 签发 access/refresh 令牌对
///
/// Authenticates email + password and returns a token pair.
pub async fn token(
    State(state): State<ServerState>,
    Json(req): Json<TokenRequest>,
) -> AppResult<Json<TokenPair>> {
    let account = user::find_by_email(&state.pool, &req.email).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error message to prevent email enumeration
    let account = match account {
        Some(u) => {
            let password_valid = password::verify_password(&req.password, &u.password_hash)
                .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;
            if !password_valid {
                tracing::warn!(email = %req.email, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }
            u
        }
        None => {
            tracing::warn!(email = %req.email, "Login failed - user not found");
            return Err(AppError::invalid_credentials());
        }
    };

    let pair = state
        .get_jwt_service()
        .generate_token_pair(&account)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(
        user_id = account.id,
        email = %account.email,
        role = %account.role,
        "User logged in successfully"
    );

    Ok(Json(pair))
}

/// POST /api/token/refresh - 用 refresh 令牌换取新的 access 令牌
///
/// The user row is re-read so revoked accounts or changed roles take effect
/// at refresh time, not at the next full login.
pub async fn refresh(
    State(state): State<ServerState>,
    Json(req): Json<RefreshRequest>,
) -> AppResult<Json<AccessTokenResponse>> {
    let jwt_service = state.get_jwt_service();
    let claims = jwt_service
        .validate_token_of_type(&req.refresh, TOKEN_TYPE_REFRESH)
        .map_err(|e| match e {
            crate::auth::JwtError::ExpiredToken => AppError::token_expired(),
            _ => AppError::invalid_token("Invalid refresh token"),
        })?;

    let user_id: i64 = claims
        .sub
        .parse()
        .map_err(|_| AppError::invalid_token("Malformed subject"))?;
    let account = user::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(AppError::unauthorized)?;

    let access = jwt_service
        .generate_access_token(&account)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    Ok(Json(AccessTokenResponse { access }))
}

/// POST /api/register - 注册新客户账号
///
/// Registration always yields a customer-role account.
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<User>)> {
    validate_required_text(&req.name, "name", MAX_NAME_LEN)?;
    validate_email(&req.email)?;
    validate_password(&req.password)?;
    if req.password != req.password2 {
        return Err(AppError::validation("Password fields didn't match"));
    }

    let password_hash = password::hash_password(&req.password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {}", e)))?;

    let account = user::create(
        &state.pool,
        req.restaurant_id,
        &req.name,
        &req.email,
        &password_hash,
        Role::Customer,
    )
    .await?;

    tracing::info!(user_id = account.id, email = %account.email, "Customer registered");

    Ok((StatusCode::CREATED, Json(account)))
}

/// GET /api/user-profile - 获取个人资料
pub async fn profile(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<User>> {
    let account = user::find_by_id(&state.pool, user.id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {}", user.id)))?;
    Ok(Json(account))
}

/// PUT/PATCH /api/user-profile - 更新个人资料 (email 和 role 只读)
pub async fn update_profile(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<ProfileUpdate>,
) -> AppResult<Json<User>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    let account = user::update_profile(&state.pool, user.id, payload).await?;
    Ok(Json(account))
}
