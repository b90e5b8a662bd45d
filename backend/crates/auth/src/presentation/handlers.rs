//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{AppendHeaders, IntoResponse};
use std::sync::Arc;

use platform::cookie::CookieConfig;
use platform::csrf;

use crate::application::config::AuthConfig;
use crate::application::{
    CheckSessionUseCase, LoginInput, LoginUseCase, LogoutUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{AuthStatusResponse, CredentialsRequest, MessageResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<CredentialsRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    use_case
        .execute(RegisterInput {
            user_name: req.username(),
            password: req.password(),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created successfully",
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
    Json(req): Json<CredentialsRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            user_name: req.username(),
            password: req.password(),
        })
        .await?;

    let session_cookie = session_cookie_config(&state.config).build_set_cookie(&output.session_token);
    let csrf_cookie = csrf_cookie_header(&state.config, &headers);

    Ok((
        StatusCode::OK,
        AppendHeaders([
            (header::SET_COOKIE, session_cookie),
            (header::SET_COOKIE, csrf_cookie),
        ]),
        Json(MessageResponse {
            message: "Login successful",
        }),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /logout
///
/// Always succeeds; an absent or invalid session cookie still yields a
/// cleared cookie and a success message.
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(&headers, &state.config.session_cookie_name);

    let use_case = LogoutUseCase::new(state.repo.clone(), state.config.clone());
    use_case.execute(token.as_deref()).await?;

    let clear_cookie = session_cookie_config(&state.config).build_delete_cookie();

    Ok((
        StatusCode::OK,
        AppendHeaders([(header::SET_COOKIE, clear_cookie)]),
        Json(MessageResponse {
            message: "Logged out successfully",
        }),
    ))
}

// ============================================================================
// Check Auth
// ============================================================================

/// GET /check-auth
///
/// Never errors: any token problem reads as "not authenticated".
pub async fn check_auth<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> impl IntoResponse
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(&headers, &state.config.session_cookie_name);

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());

    let session = match token {
        Some(token) => use_case.execute(&token).await.ok(),
        None => None,
    };

    let body = match session {
        Some(session) => AuthStatusResponse::authenticated(session.user_name.original().to_string()),
        None => AuthStatusResponse::anonymous(),
    };

    let csrf_cookie = csrf_cookie_header(&state.config, &headers);

    (
        StatusCode::OK,
        AppendHeaders([(header::SET_COOKIE, csrf_cookie)]),
        Json(body),
    )
}

// ============================================================================
// Helper Functions
// ============================================================================

fn session_cookie_config(config: &AuthConfig) -> CookieConfig {
    CookieConfig {
        name: config.session_cookie_name.clone(),
        secure: config.cookie_secure,
        http_only: true,
        same_site: config.cookie_same_site,
        path: "/".to_string(),
        max_age_secs: Some(config.session_ttl.as_secs() as i64),
    }
}

/// Build the Set-Cookie header value for the anti-forgery token
///
/// Reuses an existing token from the request so parallel tabs stay valid.
fn csrf_cookie_header(config: &AuthConfig, headers: &HeaderMap) -> String {
    let token = csrf::current_or_new_token(headers);
    csrf::cookie_config(config.cookie_secure, config.cookie_same_site).build_set_cookie(&token)
}
