//! Auth Middleware
//!
//! Validates the session cookie on protected routes and injects the
//! authenticated identity into request extensions.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::SessionRepository;
use crate::error::AuthError;
use kernel::id::UserId;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// The authenticated requester, stored in request extensions
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub user_name: String,
}

/// Middleware that requires a valid session
///
/// On success the request carries a `CurrentUser` extension; otherwise the
/// request is rejected with 401 before reaching the handler.
pub async fn require_session<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name)
        .ok_or_else(|| AuthError::SessionInvalid.into_response())?;

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());

    let session = use_case
        .execute(&token)
        .await
        .map_err(|e| e.into_response())?;

    req.extensions_mut().insert(CurrentUser {
        user_id: session.user_id,
        user_name: session.user_name.original().to_string(),
    });

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::token::sign_session_token;
    use crate::domain::entity::session::Session;
    use crate::domain::value_object::user_name::UserName;
    use crate::testing::InMemorySessions;
    use axum::http::{StatusCode, header};
    use axum::routing::post;
    use axum::{Extension, Router};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    /// Router with a guarded route that counts how often the handler runs
    fn guarded_app(
        sessions: InMemorySessions,
        config: Arc<AuthConfig>,
        handler_hits: Arc<AtomicUsize>,
    ) -> Router {
        let state = AuthMiddlewareState {
            repo: Arc::new(sessions),
            config,
        };

        Router::new()
            .route(
                "/save",
                post(move |Extension(user): Extension<CurrentUser>| {
                    let hits = handler_hits.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        user.user_name
                    }
                }),
            )
            .layer(axum::middleware::from_fn_with_state(
                state,
                require_session::<InMemorySessions>,
            ))
    }

    fn save_request(config: &AuthConfig, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("POST").uri("/save");
        if let Some(token) = token {
            builder = builder.header(
                header::COOKIE,
                format!("{}={}", config.session_cookie_name, token),
            );
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_request_without_cookie_is_rejected_before_handler() {
        let sessions = InMemorySessions::default();
        let config = Arc::new(AuthConfig::development());
        let hits = Arc::new(AtomicUsize::new(0));
        let app = guarded_app(sessions, config.clone(), hits.clone());

        let response = app.oneshot(save_request(&config, None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_forged_token_is_rejected_before_handler() {
        let sessions = InMemorySessions::default();
        let config = Arc::new(AuthConfig::development());
        let session = Session::new(
            UserId::new(),
            UserName::new("alice").unwrap(),
            chrono::Duration::hours(12),
        );
        sessions.create(&session).await.unwrap();

        // Signed with a secret the server does not hold
        let forged = sign_session_token(&[9u8; 32], session.session_id);

        let hits = Arc::new(AtomicUsize::new(0));
        let app = guarded_app(sessions, config.clone(), hits.clone());

        let response = app
            .oneshot(save_request(&config, Some(&forged)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_valid_session_reaches_handler_with_identity() {
        let sessions = InMemorySessions::default();
        let config = Arc::new(AuthConfig::development());
        let session = Session::new(
            UserId::new(),
            UserName::new("alice").unwrap(),
            chrono::Duration::hours(12),
        );
        sessions.create(&session).await.unwrap();
        let token = sign_session_token(&config.session_secret, session.session_id);

        let hits = Arc::new(AtomicUsize::new(0));
        let app = guarded_app(sessions, config.clone(), hits.clone());

        let response = app
            .oneshot(save_request(&config, Some(&token)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
