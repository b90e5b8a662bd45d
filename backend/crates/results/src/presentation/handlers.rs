//! HTTP Handlers
//!
//! Both routes sit behind the auth middleware, which injects `CurrentUser`
//! into request extensions and rejects anonymous requests with 401.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::{Extension, Json};
use std::sync::Arc;

use auth::CurrentUser;
use platform::csrf;

use crate::application::{ListResultsUseCase, SaveResultUseCase};
use crate::domain::repository::ResultRepository;
use crate::error::{ResultError, ResultResult};
use crate::presentation::dto::{
    MessageResponse, ResultItem, ResultsResponse, parse_save_request,
};

/// Shared state for result handlers
#[derive(Clone)]
pub struct ResultsAppState<R>
where
    R: ResultRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// POST /result/save
///
/// State-changing, so the anti-forgery double-submit pair is required on
/// top of the session.
pub async fn save_result<R>(
    State(state): State<ResultsAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> ResultResult<Json<MessageResponse>>
where
    R: ResultRepository + Clone + Send + Sync + 'static,
{
    if !csrf::verify_request(&headers) {
        return Err(ResultError::CsrfRejected);
    }

    let input = parse_save_request(&body)?;

    let use_case = SaveResultUseCase::new(state.repo.clone());
    use_case.execute(current_user.user_id, input).await?;

    Ok(Json(MessageResponse {
        message: "Result saved successfully",
    }))
}

/// GET /result/results
pub async fn get_results<R>(
    State(state): State<ResultsAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
) -> ResultResult<Json<ResultsResponse>>
where
    R: ResultRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListResultsUseCase::new(state.repo.clone());
    let results = use_case.execute(&current_user.user_id).await?;

    Ok(Json(ResultsResponse {
        results: results.iter().map(ResultItem::from).collect(),
    }))
}
