//! Results Router
//!
//! The caller nests this under `/result` and layers the auth middleware on
//! top; the routes assume an authenticated request.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::domain::repository::ResultRepository;
use crate::infra::postgres::PgResultRepository;
use crate::presentation::handlers::{self, ResultsAppState};

/// Create the results router with PostgreSQL repository
pub fn results_router(repo: PgResultRepository) -> Router {
    results_router_generic(repo)
}

/// Create a generic results router for any repository implementation
pub fn results_router_generic<R>(repo: R) -> Router
where
    R: ResultRepository + Clone + Send + Sync + 'static,
{
    let state = ResultsAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/save", post(handlers::save_result::<R>))
        .route("/results", get(handlers::get_results::<R>))
        .with_state(state)
}
