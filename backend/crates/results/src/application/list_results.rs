//! List Results Use Case
//!
//! Returns the most recent results of the authenticated user.

use std::sync::Arc;

use crate::domain::game_result::GameResult;
use crate::domain::repository::ResultRepository;
use crate::error::ResultResult;
use kernel::id::UserId;

/// How many recent results the listing returns at most
pub const RECENT_RESULTS_LIMIT: i64 = 10;

/// List results use case
pub struct ListResultsUseCase<R>
where
    R: ResultRepository,
{
    repo: Arc<R>,
}

impl<R> ListResultsUseCase<R>
where
    R: ResultRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Fetch at most `RECENT_RESULTS_LIMIT` results, newest first
    pub async fn execute(&self, user_id: &UserId) -> ResultResult<Vec<GameResult>> {
        self.repo.list_recent(user_id, RECENT_RESULTS_LIMIT).await
    }
}
