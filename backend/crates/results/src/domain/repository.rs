//! Repository Traits

use crate::domain::game_result::GameResult;
use crate::error::ResultResult;
use kernel::id::UserId;

/// Game result repository trait
#[trait_variant::make(ResultRepository: Send)]
pub trait LocalResultRepository {
    /// Persist a new result
    async fn create(&self, result: &GameResult) -> ResultResult<()>;

    /// Fetch the most recent results of a user, newest first
    async fn list_recent(&self, user_id: &UserId, limit: i64) -> ResultResult<Vec<GameResult>>;
}
