//! In-memory repository fake for use-case tests

use std::sync::{Arc, Mutex};

use crate::domain::game_result::GameResult;
use crate::domain::repository::ResultRepository;
use crate::error::ResultResult;
use kernel::id::UserId;

/// Vec-backed result store mirroring the database ordering semantics
#[derive(Default, Clone)]
pub struct InMemoryResults(Arc<Mutex<Vec<GameResult>>>);

impl InMemoryResults {
    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

impl ResultRepository for InMemoryResults {
    async fn create(&self, result: &GameResult) -> ResultResult<()> {
        self.0.lock().unwrap().push(result.clone());
        Ok(())
    }

    async fn list_recent(&self, user_id: &UserId, limit: i64) -> ResultResult<Vec<GameResult>> {
        let mut results: Vec<GameResult> = self
            .0
            .lock()
            .unwrap()
            .iter()
            .filter(|r| &r.user_id == user_id)
            .cloned()
            .collect();
        results.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        results.truncate(limit as usize);
        Ok(results)
    }
}
