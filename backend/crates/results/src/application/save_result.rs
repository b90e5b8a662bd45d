//! Save Result Use Case
//!
//! Persists one game result owned by the authenticated user.

use std::sync::Arc;

use crate::domain::game_result::GameResult;
use crate::domain::repository::ResultRepository;
use crate::error::ResultResult;
use kernel::id::UserId;

/// Save result input (already structurally validated by the DTO layer)
#[derive(Debug)]
pub struct SaveResultInput {
    pub difficulty: String,
    pub time_taken: i32,
    pub won: bool,
}

/// Save result use case
pub struct SaveResultUseCase<R>
where
    R: ResultRepository,
{
    repo: Arc<R>,
}

impl<R> SaveResultUseCase<R>
where
    R: ResultRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: UserId, input: SaveResultInput) -> ResultResult<()> {
        let result = GameResult::new(user_id, input.difficulty, input.time_taken, input.won)?;

        self.repo.create(&result).await?;

        tracing::info!(
            result_id = %result.result_id,
            user_id = %result.user_id,
            difficulty = %result.difficulty,
            won = result.won,
            "Game result saved"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResultError;
    use crate::testing::InMemoryResults;

    #[tokio::test]
    async fn test_save_persists_one_record() {
        let repo = Arc::new(InMemoryResults::default());
        let uc = SaveResultUseCase::new(repo.clone());
        let user_id = UserId::new();

        uc.execute(
            user_id.clone(),
            SaveResultInput {
                difficulty: "easy".to_string(),
                time_taken: 42,
                won: true,
            },
        )
        .await
        .unwrap();

        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_input_persists_nothing() {
        let repo = Arc::new(InMemoryResults::default());
        let uc = SaveResultUseCase::new(repo.clone());

        let err = uc
            .execute(
                UserId::new(),
                SaveResultInput {
                    difficulty: "easy".to_string(),
                    time_taken: -5,
                    won: false,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ResultError::Validation { .. }));
        assert_eq!(repo.len(), 0);
    }
}
