//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::game_result::GameResult;
use crate::domain::repository::ResultRepository;
use crate::error::ResultResult;
use kernel::id::{GameResultId, UserId};

/// PostgreSQL-backed result repository
#[derive(Clone)]
pub struct PgResultRepository {
    pool: PgPool,
}

impl PgResultRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ResultRepository for PgResultRepository {
    async fn create(&self, result: &GameResult) -> ResultResult<()> {
        sqlx::query(
            r#"
            INSERT INTO game_results (
                result_id,
                user_id,
                difficulty,
                time_taken,
                won,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(result.result_id.as_uuid())
        .bind(result.user_id.as_uuid())
        .bind(&result.difficulty)
        .bind(result.time_taken)
        .bind(result.won)
        .bind(result.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_recent(&self, user_id: &UserId, limit: i64) -> ResultResult<Vec<GameResult>> {
        let rows = sqlx::query_as::<_, GameResultRow>(
            r#"
            SELECT
                result_id,
                user_id,
                difficulty,
                time_taken,
                won,
                created_at
            FROM game_results
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_result()).collect())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct GameResultRow {
    result_id: Uuid,
    user_id: Uuid,
    difficulty: String,
    time_taken: i32,
    won: bool,
    created_at: DateTime<Utc>,
}

impl GameResultRow {
    fn into_result(self) -> GameResult {
        GameResult {
            result_id: GameResultId::from_uuid(self.result_id),
            user_id: UserId::from_uuid(self.user_id),
            difficulty: self.difficulty,
            time_taken: self.time_taken,
            won: self.won,
            created_at: self.created_at,
        }
    }
}
