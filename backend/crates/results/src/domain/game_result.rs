//! Game Result Entity
//!
//! One finished game: difficulty label, elapsed seconds, and the outcome.
//! Immutable once created.

use chrono::{DateTime, Utc};
use kernel::id::{GameResultId, UserId};

use crate::error::{ResultError, ResultResult};

/// Maximum length of the difficulty label (in characters)
pub const DIFFICULTY_MAX_LENGTH: usize = 20;

/// Game result entity
#[derive(Debug, Clone)]
pub struct GameResult {
    /// Internal UUID identifier
    pub result_id: GameResultId,
    /// Owning user
    pub user_id: UserId,
    /// Difficulty label chosen by the frontend (e.g. "easy", "expert")
    pub difficulty: String,
    /// Elapsed time in seconds
    pub time_taken: i32,
    /// Whether the game was won
    pub won: bool,
    /// Created timestamp (set once)
    pub created_at: DateTime<Utc>,
}

impl GameResult {
    /// Create a validated game result
    pub fn new(
        user_id: UserId,
        difficulty: String,
        time_taken: i32,
        won: bool,
    ) -> ResultResult<Self> {
        let difficulty = difficulty.trim().to_string();

        if difficulty.is_empty() {
            return Err(ResultError::validation("difficulty", "cannot be empty"));
        }
        if difficulty.chars().count() > DIFFICULTY_MAX_LENGTH {
            return Err(ResultError::validation(
                "difficulty",
                format!("must be at most {DIFFICULTY_MAX_LENGTH} characters"),
            ));
        }
        if time_taken < 0 {
            return Err(ResultError::validation("timeTaken", "must not be negative"));
        }

        Ok(Self {
            result_id: GameResultId::new(),
            user_id,
            difficulty,
            time_taken,
            won,
            created_at: Utc::now(),
        })
    }
}
