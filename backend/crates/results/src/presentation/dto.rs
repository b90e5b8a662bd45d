//! API DTOs (Data Transfer Objects)

use serde::Serialize;
use serde_json::Value;

use crate::application::save_result::SaveResultInput;
use crate::domain::game_result::GameResult;
use crate::error::{ResultError, ResultResult};

/// Timestamp format used in listing responses
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse and validate the save-result payload field by field
///
/// Errors name the offending field instead of echoing parser internals.
pub fn parse_save_request(body: &Value) -> ResultResult<SaveResultInput> {
    let obj = body
        .as_object()
        .ok_or_else(|| ResultError::validation("body", "expected a JSON object"))?;

    let difficulty = obj
        .get("difficulty")
        .ok_or_else(|| ResultError::validation("difficulty", "is required"))?
        .as_str()
        .ok_or_else(|| ResultError::validation("difficulty", "must be a string"))?
        .to_string();

    let time_taken = obj
        .get("timeTaken")
        .ok_or_else(|| ResultError::validation("timeTaken", "is required"))?
        .as_i64()
        .ok_or_else(|| ResultError::validation("timeTaken", "must be an integer"))?;
    let time_taken = i32::try_from(time_taken)
        .map_err(|_| ResultError::validation("timeTaken", "is out of range"))?;

    let won = obj
        .get("won")
        .ok_or_else(|| ResultError::validation("won", "is required"))?
        .as_bool()
        .ok_or_else(|| ResultError::validation("won", "must be a boolean"))?;

    Ok(SaveResultInput {
        difficulty,
        time_taken,
        won,
    })
}

/// Plain message response
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// One result in the listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultItem {
    pub difficulty: String,
    pub time_taken: i32,
    pub won: bool,
    /// Formatted `YYYY-MM-DD HH:MM:SS` in UTC
    pub date: String,
}

impl From<&GameResult> for ResultItem {
    fn from(result: &GameResult) -> Self {
        Self {
            difficulty: result.difficulty.clone(),
            time_taken: result.time_taken,
            won: result.won,
            date: result.created_at.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Listing response
#[derive(Debug, Clone, Serialize)]
pub struct ResultsResponse {
    pub results: Vec<ResultItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use kernel::id::UserId;
    use serde_json::json;

    #[test]
    fn test_parse_valid_payload() {
        let input =
            parse_save_request(&json!({"difficulty": "easy", "timeTaken": 42, "won": true}))
                .unwrap();
        assert_eq!(input.difficulty, "easy");
        assert_eq!(input.time_taken, 42);
        assert!(input.won);
    }

    #[test]
    fn test_parse_missing_field() {
        let err = parse_save_request(&json!({"difficulty": "easy", "won": true})).unwrap_err();
        assert!(matches!(
            err,
            ResultError::Validation { field: "timeTaken", .. }
        ));
    }

    #[test]
    fn test_parse_mistyped_field() {
        let err =
            parse_save_request(&json!({"difficulty": "easy", "timeTaken": "42", "won": true}))
                .unwrap_err();
        assert!(matches!(
            err,
            ResultError::Validation { field: "timeTaken", .. }
        ));

        let err = parse_save_request(&json!({"difficulty": 3, "timeTaken": 42, "won": true}))
            .unwrap_err();
        assert!(matches!(
            err,
            ResultError::Validation { field: "difficulty", .. }
        ));
    }

    #[test]
    fn test_parse_non_object_body() {
        let err = parse_save_request(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, ResultError::Validation { field: "body", .. }));
    }

    #[test]
    fn test_result_item_date_format() {
        let mut result =
            crate::domain::game_result::GameResult::new(UserId::new(), "easy".into(), 42, true)
                .unwrap();
        result.created_at = chrono::Utc.with_ymd_and_hms(2025, 3, 9, 14, 5, 7).unwrap();

        let item = ResultItem::from(&result);
        assert_eq!(item.date, "2025-03-09 14:05:07");

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "difficulty": "easy",
                "timeTaken": 42,
                "won": true,
                "date": "2025-03-09 14:05:07"
            })
        );
    }
}
