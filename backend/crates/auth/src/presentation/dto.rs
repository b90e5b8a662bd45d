//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Register / Login
// ============================================================================

/// Credentials payload shared by register and login
///
/// Fields are optional so that a missing field reaches the use case as an
/// absent credential instead of a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl CredentialsRequest {
    pub fn username(&self) -> String {
        self.username.clone().unwrap_or_default()
    }

    pub fn password(&self) -> String {
        self.password.clone().unwrap_or_default()
    }
}

/// Plain message response
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// ============================================================================
// Session Status
// ============================================================================

/// Session status response
///
/// `username` is omitted entirely when not authenticated.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatusResponse {
    pub is_authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl AuthStatusResponse {
    pub fn authenticated(username: String) -> Self {
        Self {
            is_authenticated: true,
            username: Some(username),
        }
    }

    pub fn anonymous() -> Self {
        Self {
            is_authenticated: false,
            username: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_response_shapes() {
        let json = serde_json::to_value(AuthStatusResponse::authenticated("Alice".into())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"isAuthenticated": true, "username": "Alice"})
        );

        let json = serde_json::to_value(AuthStatusResponse::anonymous()).unwrap();
        assert_eq!(json, serde_json::json!({"isAuthenticated": false}));
    }

    #[test]
    fn test_credentials_accept_missing_fields() {
        let req: CredentialsRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.username(), "");
        assert_eq!(req.password(), "");

        let req: CredentialsRequest =
            serde_json::from_str(r#"{"username":"alice","password":"pw"}"#).unwrap();
        assert_eq!(req.username(), "alice");
        assert_eq!(req.password(), "pw");
    }
}
