//! Login Use Case
//!
//! Authenticates a user and creates a session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::sign_session_token;
use crate::domain::entity::session::Session;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{user_name::UserName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub user_name: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Session token for cookie
    pub session_token: String,
    /// Display name of the authenticated user
    pub user_name: String,
}

/// Login use case
pub struct LoginUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> LoginUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    /// Authenticate and open a session
    ///
    /// Unknown user, malformed name, and wrong password are deliberately
    /// indistinguishable: all map to `AuthError::InvalidCredentials`.
    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        if input.user_name.trim().is_empty() || input.password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }

        let user_name =
            UserName::new(&input.user_name).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(&raw_password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        // Record last login
        let mut user = user;
        user.record_login();
        self.user_repo.update(&user).await?;

        // Create session
        let session = Session::new(
            user.user_id.clone(),
            user.user_name.clone(),
            self.config.session_ttl_chrono(),
        );
        self.session_repo.create(&session).await?;

        let session_token = sign_session_token(&self.config.session_secret, session.session_id);

        tracing::info!(
            user_id = %user.user_id,
            session_id = %session.session_id,
            "User logged in"
        );

        Ok(LoginOutput {
            session_token,
            user_name: user.user_name.original().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::register::{RegisterInput, RegisterUseCase};
    use crate::application::token::parse_session_token;
    use crate::testing::{InMemorySessions, InMemoryUsers};

    async fn seeded() -> (Arc<InMemoryUsers>, Arc<AuthConfig>) {
        let users = Arc::new(InMemoryUsers::default());
        let config = Arc::new(AuthConfig::development());
        RegisterUseCase::new(users.clone(), config.clone())
            .execute(RegisterInput {
                user_name: "Alice".to_string(),
                password: "Sturdy#Pass42".to_string(),
            })
            .await
            .unwrap();
        (users, config)
    }

    #[tokio::test]
    async fn test_login_creates_session_and_signed_token() {
        let (users, config) = seeded().await;
        let sessions = Arc::new(InMemorySessions::default());
        let uc = LoginUseCase::new(users, sessions.clone(), config.clone());

        let output = uc
            .execute(LoginInput {
                user_name: "alice".to_string(),
                password: "Sturdy#Pass42".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(output.user_name, "Alice");
        assert_eq!(sessions.len(), 1);

        let session_id = parse_session_token(&config.session_secret, &output.session_token).unwrap();
        assert_eq!(sessions.ids(), vec![session_id]);
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_opaque() {
        let (users, config) = seeded().await;
        let sessions = Arc::new(InMemorySessions::default());
        let uc = LoginUseCase::new(users, sessions.clone(), config);

        let err = uc
            .execute(LoginInput {
                user_name: "alice".to_string(),
                password: "WrongPass#99".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert_eq!(sessions.len(), 0);
    }

    #[tokio::test]
    async fn test_login_unknown_user_is_opaque() {
        let (users, config) = seeded().await;
        let sessions = Arc::new(InMemorySessions::default());
        let uc = LoginUseCase::new(users, sessions, config);

        for name in ["bob", "not a valid name!", ""] {
            let err = uc
                .execute(LoginInput {
                    user_name: name.to_string(),
                    password: "Sturdy#Pass42".to_string(),
                })
                .await
                .unwrap_err();
            assert!(matches!(err, AuthError::InvalidCredentials));
        }
    }

    #[tokio::test]
    async fn test_login_records_last_login() {
        let (users, config) = seeded().await;
        let sessions = Arc::new(InMemorySessions::default());
        let uc = LoginUseCase::new(users.clone(), sessions, config);

        uc.execute(LoginInput {
            user_name: "alice".to_string(),
            password: "Sturdy#Pass42".to_string(),
        })
        .await
        .unwrap();

        let user_name = UserName::new("alice").unwrap();
        let user = users.find_by_user_name(&user_name).await.unwrap().unwrap();
        assert!(user.last_login_at.is_some());
    }
}
