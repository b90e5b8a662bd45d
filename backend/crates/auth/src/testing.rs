//! In-memory repository fakes for use-case tests

use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::domain::entity::{session::Session, user::User};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;

/// Vec-backed user store with the same uniqueness behavior as the database
#[derive(Default, Clone)]
pub struct InMemoryUsers(Arc<Mutex<Vec<User>>>);

impl InMemoryUsers {
    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

impl UserRepository for InMemoryUsers {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.0.lock().unwrap();
        if users
            .iter()
            .any(|u| u.user_name.canonical() == user.user_name.canonical())
        {
            return Err(AuthError::UserNameTaken);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.user_id == user_id)
            .cloned())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.user_name.canonical() == user_name.canonical())
            .cloned())
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        let mut users = self.0.lock().unwrap();
        if let Some(existing) = users.iter_mut().find(|u| u.user_id == user.user_id) {
            *existing = user.clone();
        }
        Ok(())
    }
}

/// Vec-backed session store
#[derive(Default, Clone)]
pub struct InMemorySessions(Arc<Mutex<Vec<Session>>>);

impl InMemorySessions {
    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    pub fn ids(&self) -> Vec<Uuid> {
        self.0.lock().unwrap().iter().map(|s| s.session_id).collect()
    }
}

impl SessionRepository for InMemorySessions {
    async fn create(&self, session: &Session) -> AuthResult<()> {
        self.0.lock().unwrap().push(session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.session_id == session_id)
            .cloned())
    }

    async fn update(&self, session: &Session) -> AuthResult<()> {
        let mut sessions = self.0.lock().unwrap();
        if let Some(existing) = sessions.iter_mut().find(|s| s.session_id == session.session_id) {
            *existing = session.clone();
        }
        Ok(())
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        self.0.lock().unwrap().retain(|s| s.session_id != session_id);
        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let mut sessions = self.0.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|s| !s.is_expired());
        Ok((before - sessions.len()) as u64)
    }
}
