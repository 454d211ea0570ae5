//! In-memory user repository.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use stockfolio_core::errors::{Result, StorageError};
use stockfolio_core::users::{NewUser, User, UserRepositoryTrait};

/// `RwLock<HashMap>`-backed user table.
#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepositoryTrait for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User> {
        new_user.validate()?;
        let user = User {
            id: new_user.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: new_user.name.trim().to_string(),
            email: new_user.email.trim().to_string(),
            created_at: Utc::now(),
        };
        let mut rows = self.rows.write().map_err(lock_poisoned)?;
        if rows.contains_key(&user.id) {
            return Err(StorageError::UniqueViolation(user.id).into());
        }
        rows.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    fn get_by_id(&self, user_id: &str) -> Result<User> {
        self.rows
            .read()
            .map_err(lock_poisoned)?
            .get(user_id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(format!("user {}", user_id)).into())
    }

    fn list(&self) -> Result<Vec<User>> {
        let mut users: Vec<User> = self
            .rows
            .read()
            .map_err(lock_poisoned)?
            .values()
            .cloned()
            .collect();
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(users)
    }
}

pub(crate) fn lock_poisoned<T>(_: std::sync::PoisonError<T>) -> StorageError {
    StorageError::Internal("storage lock poisoned".to_string())
}
