//! In-memory security repository.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use stockfolio_core::errors::{Result, StorageError};
use stockfolio_core::securities::{Security, SecurityRepositoryTrait};

use crate::users::lock_poisoned;

/// `RwLock<HashMap>`-backed security registry.
#[derive(Default)]
pub struct InMemorySecurityRepository {
    rows: RwLock<HashMap<String, Security>>,
}

impl InMemorySecurityRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SecurityRepositoryTrait for InMemorySecurityRepository {
    async fn create(&self, security: Security) -> Result<Security> {
        let mut rows = self.rows.write().map_err(lock_poisoned)?;
        if rows.contains_key(&security.id) {
            return Err(StorageError::UniqueViolation(security.id).into());
        }
        rows.insert(security.id.clone(), security.clone());
        Ok(security)
    }

    fn get_by_id(&self, security_id: &str) -> Result<Security> {
        self.rows
            .read()
            .map_err(lock_poisoned)?
            .get(security_id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(format!("security {}", security_id)).into())
    }

    fn find_by_sid_and_market(&self, sid: &str, market: &str) -> Result<Option<Security>> {
        Ok(self
            .rows
            .read()
            .map_err(lock_poisoned)?
            .values()
            .find(|s| s.sid == sid && s.market == market)
            .cloned())
    }

    fn list(&self) -> Result<Vec<Security>> {
        let mut securities: Vec<Security> = self
            .rows
            .read()
            .map_err(lock_poisoned)?
            .values()
            .cloned()
            .collect();
        securities.sort_by(|a, b| (&a.market, &a.sid).cmp(&(&b.market, &b.sid)));
        Ok(securities)
    }
}
