//! In-memory portfolio repository.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use stockfolio_core::errors::{Result, StorageError};
use stockfolio_core::portfolios::{Portfolio, PortfolioRepositoryTrait};

use crate::users::lock_poisoned;

/// `RwLock<HashMap>`-backed portfolio table.
#[derive(Default)]
pub struct InMemoryPortfolioRepository {
    rows: RwLock<HashMap<String, Portfolio>>,
}

impl InMemoryPortfolioRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PortfolioRepositoryTrait for InMemoryPortfolioRepository {
    async fn create(&self, portfolio: Portfolio) -> Result<Portfolio> {
        let mut rows = self.rows.write().map_err(lock_poisoned)?;
        if rows.contains_key(&portfolio.id) {
            return Err(StorageError::UniqueViolation(portfolio.id).into());
        }
        rows.insert(portfolio.id.clone(), portfolio.clone());
        Ok(portfolio)
    }

    async fn update(&self, portfolio: Portfolio) -> Result<Portfolio> {
        let mut rows = self.rows.write().map_err(lock_poisoned)?;
        if !rows.contains_key(&portfolio.id) {
            return Err(StorageError::NotFound(format!("portfolio {}", portfolio.id)).into());
        }
        rows.insert(portfolio.id.clone(), portfolio.clone());
        Ok(portfolio)
    }

    async fn delete(&self, portfolio_id: &str) -> Result<usize> {
        Ok(self
            .rows
            .write()
            .map_err(lock_poisoned)?
            .remove(portfolio_id)
            .map_or(0, |_| 1))
    }

    fn get_by_id(&self, portfolio_id: &str) -> Result<Portfolio> {
        self.rows
            .read()
            .map_err(lock_poisoned)?
            .get(portfolio_id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(format!("portfolio {}", portfolio_id)).into())
    }

    fn find_by_user_and_name(&self, user_id: &str, name: &str) -> Result<Option<Portfolio>> {
        let wanted = name.trim();
        Ok(self
            .rows
            .read()
            .map_err(lock_poisoned)?
            .values()
            .find(|p| p.user_id == user_id && p.name.eq_ignore_ascii_case(wanted))
            .cloned())
    }

    fn list_by_user(&self, user_id: &str) -> Result<Vec<Portfolio>> {
        let mut portfolios: Vec<Portfolio> = self
            .rows
            .read()
            .map_err(lock_poisoned)?
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        portfolios.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(portfolios)
    }
}
