//! In-memory ledger entry store: trades and cash entries.

use std::sync::RwLock;

use async_trait::async_trait;

use stockfolio_core::errors::Result;
use stockfolio_core::ledger::{
    CashEntry, CashEntryRepositoryTrait, Trade, TradeRepositoryTrait,
};

use crate::users::lock_poisoned;

/// Append-only trade log.
#[derive(Default)]
pub struct InMemoryTradeRepository {
    rows: RwLock<Vec<Trade>>,
}

impl InMemoryTradeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TradeRepositoryTrait for InMemoryTradeRepository {
    async fn create(&self, trade: Trade) -> Result<Trade> {
        self.rows.write().map_err(lock_poisoned)?.push(trade.clone());
        Ok(trade)
    }

    fn list_by_portfolio(&self, portfolio_id: &str) -> Result<Vec<Trade>> {
        let mut trades: Vec<Trade> = self
            .rows
            .read()
            .map_err(lock_poisoned)?
            .iter()
            .filter(|t| t.portfolio_id == portfolio_id)
            .cloned()
            .collect();
        trades.sort_by_key(|t| t.trade_date);
        Ok(trades)
    }

    async fn delete_by_portfolio(&self, portfolio_id: &str) -> Result<usize> {
        let mut rows = self.rows.write().map_err(lock_poisoned)?;
        let before = rows.len();
        rows.retain(|t| t.portfolio_id != portfolio_id);
        Ok(before - rows.len())
    }
}

/// Append-only cash movement log.
#[derive(Default)]
pub struct InMemoryCashEntryRepository {
    rows: RwLock<Vec<CashEntry>>,
}

impl InMemoryCashEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CashEntryRepositoryTrait for InMemoryCashEntryRepository {
    async fn create(&self, entry: CashEntry) -> Result<CashEntry> {
        self.rows.write().map_err(lock_poisoned)?.push(entry.clone());
        Ok(entry)
    }

    fn list_by_portfolio(&self, portfolio_id: &str) -> Result<Vec<CashEntry>> {
        let mut entries: Vec<CashEntry> = self
            .rows
            .read()
            .map_err(lock_poisoned)?
            .iter()
            .filter(|e| e.portfolio_id == portfolio_id)
            .cloned()
            .collect();
        entries.sort_by_key(|e| e.entry_date);
        Ok(entries)
    }

    async fn delete_by_portfolio(&self, portfolio_id: &str) -> Result<usize> {
        let mut rows = self.rows.write().map_err(lock_poisoned)?;
        let before = rows.len();
        rows.retain(|e| e.portfolio_id != portfolio_id);
        Ok(before - rows.len())
    }
}
