//! Ledger repository traits - the Ledger Entry Store boundary.
//!
//! These traits define the contract for persisting and retrieving the
//! append-only ledger without any store-specific types.

use async_trait::async_trait;

use super::ledger_model::{CashEntry, Trade};
use crate::errors::Result;

/// Trait defining the contract for Trade persistence.
#[async_trait]
pub trait TradeRepositoryTrait: Send + Sync {
    /// Appends a fully built trade record.
    async fn create(&self, trade: Trade) -> Result<Trade>;

    /// Lists a portfolio's trades ordered by `trade_date` ascending.
    fn list_by_portfolio(&self, portfolio_id: &str) -> Result<Vec<Trade>>;

    /// Deletes all trades of a portfolio as part of the owner's cascade.
    ///
    /// Returns the number of deleted records.
    async fn delete_by_portfolio(&self, portfolio_id: &str) -> Result<usize>;
}

/// Trait defining the contract for CashEntry persistence.
#[async_trait]
pub trait CashEntryRepositoryTrait: Send + Sync {
    /// Appends a fully built cash entry.
    async fn create(&self, entry: CashEntry) -> Result<CashEntry>;

    /// Lists a portfolio's cash entries ordered by `entry_date` ascending.
    fn list_by_portfolio(&self, portfolio_id: &str) -> Result<Vec<CashEntry>>;

    /// Deletes all cash entries of a portfolio as part of the owner's cascade.
    ///
    /// Returns the number of deleted records.
    async fn delete_by_portfolio(&self, portfolio_id: &str) -> Result<usize>;
}
