//! Portfolio repository and service traits.
//!
//! These traits define the contract for portfolio operations without any
//! store-specific types, allowing for different storage implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;

use super::portfolios_model::{NewPortfolio, Portfolio, PortfolioUpdate};
use crate::accounting::SecurityPosition;
use crate::errors::Result;
use crate::ledger::{CashEntry, NewTrade, Trade};

/// Trait defining the contract for Portfolio repository operations.
#[async_trait]
pub trait PortfolioRepositoryTrait: Send + Sync {
    /// Persists a fully built portfolio.
    async fn create(&self, portfolio: Portfolio) -> Result<Portfolio>;

    /// Replaces a stored portfolio.
    async fn update(&self, portfolio: Portfolio) -> Result<Portfolio>;

    /// Deletes a portfolio row. Ledger cascade is the service's concern.
    ///
    /// Returns the number of deleted records.
    async fn delete(&self, portfolio_id: &str) -> Result<usize>;

    /// Retrieves a portfolio by its id.
    fn get_by_id(&self, portfolio_id: &str) -> Result<Portfolio>;

    /// Finds a user's portfolio by name.
    ///
    /// The comparison ignores surrounding whitespace and ASCII case, matching
    /// the uniqueness rule the service enforces.
    fn find_by_user_and_name(&self, user_id: &str, name: &str) -> Result<Option<Portfolio>>;

    /// Lists all portfolios owned by a user.
    fn list_by_user(&self, user_id: &str) -> Result<Vec<Portfolio>>;
}

/// Trait defining the contract for the portfolio aggregate's operations:
/// lifecycle, ledger appends, and the accounting queries.
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    /// Creates a new portfolio after the full validation pass.
    async fn create_portfolio(&self, new_portfolio: NewPortfolio) -> Result<Portfolio>;

    /// Updates an existing portfolio after the full validation pass.
    async fn update_portfolio(&self, update: PortfolioUpdate) -> Result<Portfolio>;

    /// Deletes a portfolio and cascades to its trades and cash entries.
    async fn delete_portfolio(&self, portfolio_id: &str) -> Result<()>;

    /// Retrieves a portfolio by id.
    fn get_portfolio(&self, portfolio_id: &str) -> Result<Portfolio>;

    /// Lists a user's portfolios.
    fn list_portfolios_for_user(&self, user_id: &str) -> Result<Vec<Portfolio>>;

    /// Appends a trade to the portfolio's ledger.
    async fn record_trade(&self, new_trade: NewTrade) -> Result<Trade>;

    /// Appends a cash movement (deposit or withdrawal) to the ledger.
    async fn change_cash(
        &self,
        portfolio_id: &str,
        amount: Decimal,
        timestamp: DateTime<Utc>,
    ) -> Result<CashEntry>;

    /// Cash balance as of `as_of`, or the running total when unbounded.
    fn cash_balance(&self, portfolio_id: &str, as_of: Option<DateTime<Utc>>) -> Result<Decimal>;

    /// Per-security positions over `[from, till]`, keyed by security id,
    /// with each security resolved from the registry.
    fn holdings(
        &self,
        portfolio_id: &str,
        from: Option<DateTime<Utc>>,
        till: Option<DateTime<Utc>>,
    ) -> Result<HashMap<String, SecurityPosition>>;
}
