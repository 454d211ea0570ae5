use chrono::{DateTime, Utc};
use log::{debug, warn};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use super::portfolios_model::{Classification, NewPortfolio, Portfolio, PortfolioUpdate};
use super::portfolios_traits::{PortfolioRepositoryTrait, PortfolioServiceTrait};
use crate::accounting::{AccountingEngine, SecurityPosition};
use crate::errors::{Error, FieldViolation, Result, ValidationError};
use crate::ledger::{
    CashEntry, CashEntryRepositoryTrait, NewCashEntry, NewTrade, Trade, TradeRepositoryTrait,
    TradeSide,
};
use crate::securities::SecurityRepositoryTrait;
use crate::users::UserRepositoryTrait;

/// The portfolio aggregate: lifecycle and validation of portfolios, the
/// append-only ledger operations, and the accounting queries.
pub struct PortfolioService {
    portfolio_repository: Arc<dyn PortfolioRepositoryTrait>,
    user_repository: Arc<dyn UserRepositoryTrait>,
    security_repository: Arc<dyn SecurityRepositoryTrait>,
    trade_repository: Arc<dyn TradeRepositoryTrait>,
    cash_repository: Arc<dyn CashEntryRepositoryTrait>,
    engine: AccountingEngine,
}

impl PortfolioService {
    /// Creates a new PortfolioService instance with injected dependencies.
    pub fn new(
        portfolio_repository: Arc<dyn PortfolioRepositoryTrait>,
        user_repository: Arc<dyn UserRepositoryTrait>,
        security_repository: Arc<dyn SecurityRepositoryTrait>,
        trade_repository: Arc<dyn TradeRepositoryTrait>,
        cash_repository: Arc<dyn CashEntryRepositoryTrait>,
    ) -> Self {
        let engine = AccountingEngine::new(trade_repository.clone(), cash_repository.clone());
        Self {
            portfolio_repository,
            user_repository,
            security_repository,
            trade_repository,
            cash_repository,
            engine,
        }
    }

    /// Appends the per-user name uniqueness violation, when applicable.
    /// Only checkable once the scoping fields themselves are present.
    fn check_name_taken(
        &self,
        user_id: &str,
        name: &str,
        own_id: Option<&str>,
        violations: &mut Vec<FieldViolation>,
    ) -> Result<()> {
        if user_id.is_empty() || name.is_empty() {
            return Ok(());
        }
        if let Some(existing) = self
            .portfolio_repository
            .find_by_user_and_name(user_id, name)?
        {
            if own_id != Some(existing.id.as_str()) {
                violations.push(FieldViolation::new(
                    "name",
                    format!("'{}' is already taken for this user", name),
                ));
            }
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn create_portfolio(&self, new_portfolio: NewPortfolio) -> Result<Portfolio> {
        let mut violations = new_portfolio.collect_violations();
        self.check_name_taken(
            new_portfolio.user_id.trim(),
            new_portfolio.trimmed_name(),
            None,
            &mut violations,
        )?;
        if !violations.is_empty() {
            return Err(ValidationError::new(violations).into());
        }

        // The pass above guarantees the tag parses
        let classification = Classification::from_str(new_portfolio.classification.trim())
            .map_err(Error::Unexpected)?;

        // The owner must exist before anything is persisted against it
        self.user_repository.get_by_id(new_portfolio.user_id.trim())?;

        let now = Utc::now();
        let portfolio = Portfolio {
            id: new_portfolio
                .id
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            user_id: new_portfolio.user_id.trim().to_string(),
            name: new_portfolio.trimmed_name().to_string(),
            classification,
            created_at: now,
            updated_at: now,
        };
        debug!(
            "Creating portfolio '{}' ({}) for user {}",
            portfolio.name,
            classification.as_str(),
            portfolio.user_id
        );
        self.portfolio_repository.create(portfolio).await
    }

    async fn update_portfolio(&self, update: PortfolioUpdate) -> Result<Portfolio> {
        let existing = self.portfolio_repository.get_by_id(update.id.trim())?;

        let mut violations = update.collect_violations();
        self.check_name_taken(
            &existing.user_id,
            update.trimmed_name(),
            Some(existing.id.as_str()),
            &mut violations,
        )?;
        if !violations.is_empty() {
            return Err(ValidationError::new(violations).into());
        }

        let classification =
            Classification::from_str(update.classification.trim()).map_err(Error::Unexpected)?;

        let portfolio = Portfolio {
            name: update.trimmed_name().to_string(),
            classification,
            updated_at: Utc::now(),
            ..existing
        };
        self.portfolio_repository.update(portfolio).await
    }

    async fn delete_portfolio(&self, portfolio_id: &str) -> Result<()> {
        // Cascade explicitly: the ledger never outlives its portfolio
        let portfolio = self.portfolio_repository.get_by_id(portfolio_id)?;
        let trades_deleted = self.trade_repository.delete_by_portfolio(portfolio_id).await?;
        let entries_deleted = self
            .cash_repository
            .delete_by_portfolio(portfolio_id)
            .await?;
        debug!(
            "Deleting portfolio '{}': cascaded {} trades, {} cash entries",
            portfolio.name, trades_deleted, entries_deleted
        );
        self.portfolio_repository.delete(portfolio_id).await?;
        Ok(())
    }

    fn get_portfolio(&self, portfolio_id: &str) -> Result<Portfolio> {
        self.portfolio_repository.get_by_id(portfolio_id)
    }

    fn list_portfolios_for_user(&self, user_id: &str) -> Result<Vec<Portfolio>> {
        self.portfolio_repository.list_by_user(user_id)
    }

    async fn record_trade(&self, new_trade: NewTrade) -> Result<Trade> {
        new_trade.validate()?;

        // Both ends of the reference must exist before the append
        self.portfolio_repository
            .get_by_id(new_trade.portfolio_id.trim())?;
        self.security_repository
            .get_by_id(new_trade.security_id.trim())?;

        let side = TradeSide::from_str(new_trade.side.trim()).map_err(Error::Unexpected)?;

        let trade = Trade {
            id: new_trade
                .id
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            portfolio_id: new_trade.portfolio_id.trim().to_string(),
            security_id: new_trade.security_id.trim().to_string(),
            side,
            quantity: new_trade.quantity,
            price: new_trade.price,
            trade_date: new_trade.trade_date,
            created_at: Utc::now(),
        };
        self.trade_repository.create(trade).await
    }

    async fn change_cash(
        &self,
        portfolio_id: &str,
        amount: Decimal,
        timestamp: DateTime<Utc>,
    ) -> Result<CashEntry> {
        let input = NewCashEntry {
            id: None,
            portfolio_id: portfolio_id.to_string(),
            amount,
            entry_date: timestamp,
        };
        input.validate()?;
        self.portfolio_repository.get_by_id(portfolio_id)?;

        let entry = CashEntry {
            id: Uuid::new_v4().to_string(),
            portfolio_id: portfolio_id.to_string(),
            amount,
            entry_date: timestamp,
            created_at: Utc::now(),
        };
        self.cash_repository.create(entry).await
    }

    fn cash_balance(&self, portfolio_id: &str, as_of: Option<DateTime<Utc>>) -> Result<Decimal> {
        self.engine.cash_balance(portfolio_id, as_of)
    }

    fn holdings(
        &self,
        portfolio_id: &str,
        from: Option<DateTime<Utc>>,
        till: Option<DateTime<Utc>>,
    ) -> Result<HashMap<String, SecurityPosition>> {
        let positions = self.engine.positions(portfolio_id, from, till)?;

        let mut holdings = HashMap::with_capacity(positions.len());
        for (security_id, position) in positions {
            match self.security_repository.get_by_id(&security_id) {
                Ok(security) => {
                    holdings.insert(
                        security_id,
                        SecurityPosition {
                            security,
                            quantity: position.quantity,
                            average_cost: position.average_cost,
                        },
                    );
                }
                Err(e) => {
                    // Trades reference registered securities, so this only
                    // happens when the registry lost a record out from under
                    // the ledger.
                    warn!(
                        "Security {} missing while resolving holdings of portfolio {}: {}",
                        security_id, portfolio_id, e
                    );
                }
            }
        }
        Ok(holdings)
    }
}
