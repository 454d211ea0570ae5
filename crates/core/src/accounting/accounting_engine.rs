//! The accounting engine: cash balance and position queries over the ledger.

use chrono::{DateTime, Utc};
use log::{debug, warn};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

use super::accounting_model::{is_quantity_significant, Position};
use crate::errors::Result;
use crate::ledger::{CashEntry, CashEntryRepositoryTrait, Trade, TradeRepositoryTrait, TradeSide};

/// Moving-average cost state for one security, replayed over its trades in
/// timestamp order. Buys re-average the unit cost across the total held
/// quantity; sells remove basis at the current average, leaving it unchanged.
#[derive(Debug, Default)]
struct CostAccumulator {
    quantity: Decimal,
    total_cost_basis: Decimal,
    average_cost: Decimal,
}

impl CostAccumulator {
    fn apply(&mut self, trade: &Trade) {
        match trade.side {
            TradeSide::Buy => {
                self.quantity += trade.quantity;
                self.total_cost_basis += trade.quantity * trade.price;
            }
            TradeSide::Sell => {
                if trade.quantity > self.quantity {
                    warn!(
                        "Trade {} sells {} of security {} with only {} held. Clamping basis at zero.",
                        trade.id, trade.quantity, trade.security_id, self.quantity
                    );
                }
                self.quantity -= trade.quantity;
                self.total_cost_basis -= trade.quantity * self.average_cost;
            }
        }
        self.recalculate_average();
    }

    fn recalculate_average(&mut self) {
        if self.quantity.is_sign_positive() && is_quantity_significant(&self.quantity) {
            self.average_cost = self.total_cost_basis / self.quantity;
        } else {
            // Closed out or oversold: the basis no longer describes anything held
            self.total_cost_basis = Decimal::ZERO;
            self.average_cost = Decimal::ZERO;
        }
    }
}

/// Sums the cash-entry deltas dated at or before `as_of`.
///
/// With no bound, the running total of every entry is returned. An empty
/// ledger sums to zero.
pub fn sum_cash(entries: &[CashEntry], as_of: Option<DateTime<Utc>>) -> Decimal {
    entries
        .iter()
        .filter(|entry| as_of.map_or(true, |bound| entry.entry_date <= bound))
        .map(|entry| entry.amount)
        .sum()
}

/// Aggregates per-security positions for the closed interval `[from, till]`.
///
/// Missing bounds are unbounded. Identical bounds describe a zero-width
/// interval and select nothing. A security appears in the result exactly when
/// its net signed quantity inside the interval is nonzero; its average cost
/// is replayed over the full trade history up to `till`, independent of
/// `from`.
pub fn aggregate_positions(
    trades: &[Trade],
    from: Option<DateTime<Utc>>,
    till: Option<DateTime<Utc>>,
) -> HashMap<String, Position> {
    if let (Some(start), Some(end)) = (from, till) {
        if start == end {
            return HashMap::new();
        }
    }

    // Replay order matters for the moving average; the store's ordering is
    // not trusted here.
    let mut history: Vec<&Trade> = trades
        .iter()
        .filter(|trade| till.map_or(true, |bound| trade.trade_date <= bound))
        .collect();
    history.sort_by_key(|trade| trade.trade_date);

    let mut accumulators: HashMap<String, CostAccumulator> = HashMap::new();
    let mut windowed_quantities: HashMap<String, Decimal> = HashMap::new();

    for trade in history {
        accumulators
            .entry(trade.security_id.clone())
            .or_default()
            .apply(trade);

        let in_window = from.map_or(true, |bound| trade.trade_date >= bound);
        if in_window {
            *windowed_quantities
                .entry(trade.security_id.clone())
                .or_insert(Decimal::ZERO) += trade.signed_quantity();
        }
    }

    windowed_quantities
        .into_iter()
        .filter(|(_, quantity)| is_quantity_significant(quantity))
        .map(|(security_id, quantity)| {
            let average_cost = accumulators
                .get(&security_id)
                .map(|acc| acc.average_cost)
                .unwrap_or(Decimal::ZERO);
            (
                security_id.clone(),
                Position {
                    security_id,
                    quantity,
                    average_cost,
                },
            )
        })
        .collect()
}

/// Computes the accounting queries against the ledger entry store.
#[derive(Clone)]
pub struct AccountingEngine {
    trade_repository: Arc<dyn TradeRepositoryTrait>,
    cash_repository: Arc<dyn CashEntryRepositoryTrait>,
}

impl AccountingEngine {
    pub fn new(
        trade_repository: Arc<dyn TradeRepositoryTrait>,
        cash_repository: Arc<dyn CashEntryRepositoryTrait>,
    ) -> Self {
        Self {
            trade_repository,
            cash_repository,
        }
    }

    /// Cash balance of a portfolio as of `as_of`, or the running total when
    /// no bound is given. A portfolio with no cash entries balances to zero.
    pub fn cash_balance(
        &self,
        portfolio_id: &str,
        as_of: Option<DateTime<Utc>>,
    ) -> Result<Decimal> {
        let entries = self.cash_repository.list_by_portfolio(portfolio_id)?;
        Ok(sum_cash(&entries, as_of))
    }

    /// Per-security positions of a portfolio over `[from, till]`, keyed by
    /// security id.
    pub fn positions(
        &self,
        portfolio_id: &str,
        from: Option<DateTime<Utc>>,
        till: Option<DateTime<Utc>>,
    ) -> Result<HashMap<String, Position>> {
        let trades = self.trade_repository.list_by_portfolio(portfolio_id)?;
        debug!(
            "Aggregating positions for portfolio {} over {} trades",
            portfolio_id,
            trades.len()
        );
        Ok(aggregate_positions(&trades, from, till))
    }
}
