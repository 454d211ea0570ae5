//! Ledger domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{FieldViolation, ValidationError};
use crate::ledger::ledger_constants::{TRADE_SIDE_BUY, TRADE_SIDE_SELL};

/// Side of a security trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Buy => TRADE_SIDE_BUY,
            TradeSide::Sell => TRADE_SIDE_SELL,
        }
    }
}

impl FromStr for TradeSide {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            TRADE_SIDE_BUY => Ok(TradeSide::Buy),
            TRADE_SIDE_SELL => Ok(TradeSide::Sell),
            other => Err(format!("Unknown trade side: {}", other)),
        }
    }
}

/// An immutable record of a buy or sell of a security at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    pub portfolio_id: String,
    pub security_id: String,
    pub side: TradeSide,
    pub quantity: Decimal,
    pub price: Decimal,
    pub trade_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Trade {
    /// Net quantity effect on the position: positive for buys, negative
    /// for sells.
    pub fn signed_quantity(&self) -> Decimal {
        match self.side {
            TradeSide::Buy => self.quantity,
            TradeSide::Sell => -self.quantity,
        }
    }
}

/// An immutable record of a cash movement: a signed delta against the
/// portfolio's cash balance. Deposits are positive, withdrawals negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashEntry {
    pub id: String,
    pub portfolio_id: String,
    pub amount: Decimal,
    pub entry_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Input model for appending a trade to the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrade {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub portfolio_id: String,
    pub security_id: String,
    /// Side tag, "BUY" or "SELL"
    pub side: String,
    pub quantity: Decimal,
    pub price: Decimal,
    pub trade_date: DateTime<Utc>,
}

impl NewTrade {
    /// Validates the new trade data, reporting every violated field.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let mut violations = Vec::new();
        if self.portfolio_id.trim().is_empty() {
            violations.push(FieldViolation::new("portfolioId", "cannot be blank"));
        }
        if self.security_id.trim().is_empty() {
            violations.push(FieldViolation::new("securityId", "cannot be blank"));
        }
        if TradeSide::from_str(self.side.trim()).is_err() {
            violations.push(FieldViolation::new(
                "side",
                format!("'{}' is not a trade side", self.side),
            ));
        }
        if !self.quantity.is_sign_positive() || self.quantity.is_zero() {
            violations.push(FieldViolation::new("quantity", "must be positive"));
        }
        if self.price.is_sign_negative() {
            violations.push(FieldViolation::new("price", "cannot be negative"));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(violations))
        }
    }
}

/// Input model for appending a cash movement to the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCashEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub portfolio_id: String,
    pub amount: Decimal,
    pub entry_date: DateTime<Utc>,
}

impl NewCashEntry {
    /// Validates the new cash entry data, reporting every violated field.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let mut violations = Vec::new();
        if self.portfolio_id.trim().is_empty() {
            violations.push(FieldViolation::new("portfolioId", "cannot be blank"));
        }
        if self.amount.is_zero() {
            violations.push(FieldViolation::new("amount", "cannot be zero"));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(violations))
        }
    }
}
