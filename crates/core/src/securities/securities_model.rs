//! Security domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{FieldViolation, ValidationError};

/// Security behavior classification.
///
/// A closed variant set resolved from the type tag stored alongside each
/// security record. `Cash` is the degenerate kind representing currency
/// itself; it is never the subject of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SecurityKind {
    #[default]
    Stock, // Exchange-listed shares
    Cash, // Currency held as an instrument
}

impl SecurityKind {
    /// Returns the stored string representation (SCREAMING_SNAKE_CASE).
    pub const fn as_db_str(&self) -> &'static str {
        match self {
            SecurityKind::Stock => "STOCK",
            SecurityKind::Cash => "CASH",
        }
    }

    /// Parses a security kind from its stored string.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "STOCK" => Some(SecurityKind::Stock),
            "CASH" => Some(SecurityKind::Cash),
            _ => None,
        }
    }

    pub fn is_cash(&self) -> bool {
        matches!(self, SecurityKind::Cash)
    }
}

/// Domain model representing a tradable security.
///
/// Identity at the boundary is `(sid, market)` - the ticker and the exchange
/// code it is listed on. `id` is the opaque storage key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Security {
    pub id: String,
    /// Symbol/ticker, e.g. "600036"
    pub sid: String,
    /// Exchange code, e.g. "sh", "sz", "hk"
    pub market: String,
    pub name: String,
    /// Net asset value, where the instrument publishes one
    pub nav: Option<Decimal>,
    pub capacity: Option<i64>,
    pub kind: SecurityKind,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for registering a new security.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSecurity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub sid: String,
    pub market: String,
    pub name: String,
    pub nav: Option<Decimal>,
    pub capacity: Option<i64>,
    /// Kind tag, one of the strings accepted by [`SecurityKind::from_db_str`]
    pub kind: String,
}

impl NewSecurity {
    /// Validates the new security data, reporting every violated field.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let mut violations = Vec::new();
        if self.sid.trim().is_empty() {
            violations.push(FieldViolation::new("sid", "cannot be blank"));
        }
        if self.market.trim().is_empty() {
            violations.push(FieldViolation::new("market", "cannot be blank"));
        }
        if self.name.trim().is_empty() {
            violations.push(FieldViolation::new("name", "cannot be blank"));
        }
        if SecurityKind::from_db_str(self.kind.trim()).is_none() {
            violations.push(FieldViolation::new(
                "kind",
                format!("'{}' is not a known security kind", self.kind),
            ));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(violations))
        }
    }
}
