//! Position report models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{COST_DISPLAY_PRECISION, QUANTITY_THRESHOLD};
use crate::securities::Security;

/// Quantities below the configured threshold are treated as zero.
pub fn is_quantity_significant(quantity: &Decimal) -> bool {
    let threshold =
        Decimal::from_str_radix(QUANTITY_THRESHOLD, 10).unwrap_or_else(|_| Decimal::new(1, 8));
    quantity.abs() >= threshold
}

/// A security's aggregated state over a queried interval.
///
/// `quantity` is the net signed quantity of the trades inside the interval;
/// `average_cost` is the moving-average unit cost accumulated from the full
/// trade history up to the interval's end. Both are kept unrounded;
/// [`Position::rounded_cost`] produces the display value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub security_id: String,
    pub quantity: Decimal,
    pub average_cost: Decimal,
}

impl Position {
    /// Average cost rounded for comparison/display.
    pub fn rounded_cost(&self) -> Decimal {
        self.average_cost.round_dp(COST_DISPLAY_PRECISION)
    }
}

/// A [`Position`] joined with its resolved [`Security`], as exposed by the
/// portfolio aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityPosition {
    pub security: Security,
    pub quantity: Decimal,
    pub average_cost: Decimal,
}

impl SecurityPosition {
    /// Average cost rounded for comparison/display.
    pub fn rounded_cost(&self) -> Decimal {
        self.average_cost.round_dp(COST_DISPLAY_PRECISION)
    }
}
