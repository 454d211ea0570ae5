//! Accounting module - time-indexed queries over the portfolio ledger.
//!
//! The engine computes cash balances as of an instant and per-security
//! positions with moving-average cost over a date interval. All queries are
//! synchronous, side-effect-free reads of the ledger snapshot visible at
//! call time.

mod accounting_engine;
mod accounting_model;

#[cfg(test)]
mod accounting_engine_tests;

// Re-export the public interface
pub use accounting_engine::{aggregate_positions, sum_cash, AccountingEngine};
pub use accounting_model::{is_quantity_significant, Position, SecurityPosition};
