//! Ledger module - append-only trade and cash events.
//!
//! Ledger entries are the atomic units of portfolio history: created through
//! portfolio-level operations, never mutated afterwards, and deleted only by
//! the owning portfolio's cascade.

mod ledger_constants;
mod ledger_model;
mod ledger_traits;


// Re-export the public interface
pub use ledger_constants::*;
pub use ledger_model::{CashEntry, NewCashEntry, NewTrade, Trade, TradeSide};
pub use ledger_traits::{CashEntryRepositoryTrait, TradeRepositoryTrait};
