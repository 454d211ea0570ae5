//! In-memory storage implementation for Stockfolio.
//!
//! This crate implements the repository traits defined in `stockfolio-core`
//! with plain `RwLock<HashMap>` tables. It is the reference Ledger Entry
//! Store: the application layer swaps in a database-backed crate implementing
//! the same traits without the core noticing.
//!
//! # Architecture
//!
//! ```text
//!          core (domain, traits)
//!                   │
//!                   ▼
//!        storage-memory (this crate)
//! ```
//!
//! List operations return copies ordered by event timestamp, matching the
//! trait contracts the accounting engine relies on.

pub mod ledger;
pub mod portfolios;
pub mod securities;
pub mod users;

// Re-export repository implementations
pub use ledger::{InMemoryCashEntryRepository, InMemoryTradeRepository};
pub use portfolios::InMemoryPortfolioRepository;
pub use securities::InMemorySecurityRepository;
pub use users::InMemoryUserRepository;

// Re-export from stockfolio-core for convenience
pub use stockfolio_core::errors::{Error, Result, StorageError};
