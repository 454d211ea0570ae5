//! Portfolios module - the owning aggregate over the ledger.

mod portfolios_constants;
mod portfolios_model;
mod portfolios_service;
mod portfolios_traits;

#[cfg(test)]
mod portfolios_model_tests;


// Re-export the public interface
pub use portfolios_constants::*;
pub use portfolios_model::{Classification, NewPortfolio, Portfolio, PortfolioUpdate};
pub use portfolios_service::PortfolioService;
pub use portfolios_traits::{PortfolioRepositoryTrait, PortfolioServiceTrait};
