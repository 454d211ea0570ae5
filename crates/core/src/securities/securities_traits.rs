//! Security repository and service traits.
//!
//! These traits define the contract for security operations without any
//! store-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::securities_model::{NewSecurity, Security};
use crate::errors::Result;

/// Trait defining the contract for Security repository operations.
#[async_trait]
pub trait SecurityRepositoryTrait: Send + Sync {
    /// Persists a fully built security record.
    async fn create(&self, security: Security) -> Result<Security>;

    /// Retrieves a security by its storage id.
    fn get_by_id(&self, security_id: &str) -> Result<Security>;

    /// Looks a security up by its boundary identity `(sid, market)`.
    fn find_by_sid_and_market(&self, sid: &str, market: &str) -> Result<Option<Security>>;

    /// Lists all registered securities.
    fn list(&self) -> Result<Vec<Security>>;
}

/// Trait defining the contract for Security service operations.
#[async_trait]
pub trait SecurityServiceTrait: Send + Sync {
    /// Registers a new security after validation.
    async fn create_security(&self, new_security: NewSecurity) -> Result<Security>;

    /// Retrieves a security by its storage id.
    fn get_security(&self, security_id: &str) -> Result<Security>;

    /// Looks a security up by `(sid, market)`.
    fn find_security(&self, sid: &str, market: &str) -> Result<Option<Security>>;

    /// Lists all registered securities.
    fn list_securities(&self) -> Result<Vec<Security>>;
}
