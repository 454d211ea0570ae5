use chrono::Utc;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use super::securities_model::{NewSecurity, Security, SecurityKind};
use super::securities_traits::{SecurityRepositoryTrait, SecurityServiceTrait};
use crate::errors::{Result, ValidationError};

/// Service for managing the security registry.
pub struct SecurityService {
    repository: Arc<dyn SecurityRepositoryTrait>,
}

impl SecurityService {
    /// Creates a new SecurityService instance.
    pub fn new(repository: Arc<dyn SecurityRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl SecurityServiceTrait for SecurityService {
    async fn create_security(&self, new_security: NewSecurity) -> Result<Security> {
        new_security.validate()?;

        let kind = SecurityKind::from_db_str(new_security.kind.trim()).ok_or_else(|| {
            ValidationError::single(
                "kind",
                format!("'{}' is not a known security kind", new_security.kind),
            )
        })?;

        let now = Utc::now();
        let security = Security {
            id: new_security
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            sid: new_security.sid.trim().to_string(),
            market: new_security.market.trim().to_string(),
            name: new_security.name.trim().to_string(),
            nav: new_security.nav,
            capacity: new_security.capacity,
            kind,
            created_at: now,
            updated_at: now,
        };
        debug!(
            "Registering security {}:{} ({})",
            security.market,
            security.sid,
            kind.as_db_str()
        );
        self.repository.create(security).await
    }

    fn get_security(&self, security_id: &str) -> Result<Security> {
        self.repository.get_by_id(security_id)
    }

    fn find_security(&self, sid: &str, market: &str) -> Result<Option<Security>> {
        self.repository.find_by_sid_and_market(sid, market)
    }

    fn list_securities(&self) -> Result<Vec<Security>> {
        self.repository.list()
    }
}
