//! Securities module - domain models, services, and traits.

mod securities_model;
mod securities_service;
mod securities_traits;


// Re-export the public interface
pub use securities_model::{NewSecurity, Security, SecurityKind};
pub use securities_service::SecurityService;
pub use securities_traits::{SecurityRepositoryTrait, SecurityServiceTrait};
