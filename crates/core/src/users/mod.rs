//! Users module - owner identity for portfolios.
//!
//! User management (sign-up, sessions, deletion) belongs to the application
//! layer; the core only needs the owning identity to scope portfolio names.

mod users_model;
mod users_traits;

// Re-export the public interface
pub use users_model::{NewUser, User};
pub use users_traits::UserRepositoryTrait;
