//! In-memory adapters guarded by `RwLock`.
//!
//! A poisoned lock surfaces as a `Query` port error instead of a panic.

mod follow_repository;
mod username_registry;

pub use follow_repository::InMemoryFollowRepository;
pub use username_registry::InMemoryUsernameRegistry;
