//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local implementations of the follow repository and
//!   username registry, used by the server and by integration tests.
//!
//! Adapters are thin translators that convert between domain types and
//! storage representations. They contain no business logic.

pub mod memory;
