//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod follows;
pub mod health;
pub mod schemas;
pub mod state;
pub mod usernames;
pub mod validation;

pub use error::ApiResult;
