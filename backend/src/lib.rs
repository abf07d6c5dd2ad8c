//! Backend library for the imnotupyet social coffee app.
//!
//! Layout follows ports and adapters: [`domain`] holds the validators and
//! use cases, [`inbound`] the HTTP adapter, and [`outbound`] the driven
//! adapters. [`middleware`] carries request tracing.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
