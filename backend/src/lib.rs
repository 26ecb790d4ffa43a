//! Category catalogue service.
//!
//! Layout follows a hexagonal split:
//! - [`domain`]: categories, items, views and the category service;
//! - [`inbound`]: actix handlers translating form posts into use-cases;
//! - [`outbound`]: Diesel and in-memory repository adapters;
//! - [`middleware`]: request tracing.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
