//! HTTP inbound adapter exposing the category endpoints and health probes.

pub mod categories;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;

pub use error::ApiResult;
