//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the category driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CategoryCommand, CategoryQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read side of the category controller.
    pub categories: Arc<dyn CategoryQuery>,
    /// Write side of the category controller.
    pub categories_command: Arc<dyn CategoryCommand>,
}

impl HttpState {
    /// Bundle the category ports.
    pub fn new(categories: Arc<dyn CategoryQuery>, categories_command: Arc<dyn CategoryCommand>) -> Self {
        Self {
            categories,
            categories_command,
        }
    }

    /// Build state where one service implements both ports.
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: CategoryQuery + CategoryCommand + 'static,
    {
        Self::new(service.clone(), service)
    }
}
