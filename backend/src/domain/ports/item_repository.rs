//! Driven port for reading items by their category reference.

use async_trait::async_trait;

use crate::domain::{CategoryId, Item};

use super::define_port_error;

define_port_error! {
    /// Errors raised by item repository adapters.
    pub enum ItemRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "item repository connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } => "item repository query failed: {message}",
    }
}

/// Port for reading the items that reference a category.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Every item whose category reference equals `category`.
    async fn find_by_category(&self, category: &CategoryId)
    -> Result<Vec<Item>, ItemRepositoryError>;
}
