//! Driven port for category persistence.
//!
//! Name uniqueness is not enforced here; callers check with
//! [`CategoryRepository::find_by_name`] before saving.

use async_trait::async_trait;

use crate::domain::{Category, CategoryId, CategoryName};

use super::define_port_error;

define_port_error! {
    /// Errors raised by category repository adapters.
    pub enum CategoryRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "category repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "category repository query failed: {message}",
    }
}

/// Port for reading and writing categories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Every category, ordered by name ascending.
    async fn list_sorted_by_name(&self) -> Result<Vec<Category>, CategoryRepositoryError>;

    /// Fetch a category by identifier.
    async fn find_by_id(&self, id: &CategoryId)
    -> Result<Option<Category>, CategoryRepositoryError>;

    /// Fetch the first category whose name matches exactly.
    async fn find_by_name(
        &self,
        name: &CategoryName,
    ) -> Result<Option<Category>, CategoryRepositoryError>;

    /// Insert a new category.
    async fn save(&self, category: &Category) -> Result<(), CategoryRepositoryError>;

    /// Replace the stored record keyed by `category.id()`.
    ///
    /// Returns the stored record after the update, or `None` when no record
    /// has that identifier.
    async fn update_by_id(
        &self,
        category: &Category,
    ) -> Result<Option<Category>, CategoryRepositoryError>;

    /// Remove a category. Removing an absent identifier is not an error.
    async fn delete_by_id(&self, id: &CategoryId) -> Result<(), CategoryRepositoryError>;
}
