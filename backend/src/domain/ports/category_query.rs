//! Driving port for category reads.
//!
//! HTTP handlers call this port to obtain a rendered outcome without knowing
//! how categories and items are stored.

use async_trait::async_trait;

use crate::domain::{CategoryId, CategoryOutcome, Error};

/// Read-side category use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryQuery: Send + Sync {
    /// All categories ordered by name.
    async fn list_categories(&self) -> Result<CategoryOutcome, Error>;

    /// One category with its items; [`crate::domain::ErrorCode::NotFound`] when absent.
    async fn category_detail(&self, id: &CategoryId) -> Result<CategoryOutcome, Error>;

    /// Delete confirmation; redirects to the list when the category is absent.
    async fn delete_confirmation(&self, id: &CategoryId) -> Result<CategoryOutcome, Error>;

    /// Edit form pre-populated with current values.
    async fn edit_form(&self, id: &CategoryId) -> Result<CategoryOutcome, Error>;
}
