//! Driving port for category mutations submitted from forms.

use async_trait::async_trait;

use crate::domain::{CategoryId, CategoryOutcome, CategorySubmission, Error};

/// Write-side category use-cases.
///
/// Validation failures and blocked deletes are not errors: they come back as
/// [`CategoryOutcome::Render`] so the form can be shown again.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryCommand: Send + Sync {
    /// Create a category, reusing an existing one with the same name.
    async fn create_category(
        &self,
        submission: CategorySubmission,
    ) -> Result<CategoryOutcome, Error>;

    /// Delete a category that has no items.
    async fn delete_category(&self, id: &CategoryId) -> Result<CategoryOutcome, Error>;

    /// Rename the category keyed by `id`.
    async fn update_category(
        &self,
        id: &CategoryId,
        submission: CategorySubmission,
    ) -> Result<CategoryOutcome, Error>;
}
