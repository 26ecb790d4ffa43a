//! Category domain service.
//!
//! Implements the category driving ports on top of the category and item
//! repositories. Each POST flow follows the same shape: validate the
//! submission, re-render on failure, otherwise persist and redirect.
//!
//! The uniqueness check before create and the dependent check before delete
//! are separate reads followed by a write; concurrent requests can interleave
//! between them.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    CategoryCommand, CategoryQuery, CategoryRepository, CategoryRepositoryError, ItemRepository,
    ItemRepositoryError,
};
use crate::domain::view::{CREATE_TITLE, DELETE_TITLE, DETAIL_TITLE, LIST_TITLE, UPDATE_TITLE};
use crate::domain::{
    CATEGORY_LIST_PATH, Category, CategoryFormValues, CategoryId, CategoryOutcome,
    CategorySubmission, Error, FieldError, Item, View,
};

/// Message shown when the create form is submitted without a name.
pub const CREATE_NAME_REQUIRED: &str = "Category name required";
/// Message shown when the update form is submitted without a name.
pub const UPDATE_NAME_REQUIRED: &str = "Category name must be specified";

fn map_category_error(error: CategoryRepositoryError) -> Error {
    match error {
        CategoryRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("category repository unavailable: {message}"))
        }
        CategoryRepositoryError::Query { message } => {
            Error::internal(format!("category repository error: {message}"))
        }
    }
}

fn map_item_error(error: ItemRepositoryError) -> Error {
    match error {
        ItemRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("item repository unavailable: {message}"))
        }
        ItemRepositoryError::Query { message } => {
            Error::internal(format!("item repository error: {message}"))
        }
    }
}

fn category_not_found(id: &CategoryId) -> Error {
    Error::not_found(format!("category {id} not found"))
}

fn name_error(message: &str, submission: &CategorySubmission) -> Vec<FieldError> {
    vec![FieldError::new("name", message, submission.name())]
}

/// Category service implementing [`CategoryQuery`] and [`CategoryCommand`].
#[derive(Clone)]
pub struct CategoryService<C, I> {
    categories: Arc<C>,
    items: Arc<I>,
}

impl<C, I> CategoryService<C, I> {
    /// Create a service over the given repositories.
    pub fn new(categories: Arc<C>, items: Arc<I>) -> Self {
        Self { categories, items }
    }
}

impl<C, I> CategoryService<C, I>
where
    C: CategoryRepository,
    I: ItemRepository,
{
    /// Fetch a category and its items concurrently.
    ///
    /// Both reads must succeed; the first failure is returned and the other
    /// result is discarded.
    async fn load_with_items(&self, id: &CategoryId) -> Result<(Option<Category>, Vec<Item>), Error> {
        tokio::try_join!(
            async { self.categories.find_by_id(id).await.map_err(map_category_error) },
            async { self.items.find_by_category(id).await.map_err(map_item_error) },
        )
    }
}

#[async_trait]
impl<C, I> CategoryQuery for CategoryService<C, I>
where
    C: CategoryRepository,
    I: ItemRepository,
{
    async fn list_categories(&self) -> Result<CategoryOutcome, Error> {
        let categories = self
            .categories
            .list_sorted_by_name()
            .await
            .map_err(map_category_error)?;
        Ok(CategoryOutcome::Render(View::CategoryList {
            title: LIST_TITLE,
            categories,
        }))
    }

    async fn category_detail(&self, id: &CategoryId) -> Result<CategoryOutcome, Error> {
        let (category, items) = self.load_with_items(id).await?;
        let category = category.ok_or_else(|| category_not_found(id))?;
        Ok(CategoryOutcome::Render(View::CategoryDetail {
            title: DETAIL_TITLE,
            category,
            items,
        }))
    }

    async fn delete_confirmation(&self, id: &CategoryId) -> Result<CategoryOutcome, Error> {
        let (category, items) = self.load_with_items(id).await?;
        let Some(category) = category else {
            debug!(category_id = %id, "delete requested for absent category");
            return Ok(CategoryOutcome::Redirect(CATEGORY_LIST_PATH.to_owned()));
        };
        Ok(CategoryOutcome::Render(View::CategoryDelete {
            title: DELETE_TITLE,
            category: Some(category),
            items,
        }))
    }

    async fn edit_form(&self, id: &CategoryId) -> Result<CategoryOutcome, Error> {
        let category = self
            .categories
            .find_by_id(id)
            .await
            .map_err(map_category_error)?
            .ok_or_else(|| category_not_found(id))?;
        Ok(CategoryOutcome::Render(View::CategoryForm {
            title: UPDATE_TITLE,
            category: Some(CategoryFormValues::from(&category)),
            categories: None,
            errors: Vec::new(),
        }))
    }
}

#[async_trait]
impl<C, I> CategoryCommand for CategoryService<C, I>
where
    C: CategoryRepository,
    I: ItemRepository,
{
    async fn create_category(
        &self,
        submission: CategorySubmission,
    ) -> Result<CategoryOutcome, Error> {
        let Ok(name) = submission.validate() else {
            debug!("category create rejected: empty name");
            return Ok(CategoryOutcome::Render(View::CategoryForm {
                title: CREATE_TITLE,
                category: Some(CategoryFormValues {
                    id: None,
                    name: submission.name().to_owned(),
                }),
                categories: None,
                errors: name_error(CREATE_NAME_REQUIRED, &submission),
            }));
        };

        if let Some(existing) = self
            .categories
            .find_by_name(&name)
            .await
            .map_err(map_category_error)?
        {
            debug!(category_id = %existing.id(), name = %name, "category already exists");
            return Ok(CategoryOutcome::Redirect(existing.url()));
        }

        let category = Category::new(CategoryId::random(), name);
        self.categories
            .save(&category)
            .await
            .map_err(map_category_error)?;
        info!(category_id = %category.id(), name = %category.name(), "category created");
        Ok(CategoryOutcome::Redirect(category.url()))
    }

    async fn delete_category(&self, id: &CategoryId) -> Result<CategoryOutcome, Error> {
        let (category, items) = self.load_with_items(id).await?;
        if !items.is_empty() {
            debug!(
                category_id = %id,
                item_count = items.len(),
                "category delete blocked by dependent items"
            );
            return Ok(CategoryOutcome::Render(View::CategoryDelete {
                title: DELETE_TITLE,
                category,
                items,
            }));
        }

        self.categories
            .delete_by_id(id)
            .await
            .map_err(map_category_error)?;
        info!(category_id = %id, "category deleted");
        Ok(CategoryOutcome::Redirect(CATEGORY_LIST_PATH.to_owned()))
    }

    async fn update_category(
        &self,
        id: &CategoryId,
        submission: CategorySubmission,
    ) -> Result<CategoryOutcome, Error> {
        let Ok(name) = submission.validate() else {
            debug!(category_id = %id, "category update rejected: empty name");
            let categories = self
                .categories
                .list_sorted_by_name()
                .await
                .map_err(map_category_error)?;
            return Ok(CategoryOutcome::Render(View::CategoryForm {
                title: UPDATE_TITLE,
                category: Some(CategoryFormValues {
                    id: Some(*id),
                    name: submission.name().to_owned(),
                }),
                categories: Some(categories),
                errors: name_error(UPDATE_NAME_REQUIRED, &submission),
            }));
        };

        let candidate = Category::new(*id, name);
        let updated = self
            .categories
            .update_by_id(&candidate)
            .await
            .map_err(map_category_error)?
            .ok_or_else(|| category_not_found(id))?;
        info!(category_id = %id, name = %updated.name(), "category updated");
        Ok(CategoryOutcome::Redirect(updated.url()))
    }
}

#[cfg(test)]
#[path = "category_service_tests.rs"]
mod tests;
