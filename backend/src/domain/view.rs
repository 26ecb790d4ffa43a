//! Outcomes produced by the category use-cases.
//!
//! A use-case either asks the adapter to render a named view with a data
//! payload, or to redirect the client elsewhere. Failures travel separately
//! as [`crate::domain::Error`].

use serde::Serialize;

use super::{Category, CategoryId, Item};

/// Title of the list view.
pub const LIST_TITLE: &str = "Category List";
/// Title of the detail view.
pub const DETAIL_TITLE: &str = "Category Detail";
/// Title of the form when creating.
pub const CREATE_TITLE: &str = "Create Category";
/// Title of the form when renaming.
pub const UPDATE_TITLE: &str = "Update Category";
/// Title of the delete confirmation view.
pub const DELETE_TITLE: &str = "Delete Category";

/// A single validation failure reported back to the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Name of the offending form field.
    pub param: String,
    /// Message shown next to the field.
    pub msg: String,
    /// Sanitised value as submitted.
    pub value: String,
}

impl FieldError {
    /// Build a field error.
    pub fn new(
        param: impl Into<String>,
        msg: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            param: param.into(),
            msg: msg.into(),
            value: value.into(),
        }
    }
}

/// Values used to populate the category form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryFormValues {
    /// Present when editing an existing category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<CategoryId>,
    /// Sanitised name.
    pub name: String,
}

impl From<&Category> for CategoryFormValues {
    fn from(value: &Category) -> Self {
        Self {
            id: Some(*value.id()),
            name: value.name().to_string(),
        }
    }
}

/// Named view and its data payload.
///
/// Serialises with a `template` tag naming the view, for example
/// `{"template":"category_list","title":"Category List","categories":[]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "template", rename_all = "snake_case")]
pub enum View {
    /// All categories ordered by name.
    CategoryList {
        title: &'static str,
        categories: Vec<Category>,
    },
    /// One category and every item referencing it.
    CategoryDetail {
        title: &'static str,
        category: Category,
        items: Vec<Item>,
    },
    /// Create or update form.
    CategoryForm {
        title: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        category: Option<CategoryFormValues>,
        /// Every category; only sent when an update is re-rendered.
        #[serde(skip_serializing_if = "Option::is_none")]
        categories: Option<Vec<Category>>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        errors: Vec<FieldError>,
    },
    /// Delete confirmation showing blocking dependents.
    CategoryDelete {
        title: &'static str,
        category: Option<Category>,
        items: Vec<Item>,
    },
}

impl View {
    /// Empty create form.
    #[must_use]
    pub fn create_form() -> Self {
        Self::CategoryForm {
            title: CREATE_TITLE,
            category: None,
            categories: None,
            errors: Vec::new(),
        }
    }
}

/// Result of a category use-case that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryOutcome {
    /// Render the view.
    Render(View),
    /// Redirect to the given location.
    Redirect(String),
}
