//! Category aggregate and the form input that creates or renames it.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Location of the category list view.
pub const CATEGORY_LIST_PATH: &str = "/categories";

/// Validation errors raised by category constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    InvalidId,
    EmptyName,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "category id must be a valid UUID"),
            Self::EmptyName => write!(f, "category name must not be empty"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

/// Stable category identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(Uuid);

impl CategoryId {
    /// Parse an identifier from its textual form.
    ///
    /// # Examples
    /// ```
    /// use catalog::domain::CategoryId;
    ///
    /// assert!(CategoryId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").is_ok());
    /// assert!(CategoryId::new("fiction").is_err());
    /// ```
    pub fn new(id: impl AsRef<str>) -> Result<Self, CategoryValidationError> {
        let raw = id.as_ref();
        if raw.trim() != raw {
            return Err(CategoryValidationError::InvalidId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| CategoryValidationError::InvalidId)
    }

    /// Generate a new random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category name in its stored, already-sanitised form.
///
/// ## Invariants
/// - Non-empty once trimmed of whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct CategoryName(String);

impl CategoryName {
    /// Validate and wrap a stored name.
    pub fn new(name: impl Into<String>) -> Result<Self, CategoryValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<CategoryName> for String {
    fn from(value: CategoryName) -> Self {
        value.0
    }
}

/// Escape characters that are significant in HTML markup.
///
/// # Examples
/// ```
/// use catalog::domain::escape_markup;
///
/// assert_eq!(escape_markup("Sci-Fi & <Fantasy>"), "Sci-Fi &amp; &lt;Fantasy&gt;");
/// ```
#[must_use]
pub fn escape_markup(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '/' => escaped.push_str("&#x2F;"),
            '\\' => escaped.push_str("&#x5C;"),
            '`' => escaped.push_str("&#96;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Submitted category form values after trimming and escaping.
///
/// The sanitised value is kept even when validation fails so the form can be
/// re-rendered with what the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySubmission {
    name: String,
}

impl CategorySubmission {
    /// Trim and escape the raw `name` field.
    ///
    /// # Examples
    /// ```
    /// use catalog::domain::CategorySubmission;
    ///
    /// let submission = CategorySubmission::from_raw("  Poetry  ");
    /// assert_eq!(submission.name(), "Poetry");
    /// assert!(CategorySubmission::from_raw("   ").validate().is_err());
    /// ```
    #[must_use]
    pub fn from_raw(name: &str) -> Self {
        Self {
            name: escape_markup(name.trim()),
        }
    }

    /// Sanitised name as submitted.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Validate the sanitised name.
    pub fn validate(&self) -> Result<CategoryName, CategoryValidationError> {
        CategoryName::new(self.name.clone())
    }
}

/// Classification entity with an application-level unique name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "CategoryPayload")]
pub struct Category {
    id: CategoryId,
    name: CategoryName,
}

impl Category {
    /// Assemble a category from validated parts.
    #[must_use]
    pub fn new(id: CategoryId, name: CategoryName) -> Self {
        Self { id, name }
    }

    /// Identifier.
    #[must_use]
    pub fn id(&self) -> &CategoryId {
        &self.id
    }

    /// Stored name.
    #[must_use]
    pub fn name(&self) -> &CategoryName {
        &self.name
    }

    /// Location of the category detail view.
    ///
    /// # Examples
    /// ```
    /// use catalog::domain::{Category, CategoryId, CategoryName};
    ///
    /// let id = CategoryId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("id");
    /// let category = Category::new(id, CategoryName::new("Poetry").expect("name"));
    /// assert_eq!(category.url(), "/categories/3fa85f64-5717-4562-b3fc-2c963f66afa6");
    /// ```
    #[must_use]
    pub fn url(&self) -> String {
        format!("{CATEGORY_LIST_PATH}/{}", self.id)
    }
}

#[derive(Serialize)]
struct CategoryPayload {
    id: CategoryId,
    name: String,
    url: String,
}

impl From<Category> for CategoryPayload {
    fn from(value: Category) -> Self {
        let url = value.url();
        Self {
            id: value.id,
            name: value.name.into(),
            url,
        }
    }
}
