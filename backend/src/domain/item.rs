//! Catalogue items, read here only through their category reference.

use serde::Serialize;
use uuid::Uuid;

use super::CategoryId;

/// Stable item identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
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

/// Entity that belongs to a category through a foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    id: ItemId,
    title: String,
    category: CategoryId,
}

impl Item {
    /// Assemble an item.
    #[must_use]
    pub fn new(id: ItemId, title: impl Into<String>, category: CategoryId) -> Self {
        Self {
            id,
            title: title.into(),
            category,
        }
    }

    /// Identifier.
    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Display title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Owning category.
    #[must_use]
    pub fn category(&self) -> &CategoryId {
        &self.category
    }
}
