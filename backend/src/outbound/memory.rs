//! In-process catalogue store used when no database is configured.
//!
//! Implements both repository ports over a shared map guarded by a
//! `tokio::sync::RwLock`, so clones observe the same data. Names and titles
//! sort by byte order, matching the `COLLATE "C"` columns behind the Diesel
//! adapters; not-found semantics match as well.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{
    CategoryRepository, CategoryRepositoryError, ItemRepository, ItemRepositoryError,
};
use crate::domain::{Category, CategoryId, CategoryName, Item};

#[derive(Default)]
struct CatalogState {
    categories: HashMap<CategoryId, Category>,
    items: Vec<Item>,
}

/// Shared in-memory store for categories and items.
///
/// # Examples
/// ```
/// use catalog::domain::{Category, CategoryId, CategoryName};
/// use catalog::outbound::memory::InMemoryCatalogStore;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = InMemoryCatalogStore::new();
/// let name = CategoryName::new("Poetry").expect("valid name");
/// store.insert_category(Category::new(CategoryId::random(), name)).await;
/// # });
/// ```
#[derive(Clone, Default)]
pub struct InMemoryCatalogStore {
    state: Arc<RwLock<CatalogState>>,
}

impl InMemoryCatalogStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a category.
    pub async fn insert_category(&self, category: Category) {
        let mut state = self.state.write().await;
        state.categories.insert(*category.id(), category);
    }

    /// Insert an item.
    ///
    /// The referenced category is not checked; the store accepts dangling
    /// items the way a seeded fixture would.
    pub async fn insert_item(&self, item: Item) {
        self.state.write().await.items.push(item);
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCatalogStore {
    async fn list_sorted_by_name(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        let state = self.state.read().await;
        let mut categories: Vec<Category> = state.categories.values().cloned().collect();
        categories.sort_by(|a, b| a.name().as_ref().cmp(b.name().as_ref()));
        Ok(categories)
    }

    async fn find_by_id(
        &self,
        id: &CategoryId,
    ) -> Result<Option<Category>, CategoryRepositoryError> {
        Ok(self.state.read().await.categories.get(id).cloned())
    }

    async fn find_by_name(
        &self,
        name: &CategoryName,
    ) -> Result<Option<Category>, CategoryRepositoryError> {
        let state = self.state.read().await;
        Ok(state
            .categories
            .values()
            .find(|category| category.name() == name)
            .cloned())
    }

    async fn save(&self, category: &Category) -> Result<(), CategoryRepositoryError> {
        self.insert_category(category.clone()).await;
        Ok(())
    }

    async fn update_by_id(
        &self,
        category: &Category,
    ) -> Result<Option<Category>, CategoryRepositoryError> {
        let mut state = self.state.write().await;
        let Some(stored) = state.categories.get_mut(category.id()) else {
            return Ok(None);
        };
        *stored = category.clone();
        Ok(Some(category.clone()))
    }

    async fn delete_by_id(&self, id: &CategoryId) -> Result<(), CategoryRepositoryError> {
        self.state.write().await.categories.remove(id);
        Ok(())
    }
}

#[async_trait]
impl ItemRepository for InMemoryCatalogStore {
    async fn find_by_category(
        &self,
        category: &CategoryId,
    ) -> Result<Vec<Item>, ItemRepositoryError> {
        let state = self.state.read().await;
        let mut items: Vec<Item> = state
            .items
            .iter()
            .filter(|item| item.category() == category)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.title().cmp(b.title()));
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemId;
    use rstest::{fixture, rstest};

    fn category(name: &str) -> Category {
        Category::new(
            CategoryId::random(),
            CategoryName::new(name).expect("valid name"),
        )
    }

    #[fixture]
    fn store() -> InMemoryCatalogStore {
        InMemoryCatalogStore::new()
    }

    #[rstest]
    #[tokio::test]
    async fn lists_categories_sorted_by_name(store: InMemoryCatalogStore) {
        for name in ["Poetry", "Drama", "Fiction"] {
            store.insert_category(category(name)).await;
        }

        let names: Vec<String> = store
            .list_sorted_by_name()
            .await
            .expect("list succeeds")
            .iter()
            .map(|c| c.name().to_string())
            .collect();

        assert_eq!(names, ["Drama", "Fiction", "Poetry"]);
    }

    #[rstest]
    #[tokio::test]
    async fn ordering_is_case_sensitive_byte_order(store: InMemoryCatalogStore) {
        for name in ["apple", "Banana", "cherry"] {
            store.insert_category(category(name)).await;
        }

        let names: Vec<String> = store
            .list_sorted_by_name()
            .await
            .expect("list succeeds")
            .iter()
            .map(|c| c.name().to_string())
            .collect();

        assert_eq!(names, ["Banana", "apple", "cherry"]);
    }

    #[rstest]
    #[tokio::test]
    async fn find_by_name_is_exact(store: InMemoryCatalogStore) {
        let fiction = category("Fiction");
        store.insert_category(fiction.clone()).await;

        let exact = CategoryName::new("Fiction").expect("valid name");
        let lower = CategoryName::new("fiction").expect("valid name");

        assert_eq!(store.find_by_name(&exact).await.expect("read"), Some(fiction));
        assert_eq!(store.find_by_name(&lower).await.expect("read"), None);
    }

    #[rstest]
    #[tokio::test]
    async fn update_of_absent_category_returns_none(store: InMemoryCatalogStore) {
        let updated = store
            .update_by_id(&category("Ghost"))
            .await
            .expect("update succeeds");

        assert!(updated.is_none());
        assert!(store.list_sorted_by_name().await.expect("list").is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn update_replaces_name(store: InMemoryCatalogStore) {
        let original = category("Fiction");
        store.insert_category(original.clone()).await;
        let renamed = Category::new(
            *original.id(),
            CategoryName::new("Novels").expect("valid name"),
        );

        let updated = store.update_by_id(&renamed).await.expect("update succeeds");

        assert_eq!(updated, Some(renamed.clone()));
        assert_eq!(
            store.find_by_id(original.id()).await.expect("read"),
            Some(renamed)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn delete_of_absent_category_is_a_no_op(store: InMemoryCatalogStore) {
        store.insert_category(category("Drama")).await;

        store
            .delete_by_id(&CategoryId::random())
            .await
            .expect("delete succeeds");

        assert_eq!(store.list_sorted_by_name().await.expect("list").len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn items_are_filtered_by_category(store: InMemoryCatalogStore) {
        let fiction = category("Fiction");
        let drama = category("Drama");
        store
            .insert_item(Item::new(ItemId::random(), "Middlemarch", *fiction.id()))
            .await;
        store
            .insert_item(Item::new(ItemId::random(), "Dune", *fiction.id()))
            .await;
        store
            .insert_item(Item::new(ItemId::random(), "Hamlet", *drama.id()))
            .await;

        let titles: Vec<String> = store
            .find_by_category(fiction.id())
            .await
            .expect("read")
            .iter()
            .map(|item| item.title().to_owned())
            .collect();

        assert_eq!(titles, ["Dune", "Middlemarch"]);
    }
}
