//! PostgreSQL-backed `ItemRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ItemRepository, ItemRepositoryError};
use crate::domain::{CategoryId, Item, ItemId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::ItemRow;
use super::pool::DbPool;
use super::schema::items;

/// Diesel-backed implementation of the `ItemRepository` port.
#[derive(Clone)]
pub struct DieselItemRepository {
    pool: DbPool,
}

impl DieselItemRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_item(row: ItemRow) -> Item {
    Item::new(
        ItemId::from_uuid(row.id),
        row.title,
        CategoryId::from_uuid(row.category_id),
    )
}

#[async_trait]
impl ItemRepository for DieselItemRepository {
    async fn find_by_category(
        &self,
        category: &CategoryId,
    ) -> Result<Vec<Item>, ItemRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_basic_pool_error(err, ItemRepositoryError::connection))?;

        let rows: Vec<ItemRow> = items::table
            .filter(items::category_id.eq(category.as_uuid()))
            .order(items::title.asc())
            .select(ItemRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| {
                map_basic_diesel_error(
                    err,
                    ItemRepositoryError::query,
                    ItemRepositoryError::connection,
                )
            })?;

        Ok(rows.into_iter().map(row_to_item).collect())
    }
}
