//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer. Audit columns are left to
//! database defaults and triggers, so rows select only what the domain needs.

use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{categories, items};

/// Row read from the categories table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CategoryRow {
    pub id: Uuid,
    pub name: String,
}

/// Insertable category record.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = categories)]
pub(crate) struct NewCategoryRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
}

/// Full-replace changeset for a category.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = categories)]
pub(crate) struct CategoryUpdate<'a> {
    pub name: &'a str,
}

/// Row read from the items table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ItemRow {
    pub id: Uuid,
    pub title: String,
    pub category_id: Uuid,
}
