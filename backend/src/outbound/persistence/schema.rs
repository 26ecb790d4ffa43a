//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Categories keyed by UUID.
    ///
    /// `name` holds the escaped form submitted by users. It is indexed but not
    /// unique; uniqueness is checked by the application before insert.
    categories (id) {
        id -> Uuid,
        name -> Varchar,
        created_at -> Timestamptz,
        /// Maintained by the `categories_updated_at` trigger.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Items referencing a category. Deleting a referenced category is
    /// restricted at the database level as well.
    items (id) {
        id -> Uuid,
        title -> Varchar,
        category_id -> Uuid,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(items -> categories (category_id));
diesel::allow_tables_to_appear_in_same_query!(categories, items);
