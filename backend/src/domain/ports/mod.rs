//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod category_command;
mod category_query;
mod category_repository;
mod item_repository;

#[cfg(test)]
pub use category_command::MockCategoryCommand;
pub use category_command::CategoryCommand;
#[cfg(test)]
pub use category_query::MockCategoryQuery;
pub use category_query::CategoryQuery;
#[cfg(test)]
pub use category_repository::MockCategoryRepository;
pub use category_repository::{CategoryRepository, CategoryRepositoryError};
#[cfg(test)]
pub use item_repository::MockItemRepository;
pub use item_repository::{ItemRepository, ItemRepositoryError};
