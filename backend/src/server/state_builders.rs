//! Builders for the HTTP state ports.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use catalog::domain::CategoryService;
use catalog::domain::ports::{CategoryCommand, CategoryQuery};
use catalog::inbound::http::state::HttpState;
use catalog::outbound::memory::InMemoryCatalogStore;
use catalog::outbound::persistence::{DbPool, DieselCategoryRepository, DieselItemRepository};

type CategoryPorts = (Arc<dyn CategoryQuery>, Arc<dyn CategoryCommand>);

fn cast<S>(service: Arc<S>) -> CategoryPorts
where
    S: CategoryQuery + CategoryCommand + 'static,
{
    (
        service.clone() as Arc<dyn CategoryQuery>,
        service as Arc<dyn CategoryCommand>,
    )
}

/// Select Diesel-backed repositories when a pool exists, otherwise the
/// in-memory store.
fn build_category_ports(db_pool: Option<&DbPool>) -> CategoryPorts {
    match db_pool {
        Some(pool) => {
            info!("serving categories from PostgreSQL");
            cast(Arc::new(CategoryService::new(
                Arc::new(DieselCategoryRepository::new(pool.clone())),
                Arc::new(DieselItemRepository::new(pool.clone())),
            )))
        }
        None => {
            warn!("no database configured; categories are kept in memory");
            let store = Arc::new(InMemoryCatalogStore::new());
            cast(Arc::new(CategoryService::new(store.clone(), store)))
        }
    }
}

/// Build the shared HTTP state.
pub(super) fn build_http_state(db_pool: Option<&DbPool>) -> web::Data<HttpState> {
    let (query, command) = build_category_ports(db_pool);
    web::Data::new(HttpState::new(query, command))
}
