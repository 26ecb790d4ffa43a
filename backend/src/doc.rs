//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects the category and health endpoints together with the
//! schema wrappers from [`crate::inbound::http::schemas`], which keep domain
//! types free of utoipa derives. The document backs Swagger UI in debug
//! builds and is printed by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::categories::{CategoryForm, DeleteCategoryForm};
use crate::inbound::http::schemas::{
    CategorySchema, ErrorCodeSchema, ErrorSchema, FieldErrorSchema, ItemSchema, ViewSchema,
};

/// OpenAPI document for the HTTP API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog category API",
        description = "Create, browse, rename and delete item categories."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::categories::list_categories,
        crate::inbound::http::categories::create_category_form,
        crate::inbound::http::categories::create_category,
        crate::inbound::http::categories::category_detail,
        crate::inbound::http::categories::delete_category_form,
        crate::inbound::http::categories::delete_category,
        crate::inbound::http::categories::update_category_form,
        crate::inbound::http::categories::update_category,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CategoryForm,
        DeleteCategoryForm,
        CategorySchema,
        ItemSchema,
        FieldErrorSchema,
        ViewSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "categories", description = "Category pages and form submissions"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
