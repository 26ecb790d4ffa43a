//! Category CRUD endpoints.
//!
//! ```text
//! GET  /categories
//! GET  /categories/create        POST /categories/create
//! GET  /categories/{id}
//! GET  /categories/{id}/delete   POST /categories/{id}/delete
//! GET  /categories/{id}/update   POST /categories/{id}/update
//! ```
//!
//! Rendered views are returned as JSON with a `template` tag. Redirects are
//! `303 See Other`. `/categories/create` is registered ahead of
//! `/categories/{id}` so the literal segment wins.

use actix_web::http::header;
use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{
    CATEGORY_LIST_PATH, CategoryId, CategoryOutcome, CategorySubmission, Error, View,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::form_error_handler;
use crate::inbound::http::schemas::{ErrorSchema, ViewSchema};
use crate::inbound::http::state::HttpState;

/// Form body for create and update.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CategoryForm {
    /// Raw category name; trimmed and escaped before validation.
    #[serde(default)]
    #[schema(example = "Science Fiction")]
    pub name: String,
}

/// Form body for the delete confirmation.
#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteCategoryForm {
    /// Identifier of the category to delete.
    #[serde(rename = "categoryId", default)]
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub category_id: String,
}

#[derive(Debug, Deserialize)]
struct CategoryPath {
    id: String,
}

fn respond(outcome: CategoryOutcome) -> HttpResponse {
    match outcome {
        CategoryOutcome::Render(view) => HttpResponse::Ok().json(view),
        CategoryOutcome::Redirect(location) => HttpResponse::SeeOther()
            .insert_header((header::LOCATION, location))
            .finish(),
    }
}

fn redirect_to_list() -> HttpResponse {
    respond(CategoryOutcome::Redirect(CATEGORY_LIST_PATH.to_owned()))
}

/// Parse a path identifier. Malformed ids name no category.
fn parse_path_id(path: CategoryPath) -> Result<CategoryId, Error> {
    CategoryId::new(&path.id).map_err(|_| {
        debug!(category_id = %path.id, "malformed category id in path");
        Error::not_found(format!("category {} not found", path.id))
    })
}

fn parse_body_id(form: &DeleteCategoryForm) -> Result<CategoryId, Error> {
    CategoryId::new(&form.category_id).map_err(|err| {
        Error::invalid_request(format!("categoryId is invalid: {err}"))
            .with_details(json!({ "field": "categoryId" }))
    })
}

/// List every category ordered by name.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "category_list view", body = ViewSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["categories"],
    operation_id = "listCategories"
)]
#[get("/categories")]
pub async fn list_categories(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let outcome = state.categories.list_categories().await?;
    Ok(respond(outcome))
}

/// Render an empty create form.
#[utoipa::path(
    get,
    path = "/categories/create",
    responses((status = 200, description = "category_form view", body = ViewSchema)),
    tags = ["categories"],
    operation_id = "createCategoryForm"
)]
#[get("/categories/create")]
pub async fn create_category_form() -> HttpResponse {
    HttpResponse::Ok().json(View::create_form())
}

/// Create a category, or redirect to an existing one with the same name.
#[utoipa::path(
    post,
    path = "/categories/create",
    request_body(content = CategoryForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Form re-rendered with validation errors", body = ViewSchema),
        (status = 303, description = "Redirect to the category", headers(("Location" = String))),
        (status = 400, description = "Malformed form body", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["categories"],
    operation_id = "createCategory"
)]
#[post("/categories/create")]
pub async fn create_category(
    state: web::Data<HttpState>,
    form: web::Form<CategoryForm>,
) -> ApiResult<HttpResponse> {
    let submission = CategorySubmission::from_raw(&form.name);
    let outcome = state.categories_command.create_category(submission).await?;
    Ok(respond(outcome))
}

/// Show one category with its items.
#[utoipa::path(
    get,
    path = "/categories/{id}",
    params(("id" = String, Path, description = "Category identifier")),
    responses(
        (status = 200, description = "category_detail view", body = ViewSchema),
        (status = 404, description = "Category not found", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["categories"],
    operation_id = "getCategory"
)]
#[get("/categories/{id}")]
pub async fn category_detail(
    state: web::Data<HttpState>,
    path: web::Path<CategoryPath>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(path.into_inner())?;
    let outcome = state.categories.category_detail(&id).await?;
    Ok(respond(outcome))
}

/// Render the delete confirmation.
#[utoipa::path(
    get,
    path = "/categories/{id}/delete",
    params(("id" = String, Path, description = "Category identifier")),
    responses(
        (status = 200, description = "category_delete view", body = ViewSchema),
        (status = 303, description = "Category absent; redirect to the list"),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["categories"],
    operation_id = "deleteCategoryForm"
)]
#[get("/categories/{id}/delete")]
pub async fn delete_category_form(
    state: web::Data<HttpState>,
    path: web::Path<CategoryPath>,
) -> ApiResult<HttpResponse> {
    let Ok(id) = parse_path_id(path.into_inner()) else {
        return Ok(redirect_to_list());
    };
    let outcome = state.categories.delete_confirmation(&id).await?;
    Ok(respond(outcome))
}

/// Delete the category named by `categoryId` when it has no items.
///
/// The path segment only selects the route; the body identifies the record.
#[utoipa::path(
    post,
    path = "/categories/{id}/delete",
    params(("id" = String, Path, description = "Category identifier")),
    request_body(content = DeleteCategoryForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Confirmation re-rendered; items still reference the category", body = ViewSchema),
        (status = 303, description = "Deleted; redirect to the list"),
        (status = 400, description = "Missing or malformed categoryId", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["categories"],
    operation_id = "deleteCategory"
)]
#[post("/categories/{id}/delete")]
pub async fn delete_category(
    state: web::Data<HttpState>,
    form: web::Form<DeleteCategoryForm>,
) -> ApiResult<HttpResponse> {
    let id = parse_body_id(&form)?;
    let outcome = state.categories_command.delete_category(&id).await?;
    Ok(respond(outcome))
}

/// Render the update form pre-populated with the stored name.
#[utoipa::path(
    get,
    path = "/categories/{id}/update",
    params(("id" = String, Path, description = "Category identifier")),
    responses(
        (status = 200, description = "category_form view", body = ViewSchema),
        (status = 404, description = "Category not found", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["categories"],
    operation_id = "updateCategoryForm"
)]
#[get("/categories/{id}/update")]
pub async fn update_category_form(
    state: web::Data<HttpState>,
    path: web::Path<CategoryPath>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(path.into_inner())?;
    let outcome = state.categories.edit_form(&id).await?;
    Ok(respond(outcome))
}

/// Rename a category.
#[utoipa::path(
    post,
    path = "/categories/{id}/update",
    params(("id" = String, Path, description = "Category identifier")),
    request_body(content = CategoryForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Form re-rendered with validation errors", body = ViewSchema),
        (status = 303, description = "Redirect to the category", headers(("Location" = String))),
        (status = 400, description = "Malformed form body", body = ErrorSchema),
        (status = 404, description = "Category not found", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["categories"],
    operation_id = "updateCategory"
)]
#[post("/categories/{id}/update")]
pub async fn update_category(
    state: web::Data<HttpState>,
    path: web::Path<CategoryPath>,
    form: web::Form<CategoryForm>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(path.into_inner())?;
    let submission = CategorySubmission::from_raw(&form.name);
    let outcome = state
        .categories_command
        .update_category(&id, submission)
        .await?;
    Ok(respond(outcome))
}

/// Register the category routes and their form extractor configuration.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(form_error_handler))
        .service(list_categories)
        .service(create_category_form)
        .service(create_category)
        .service(category_detail)
        .service(delete_category_form)
        .service(delete_category)
        .service(update_category_form)
        .service(update_category);
}

#[cfg(test)]
#[path = "categories_tests.rs"]
mod tests;
