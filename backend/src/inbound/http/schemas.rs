//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay free of `utoipa` derives. The wrappers here mirror their
//! serialized shape so the generated document matches what handlers emit.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested category does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A backing store could not be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "category not found")]
    message: String,
    /// Correlation identifier for tracing this error across logs.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Category`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Category)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CategorySchema {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: uuid::Uuid,
    /// Display name, HTML-escaped.
    #[schema(example = "Fiction")]
    name: String,
    /// Detail page path.
    #[schema(example = "/categories/3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    url: String,
}

/// OpenAPI schema for [`crate::domain::Item`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Item)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ItemSchema {
    id: uuid::Uuid,
    #[schema(example = "Dune")]
    title: String,
    /// Identifier of the owning category.
    category: uuid::Uuid,
}

/// OpenAPI schema for a validation message on a form field.
#[derive(ToSchema)]
#[schema(as = crate::domain::FieldError)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FieldErrorSchema {
    #[schema(example = "name")]
    param: String,
    #[schema(example = "Category name required")]
    msg: String,
    value: String,
}

/// OpenAPI schema for [`crate::domain::View`].
///
/// Every rendered page carries a `template` discriminator and a `title`;
/// the remaining fields depend on the template.
#[derive(ToSchema)]
#[schema(as = crate::domain::View)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ViewSchema {
    /// One of `category_list`, `category_detail`, `category_form` or
    /// `category_delete`.
    #[schema(example = "category_list")]
    template: String,
    #[schema(example = "Category List")]
    title: String,
    /// Present on list and form pages.
    categories: Option<Vec<CategorySchema>>,
    /// Present on detail and delete pages.
    items: Option<Vec<ItemSchema>>,
    /// Category shown on detail, form and delete pages.
    #[schema(value_type = Option<Object>)]
    category: Option<serde_json::Value>,
    /// Validation messages on form pages.
    errors: Option<Vec<FieldErrorSchema>>,
}
