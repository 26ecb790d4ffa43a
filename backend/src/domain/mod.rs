//! Domain primitives, use-cases and ports.
//!
//! Purpose: define the category aggregate, the items that reference it, and
//! the services that turn form submissions into persisted changes. Nothing
//! here depends on actix or Diesel; adapters live under `inbound` and
//! `outbound`.
//!
//! Public surface:
//! - [`Category`], [`CategoryId`], [`CategoryName`] and [`CategorySubmission`].
//! - [`Item`] and [`ItemId`].
//! - [`View`] and [`CategoryOutcome`], the render-or-redirect result of every
//!   use-case.
//! - [`Error`] and [`ErrorCode`], the transport-agnostic failure payload.
//! - [`CategoryService`], implementing the driving ports in [`ports`].

pub mod category;
pub mod category_service;
pub mod error;
pub mod item;
pub mod ports;
pub mod trace_id;
pub mod view;

pub use self::category::{
    CATEGORY_LIST_PATH, Category, CategoryId, CategoryName, CategorySubmission,
    CategoryValidationError, escape_markup,
};
pub use self::category_service::CategoryService;
pub use self::error::{Error, ErrorCode};
pub use self::item::{Item, ItemId};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::view::{CategoryFormValues, CategoryOutcome, FieldError, View};
