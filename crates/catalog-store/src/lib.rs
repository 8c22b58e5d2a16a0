//! In-memory persistence for categories and products
//!
//! Lookups that miss and rule violations are reported as
//! [`DomainFailure`](catalog_core::DomainFailure) values so they reach the
//! client through the same envelope as every other failure.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod model;
mod page;
mod store;

pub use model::{Category, CategoryDraft, Product, ProductDraft, ProductEntry};
pub use page::Page;
pub use store::CatalogStore;
