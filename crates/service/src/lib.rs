//! Service layer for the product/store catalog.
//! - Separates business rules from data access behind repository traits.
//! - Reuses validation and entity definitions in `models` crate.
//! - Ships a SeaORM repository and an in-memory one over the same contract.

pub mod errors;
pub mod domain;
pub mod product;
pub mod store;
pub mod product_store;
pub mod repo;
pub mod catalog;
#[cfg(test)]
pub mod test_support;

pub use catalog::Catalog;
pub use errors::{EntityKind, Precondition, ServiceError};
