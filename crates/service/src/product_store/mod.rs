//! Management of the links between a product and its stores.

pub mod service;

pub use service::ProductStoreService;
