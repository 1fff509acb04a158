//! Store records: repository abstraction and CRUD service.

pub mod repository;
pub mod service;

pub use repository::StoreRepository;
pub use service::StoreService;
