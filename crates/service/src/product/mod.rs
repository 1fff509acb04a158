//! Product records: repository abstraction and CRUD service.

pub mod repository;
pub mod service;

pub use repository::ProductRepository;
pub use service::ProductService;
