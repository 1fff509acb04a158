//! Repository implementations backing the product and store services.

pub mod memory;
pub mod seaorm;

pub use memory::MemoryCatalog;
pub use seaorm::SeaOrmCatalogRepository;
