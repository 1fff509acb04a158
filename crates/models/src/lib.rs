pub mod errors;
pub mod db;
pub mod product;
pub mod store;
pub mod product_store;

pub use product::ProductType;

#[cfg(test)]
mod tests;
