use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Product type outside the enumerated names.
    #[error("invalid product.type `{value}`: must be one of PERISHABLE, NON_PERISHABLE")]
    InvalidProductType { value: String },
    /// Store city that is not a 3-character code.
    #[error("invalid store.city `{value}`: city must be a 3-character code")]
    InvalidCity { value: String },
    #[error("database error: {0}")]
    Db(String),
}

impl From<sea_orm::DbErr> for ModelError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}
