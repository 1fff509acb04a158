use std::fmt;

use models::errors::ModelError;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Entity a lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Product,
    Store,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Product => f.write_str("product"),
            EntityKind::Store => f.write_str("store"),
        }
    }
}

/// A structurally valid request that breaks a business rule.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Precondition {
    #[error("invalid product type `{value}`; expected PERISHABLE or NON_PERISHABLE")]
    InvalidProductType { value: String },
    #[error("invalid city format `{value}`; city must be a 3-character code")]
    InvalidCityCode { value: String },
    #[error("store {store_id} is not associated with product {product_id}")]
    NotAssociated { product_id: Uuid, store_id: Uuid },
}

impl Precondition {
    pub fn kind(&self) -> &'static str {
        match self {
            Precondition::InvalidProductType { .. } => "invalid_product_type",
            Precondition::InvalidCityCode { .. } => "invalid_city_code",
            Precondition::NotAssociated { .. } => "not_associated",
        }
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{entity} with id {id} was not found")]
    NotFound { entity: EntityKind, id: String },
    #[error("precondition failed: {0}")]
    PreconditionFailed(Precondition),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: EntityKind, id: impl fmt::Display) -> Self {
        Self::NotFound { entity, id: id.to_string() }
    }

    pub fn not_associated(product_id: Uuid, store_id: Uuid) -> Self {
        Self::PreconditionFailed(Precondition::NotAssociated { product_id, store_id })
    }

    /// Stable snake_case kind for clients that format their own messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::NotFound { .. } => "not_found",
            ServiceError::PreconditionFailed(p) => p.kind(),
            ServiceError::Db(_) => "database",
        }
    }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::NotFound { entity: EntityKind::Product, .. } => 2001,
            ServiceError::NotFound { entity: EntityKind::Store, .. } => 2002,
            ServiceError::PreconditionFailed(Precondition::InvalidProductType { .. }) => 2101,
            ServiceError::PreconditionFailed(Precondition::InvalidCityCode { .. }) => 2102,
            ServiceError::PreconditionFailed(Precondition::NotAssociated { .. }) => 2103,
            ServiceError::Db(_) => 2200,
        }
    }

    pub fn is_not_found(&self) -> bool { matches!(self, ServiceError::NotFound { .. }) }

    pub fn is_precondition_failed(&self) -> bool { matches!(self, ServiceError::PreconditionFailed(_)) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::InvalidProductType { value } => {
                ServiceError::PreconditionFailed(Precondition::InvalidProductType { value })
            }
            ModelError::InvalidCity { value } => ServiceError::PreconditionFailed(Precondition::InvalidCityCode { value }),
            ModelError::Db(msg) => ServiceError::Db(msg),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { ServiceError::Db(e.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_field_errors_become_preconditions() {
        let e: ServiceError = ModelError::InvalidCity { value: "BOGX".into() }.into();
        assert_eq!(e.kind(), "invalid_city_code");
        assert!(e.to_string().contains("invalid city format"));

        let e: ServiceError = ModelError::InvalidProductType { value: "FROZEN".into() }.into();
        assert_eq!(e.code(), 2101);
        assert!(e.is_precondition_failed());
    }

    #[test]
    fn not_found_names_entity_and_id() {
        let id = Uuid::nil();
        let e = ServiceError::not_found(EntityKind::Store, id);
        assert_eq!(e.to_string(), format!("store with id {id} was not found"));
        assert_eq!(e.kind(), "not_found");
        assert!(e.is_not_found());
    }

    #[test]
    fn not_associated_is_distinct_from_not_found() {
        let e = ServiceError::not_associated(Uuid::new_v4(), Uuid::new_v4());
        assert!(!e.is_not_found());
        assert_eq!(e.kind(), "not_associated");
    }
}
