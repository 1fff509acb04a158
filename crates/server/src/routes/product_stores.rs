use axum::{extract::{Path, State}, http::StatusCode, Json};
use serde::Deserialize;
use service::domain::ProductWithStores;
use service::{EntityKind, ServiceError};
use uuid::Uuid;

use crate::{errors::JsonApiError, routes::parse_id, state::ServerState};

/// Store reference in a replace-all body; other store fields are ignored.
#[derive(Debug, Deserialize)]
pub struct StoreRef {
    pub id: String,
}

// store first: the link operations look the store up before the product
fn parse_pair(product_id: &str, store_id: &str) -> Result<(Uuid, Uuid), JsonApiError> {
    let sid = parse_id(store_id, EntityKind::Store)?;
    let pid = parse_id(product_id, EntityKind::Product)?;
    Ok((pid, sid))
}

#[utoipa::path(
    post, path = "/products/{product_id}/stores/{store_id}", tag = "product-stores",
    params(
        ("product_id" = String, Path, description = "Product ID"),
        ("store_id" = String, Path, description = "Store ID")
    ),
    responses(
        (status = 201, description = "Linked", body = crate::openapi::ProductWithStoresDoc),
        (status = 404, description = "Product or store not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn add(
    State(state): State<ServerState>,
    Path((product_id, store_id)): Path<(String, String)>,
) -> Result<(StatusCode, Json<ProductWithStores>), JsonApiError> {
    let (pid, sid) = parse_pair(&product_id, &store_id)?;
    let view = state.catalog.links.add_store_to_product(pid, sid).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

#[utoipa::path(
    get, path = "/products/{product_id}/stores/{store_id}", tag = "product-stores",
    params(
        ("product_id" = String, Path, description = "Product ID"),
        ("store_id" = String, Path, description = "Store ID")
    ),
    responses(
        (status = 200, description = "Linked store", body = crate::openapi::StoreDoc),
        (status = 404, description = "Product or store not found", body = crate::openapi::ErrorDoc),
        (status = 412, description = "Store not linked to product", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path((product_id, store_id)): Path<(String, String)>,
) -> Result<Json<models::store::Model>, JsonApiError> {
    let (pid, sid) = parse_pair(&product_id, &store_id)?;
    Ok(Json(state.catalog.links.find_store_from_product(pid, sid).await?))
}

#[utoipa::path(
    get, path = "/products/{product_id}/stores", tag = "product-stores",
    params(("product_id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Linked stores", body = [crate::openapi::StoreDoc]),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    Path(product_id): Path<String>,
) -> Result<Json<Vec<models::store::Model>>, JsonApiError> {
    let pid = parse_id(&product_id, EntityKind::Product)?;
    Ok(Json(state.catalog.links.find_stores_from_product(pid).await?))
}

#[utoipa::path(
    put, path = "/products/{product_id}/stores", tag = "product-stores",
    params(("product_id" = String, Path, description = "Product ID")),
    request_body = [crate::openapi::StoreRefDoc],
    responses(
        (status = 200, description = "Link set replaced", body = crate::openapi::ProductWithStoresDoc),
        (status = 404, description = "Product or a store not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn replace(
    State(state): State<ServerState>,
    Path(product_id): Path<String>,
    Json(refs): Json<Vec<StoreRef>>,
) -> Result<Json<ProductWithStores>, JsonApiError> {
    let pid = parse_id(&product_id, EntityKind::Product)?;
    // non-UUID entries become the nil id, which no stored record carries
    let ids: Vec<Uuid> = refs.iter().map(|r| Uuid::parse_str(&r.id).unwrap_or(Uuid::nil())).collect();
    match state.catalog.links.update_stores_from_product(pid, &ids).await {
        Ok(view) => Ok(Json(view)),
        Err(ServiceError::NotFound { entity: EntityKind::Store, id }) if id == Uuid::nil().to_string() => {
            let raw = refs.iter().find(|r| Uuid::parse_str(&r.id).is_err()).map_or(id, |r| r.id.clone());
            Err(ServiceError::not_found(EntityKind::Store, raw).into())
        }
        Err(e) => Err(e.into()),
    }
}

#[utoipa::path(
    delete, path = "/products/{product_id}/stores/{store_id}", tag = "product-stores",
    params(
        ("product_id" = String, Path, description = "Product ID"),
        ("store_id" = String, Path, description = "Store ID")
    ),
    responses(
        (status = 204, description = "Unlinked"),
        (status = 404, description = "Product or store not found", body = crate::openapi::ErrorDoc),
        (status = 412, description = "Store not linked to product", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn remove(
    State(state): State<ServerState>,
    Path((product_id, store_id)): Path<(String, String)>,
) -> Result<StatusCode, JsonApiError> {
    let (pid, sid) = parse_pair(&product_id, &store_id)?;
    state.catalog.links.delete_store_from_product(pid, sid).await?;
    Ok(StatusCode::NO_CONTENT)
}
