use axum::{extract::{Path, State}, http::StatusCode, Json};
use service::domain::{CreateStoreInput, StoreWithProducts, UpdateStoreInput};
use service::EntityKind;

use crate::{errors::JsonApiError, routes::parse_id, state::ServerState};

#[utoipa::path(
    get, path = "/stores", tag = "stores",
    responses((status = 200, description = "All stores", body = [crate::openapi::StoreDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<models::store::Model>>, JsonApiError> {
    Ok(Json(state.catalog.stores.list().await?))
}

#[utoipa::path(
    post, path = "/stores", tag = "stores",
    request_body = crate::openapi::CreateStoreDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::StoreDoc),
        (status = 412, description = "Invalid city code", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateStoreInput>,
) -> Result<(StatusCode, Json<models::store::Model>), JsonApiError> {
    let created = state.catalog.stores.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/stores/{store_id}", tag = "stores",
    params(("store_id" = String, Path, description = "Store ID")),
    responses(
        (status = 200, description = "Store with its products", body = crate::openapi::StoreWithProductsDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(store_id): Path<String>) -> Result<Json<StoreWithProducts>, JsonApiError> {
    let id = parse_id(&store_id, EntityKind::Store)?;
    Ok(Json(state.catalog.stores.get(id).await?))
}

#[utoipa::path(
    put, path = "/stores/{store_id}", tag = "stores",
    params(("store_id" = String, Path, description = "Store ID")),
    request_body = crate::openapi::UpdateStoreDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::StoreDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 412, description = "Invalid city code", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(store_id): Path<String>,
    Json(input): Json<UpdateStoreInput>,
) -> Result<Json<models::store::Model>, JsonApiError> {
    let id = parse_id(&store_id, EntityKind::Store)?;
    Ok(Json(state.catalog.stores.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/stores/{store_id}", tag = "stores",
    params(("store_id" = String, Path, description = "Store ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(store_id): Path<String>) -> Result<StatusCode, JsonApiError> {
    let id = parse_id(&store_id, EntityKind::Store)?;
    state.catalog.stores.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
