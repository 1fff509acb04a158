use axum::{extract::{Path, State}, http::StatusCode, Json};
use service::domain::{CreateProductInput, ProductWithStores, UpdateProductInput};
use service::EntityKind;

use crate::{errors::JsonApiError, routes::parse_id, state::ServerState};

#[utoipa::path(
    get, path = "/products", tag = "products",
    responses((status = 200, description = "All products", body = [crate::openapi::ProductDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<models::product::Model>>, JsonApiError> {
    Ok(Json(state.catalog.products.list().await?))
}

#[utoipa::path(
    post, path = "/products", tag = "products",
    request_body = crate::openapi::CreateProductDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ProductDoc),
        (status = 412, description = "Invalid product type", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateProductInput>,
) -> Result<(StatusCode, Json<models::product::Model>), JsonApiError> {
    let created = state.catalog.products.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/products/{product_id}", tag = "products",
    params(("product_id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product with its stores", body = crate::openapi::ProductWithStoresDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(product_id): Path<String>) -> Result<Json<ProductWithStores>, JsonApiError> {
    let id = parse_id(&product_id, EntityKind::Product)?;
    Ok(Json(state.catalog.products.get(id).await?))
}

#[utoipa::path(
    put, path = "/products/{product_id}", tag = "products",
    params(("product_id" = String, Path, description = "Product ID")),
    request_body = crate::openapi::UpdateProductDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ProductDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 412, description = "Invalid product type", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(product_id): Path<String>,
    Json(input): Json<UpdateProductInput>,
) -> Result<Json<models::product::Model>, JsonApiError> {
    let id = parse_id(&product_id, EntityKind::Product)?;
    Ok(Json(state.catalog.products.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/products/{product_id}", tag = "products",
    params(("product_id" = String, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(product_id): Path<String>) -> Result<StatusCode, JsonApiError> {
    let id = parse_id(&product_id, EntityKind::Product)?;
    state.catalog.products.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
