use axum::{
    middleware,
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use common::types::Health;
use service::{EntityKind, ServiceError};

use crate::errors::JsonApiError;
use crate::metrics;
use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod product_stores;
pub mod products;
pub mod stores;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Path ids that are not UUIDs cannot name a stored record.
pub(crate) fn parse_id(raw: &str, entity: EntityKind) -> Result<Uuid, JsonApiError> {
    Uuid::parse_str(raw).map_err(|_| ServiceError::not_found(entity, raw).into())
}

/// Build the full application router: catalog routes, health, metrics and docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let catalog = Router::new()
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/:product_id",
            get(products::get).put(products::update).delete(products::delete),
        )
        .route("/stores", get(stores::list).post(stores::create))
        .route(
            "/stores/:store_id",
            get(stores::get).put(stores::update).delete(stores::delete),
        )
        .route(
            "/products/:product_id/stores",
            get(product_stores::list).put(product_stores::replace),
        )
        .route(
            "/products/:product_id/stores/:store_id",
            get(product_stores::get)
                .post(product_stores::add)
                .delete(product_stores::remove),
        )
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics::metrics))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(catalog)
        .layer(middleware::from_fn(metrics::track))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx and friends at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
