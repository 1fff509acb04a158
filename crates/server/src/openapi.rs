use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub error: String,
    pub kind: String,
    pub code: u16,
    pub message: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductTypeDoc {
    Perishable,
    NonPerishable,
}

#[derive(ToSchema)]
pub struct ProductDoc {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    #[schema(rename = "type")]
    pub product_type: ProductTypeDoc,
}

#[derive(ToSchema)]
pub struct CreateProductDoc {
    pub name: String,
    pub price: f64,
    #[schema(rename = "type")]
    pub product_type: ProductTypeDoc,
}

#[derive(ToSchema)]
pub struct UpdateProductDoc {
    pub name: Option<String>,
    pub price: Option<f64>,
    #[schema(rename = "type")]
    pub product_type: Option<ProductTypeDoc>,
}

#[derive(ToSchema)]
pub struct StoreDoc {
    pub id: Uuid,
    pub name: String,
    /// Three-character city code, e.g. `BOG`.
    pub city: String,
    pub address: String,
}

#[derive(ToSchema)]
pub struct CreateStoreDoc { pub name: String, pub city: String, pub address: String }

#[derive(ToSchema)]
pub struct UpdateStoreDoc { pub name: Option<String>, pub city: Option<String>, pub address: Option<String> }

#[derive(ToSchema)]
pub struct StoreRefDoc { pub id: Uuid }

#[derive(ToSchema)]
pub struct ProductWithStoresDoc {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    #[schema(rename = "type")]
    pub product_type: ProductTypeDoc,
    pub stores: Vec<StoreDoc>,
}

#[derive(ToSchema)]
pub struct StoreWithProductsDoc {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub address: String,
    pub products: Vec<ProductDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::metrics::metrics,
        crate::routes::products::list,
        crate::routes::products::create,
        crate::routes::products::get,
        crate::routes::products::update,
        crate::routes::products::delete,
        crate::routes::stores::list,
        crate::routes::stores::create,
        crate::routes::stores::get,
        crate::routes::stores::update,
        crate::routes::stores::delete,
        crate::routes::product_stores::add,
        crate::routes::product_stores::get,
        crate::routes::product_stores::list,
        crate::routes::product_stores::replace,
        crate::routes::product_stores::remove,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            ProductTypeDoc,
            ProductDoc,
            CreateProductDoc,
            UpdateProductDoc,
            StoreDoc,
            CreateStoreDoc,
            UpdateStoreDoc,
            StoreRefDoc,
            ProductWithStoresDoc,
            StoreWithProductsDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "products"),
        (name = "stores"),
        (name = "product-stores")
    )
)]
pub struct ApiDoc;
