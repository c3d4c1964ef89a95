// src/handlers/product.rs
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{header::LOCATION, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use tracing::{field, info, instrument, warn, Span};

use crate::dtos::product::CreateProductRequest;
use crate::error::AppError;
use crate::models::product::Product;
use crate::state::AppState;

// GET /products - List all products
#[instrument(skip(state))]
pub async fn get_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog.list())
}

// GET /products/{id} - Get single product
#[instrument(skip(state, id), fields(id = field::Empty))]
pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Product>, AppError> {
    let Path(id) = id.map_err(|e| {
        warn!(error = %e, "Rejected product id");
        AppError::validation("Product id must be an integer")
    })?;
    Span::current().record("id", id);

    state
        .catalog
        .get(id)
        .map(Json)
        .ok_or_else(AppError::not_found)
}

// POST /products - Create new product
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, HeaderMap, Json<Product>), AppError> {
    let product = state
        .catalog
        .create(payload)
        .ok_or_else(|| AppError::conflict("No product id left to assign"))?;
    info!(id = product.id, name = %product.name, "Product created");

    let mut headers = HeaderMap::new();
    let location = format!("{}/products/{}", state.base_path, product.id);
    if let Ok(value) = HeaderValue::from_str(&location) {
        headers.insert(LOCATION, value);
    }

    Ok((StatusCode::CREATED, headers, Json(product)))
}
