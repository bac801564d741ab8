//! Product CRUD handlers.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    Json,
};

use shopfront_core::product::{generate_sample_products, Message, Product, ProductUpdate};
use shopfront_core::storage::RepositoryError;

use crate::{
    handlers::{AppError, RequestError},
    state::AppState,
};

/// List all products (GET /products).
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.product_repo.list_products().await?;

    tracing::debug!(count = products.len(), "Listed products");

    Ok(Json(products))
}

/// Get a single product by ID (GET /products/{id}).
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    match state.product_repo.get_product(&id).await? {
        Some(product) => Ok(Json(product)),
        None => Err(RepositoryError::product_not_found(id).into()),
    }
}

/// Write a batch of random sample products (POST /products).
pub async fn seed_products(State(state): State<AppState>) -> Result<String, AppError> {
    let products = generate_sample_products(&mut rand::rng(), state.seed_count);

    for product in &products {
        state.product_repo.save_product(product).await?;
        tracing::debug!(product_id = %product.id, name = %product.name, "Seeded product");
    }

    tracing::info!(count = products.len(), "Seeded product table");

    Ok(format!(
        "Product table seeded with {} sample products",
        products.len()
    ))
}

/// Update the name, description and price of a product (PUT /products/{id}).
///
/// The body is parsed as JSON regardless of its content type. Any `id`, `rate`
/// or `image` fields in the body are ignored. A price the table cannot hold is
/// rejected before storage is touched.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Message>, AppError> {
    let body = body.map_err(RequestError::from)?;
    let update: ProductUpdate = serde_json::from_slice(&body)
        .map_err(|e| RequestError::MalformedBody(e.to_string()))?;
    update.validate().map_err(RequestError::InvalidField)?;

    tracing::debug!(product_id = %id, update = ?update, "Received update product request");

    state.product_repo.update_product(&id, &update).await?;

    tracing::info!(product_id = %id, "Updated product");

    Ok(Json(Message::done()))
}

/// Delete a product by ID (DELETE /products/{id}).
///
/// Deleting a product that does not exist succeeds.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, AppError> {
    state.product_repo.delete_product(&id).await?;

    tracing::info!(product_id = %id, "Deleted product");

    Ok(Json(Message::done()))
}
