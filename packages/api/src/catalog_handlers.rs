// ABOUTME: HTTP request handlers for the product catalog
// ABOUTME: Create, list-with-filter, get-by-id, and the bulk-load seed endpoint

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use sunward_catalog::types::validate_product_input;
use sunward_catalog::{Product, ProductCategory, ProductCreateInput, SeedOutcome};

use crate::error::{ApiResult, AppError};
use crate::state::AppState;

/// Create a new catalog product
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<ProductCreateInput>,
) -> ApiResult<Json<Product>> {
    info!("Creating product '{}'", input.name);

    let errors = validate_product_input(&input);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let product = state.catalog.create_product(input).await?;
    Ok(Json(product))
}

#[derive(Deserialize)]
pub struct ListProductsParams {
    pub category: Option<String>,
}

/// List products, optionally filtered by category.
///
/// An unrecognized category is a client error, not an empty result.
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListProductsParams>,
) -> ApiResult<Json<Vec<Product>>> {
    let filter = match params.category.as_deref() {
        Some(raw) => Some(
            raw.parse::<ProductCategory>()
                .map_err(|_| AppError::UnknownCategory(raw.to_string()))?,
        ),
        None => None,
    };

    let products = state.catalog.list_products(filter).await?;
    Ok(Json(products))
}

/// Get a single product by id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Product>> {
    let product = state
        .catalog
        .get_product(&id)
        .await?
        .ok_or(AppError::NotFound("Product"))?;

    Ok(Json(product))
}

/// Bulk-load the fixed seed catalog. Outside the steady-state API contract;
/// refuses to touch a non-empty catalog.
pub async fn seed_products(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let message = match state.catalog.seed_if_empty().await? {
        SeedOutcome::Seeded { inserted } => {
            format!("Successfully seeded {} products", inserted)
        }
        SeedOutcome::AlreadySeeded { existing } => {
            format!("Products already seeded. {} products exist.", existing)
        }
    };

    Ok(Json(json!({ "message": message })))
}
