// ABOUTME: HTTP API layer for Sunward providing REST endpoints and routing
// ABOUTME: Integration layer that depends on the catalog, inquiry, and mail packages

use axum::{
    routing::{get, post},
    Router,
};

pub mod billing_handlers;
pub mod catalog_handlers;
pub mod emails;
pub mod error;
pub mod health;
pub mod leads_handlers;
pub mod quotes_handlers;
pub mod state;

pub use error::{ApiResult, AppError};
pub use state::AppState;

/// Creates the catalog API router
pub fn create_catalog_router() -> Router<AppState> {
    Router::new()
        .route("/", post(catalog_handlers::create_product))
        .route("/", get(catalog_handlers::list_products))
        .route("/{id}", get(catalog_handlers::get_product))
}

/// Creates the leads API router
pub fn create_leads_router() -> Router<AppState> {
    Router::new()
        .route("/", post(leads_handlers::create_lead))
        .route("/", get(leads_handlers::list_leads))
}

/// Creates the quotes API router
pub fn create_quotes_router() -> Router<AppState> {
    Router::new()
        .route("/", post(quotes_handlers::create_quote))
        .route("/", get(quotes_handlers::list_quotes))
}

/// Creates the full application router under the stable `/api` prefix.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .nest("/products", create_catalog_router())
        .nest("/leads", create_leads_router())
        .nest("/quotes", create_quotes_router())
        .route("/orders", post(billing_handlers::submit_order))
        .route(
            "/payments/receipt",
            post(billing_handlers::submit_payment_receipt),
        )
        .route("/invoices/send", post(billing_handlers::send_invoice))
        .route("/seed-products", post(catalog_handlers::seed_products))
        .with_state(state);

    Router::new().nest("/api", api)
}
