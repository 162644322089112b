// ABOUTME: HTTP request handlers for quote requests
// ABOUTME: Create (admin copy + customer confirmation) and list-all

use axum::{extract::State, Json};
use tracing::info;

use sunward_inquiries::types::validate_quote_input;
use sunward_inquiries::{QuoteCreateInput, QuoteRequest};

use crate::emails;
use crate::error::{ApiResult, AppError};
use crate::state::AppState;

/// Create a new quote request.
///
/// Two independent best-effort notifications follow the write: an admin copy
/// to the operator address and a confirmation to the customer. A failure in
/// either does not affect the other or the HTTP response.
pub async fn create_quote(
    State(state): State<AppState>,
    Json(input): Json<QuoteCreateInput>,
) -> ApiResult<Json<QuoteRequest>> {
    let errors = validate_quote_input(&input);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let quote = state.quotes.create_quote(input).await?;
    info!(
        "Captured quote {} with {} product selection(s)",
        quote.id,
        quote.products.len()
    );

    let (subject, html) = emails::quote_admin_notice(&quote);
    state.notify(subject, vec![state.notify_email.clone()], html);

    let (subject, html) = emails::quote_confirmation(&quote);
    state.notify(subject, vec![quote.email.clone()], html);

    Ok(Json(quote))
}

/// List all quote requests
pub async fn list_quotes(State(state): State<AppState>) -> ApiResult<Json<Vec<QuoteRequest>>> {
    let quotes = state.quotes.list_quotes().await?;
    Ok(Json(quotes))
}
