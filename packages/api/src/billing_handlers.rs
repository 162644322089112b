// ABOUTME: Free-form order, payment-receipt, and invoice submission endpoints
// ABOUTME: Forward the payload to the operator by email; always answer success

use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::info;

use crate::emails;
use crate::state::AppState;

fn forward_to_operator(state: &AppState, kind: &'static str, payload: &Value) {
    info!("Received {} payload", kind);

    let (subject, html) = emails::event_notice(kind, payload);
    state.notify(subject, vec![state.notify_email.clone()], html);
}

/// Accept a free-form order payload. Errors are swallowed internally; any
/// parseable request is acknowledged with success.
pub async fn submit_order(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Json<Value> {
    forward_to_operator(&state, "New order submission", &payload);
    Json(json!({ "success": true }))
}

/// Accept a free-form payment receipt payload.
pub async fn submit_payment_receipt(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Json<Value> {
    forward_to_operator(&state, "Payment receipt submission", &payload);
    Json(json!({ "success": true }))
}

/// Accept a free-form invoice-send request.
pub async fn send_invoice(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Json<Value> {
    forward_to_operator(&state, "Invoice send request", &payload);
    Json(json!({ "success": true }))
}
