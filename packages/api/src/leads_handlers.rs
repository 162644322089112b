// ABOUTME: HTTP request handlers for contact-form leads
// ABOUTME: Create (with best-effort admin notification) and list-all

use axum::{extract::State, Json};
use tracing::info;

use sunward_inquiries::types::validate_lead_input;
use sunward_inquiries::{Lead, LeadCreateInput};

use crate::emails;
use crate::error::{ApiResult, AppError};
use crate::state::AppState;

/// Create a new lead.
///
/// The admin notification is best-effort: the lead is persisted and returned
/// whether or not the email goes out.
pub async fn create_lead(
    State(state): State<AppState>,
    Json(input): Json<LeadCreateInput>,
) -> ApiResult<Json<Lead>> {
    let errors = validate_lead_input(&input);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let lead = state.leads.create_lead(input).await?;
    info!("Captured lead {} ({})", lead.id, lead.interest.as_str());

    let (subject, html) = emails::lead_admin_notice(&lead);
    state.notify(subject, vec![state.notify_email.clone()], html);

    Ok(Json(lead))
}

/// List all leads
pub async fn list_leads(State(state): State<AppState>) -> ApiResult<Json<Vec<Lead>>> {
    let leads = state.leads.list_leads().await?;
    Ok(Json(leads))
}
