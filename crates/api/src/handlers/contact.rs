//! Handler for the contact/footer form (JSON).

use axum::extract::State;
use axum::Json;

use medifab_core::intake::LeadForm;
use medifab_core::validation::{validate_contact, ContactSubmission};

use crate::error::{AppError, AppResult};
use crate::response::LeadResponse;
use crate::state::AppState;

/// POST /api/contact
///
/// JSON body: name, email, phone?, message. A phone number, when present,
/// must contain only digits, whitespace, and `- + ( )`.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(submission): Json<ContactSubmission>,
) -> AppResult<Json<LeadResponse>> {
    let form = validate_contact(&submission).map_err(AppError::from)?;

    let outcome = state.intake.submit(LeadForm::Contact(form), None).await?;

    Ok(Json(LeadResponse {
        success: true,
        lead_id: outcome.lead_id,
    }))
}
