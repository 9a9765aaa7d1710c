//! Handler for the site-survey request form (JSON).

use axum::extract::State;
use axum::Json;

use medifab_core::intake::LeadForm;
use medifab_core::validation::{validate_survey, SurveySubmission};

use crate::error::{AppError, AppResult};
use crate::response::LeadResponse;
use crate::state::AppState;

/// POST /api/survey
///
/// JSON body: name, email, phone?, organization?, location, preferredDate,
/// preferredTime?, projectDetails. All field errors are reported at once;
/// an unparsable `preferredDate` fails with "Invalid date format".
pub async fn submit_survey(
    State(state): State<AppState>,
    Json(submission): Json<SurveySubmission>,
) -> AppResult<Json<LeadResponse>> {
    let form = validate_survey(&submission).map_err(AppError::from)?;

    let outcome = state.intake.submit(LeadForm::Survey(form), None).await?;

    Ok(Json(LeadResponse {
        success: true,
        lead_id: outcome.lead_id,
    }))
}
