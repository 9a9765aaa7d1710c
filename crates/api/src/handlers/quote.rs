//! Handler for the quote-request form (multipart, optional floor plan).

use axum::extract::{Multipart, State};
use axum::Json;

use medifab_core::intake::LeadForm;
use medifab_core::upload::FileUpload;
use medifab_core::validation::{validate_quote, QuoteSubmission};

use crate::error::{AppError, AppResult};
use crate::response::QuoteResponse;
use crate::state::AppState;

/// POST /api/quote
///
/// Accepts a multipart form: name, email, phone?, organization?,
/// projectType?, description, and an optional `floorPlan` file. Field
/// validation and file constraints are checked before anything is
/// persisted; all field errors are reported at once.
pub async fn submit_quote(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<QuoteResponse>> {
    let (submission, attachment) = read_quote_form(multipart).await?;

    let form = validate_quote(&submission).map_err(AppError::from)?;

    let outcome = state
        .intake
        .submit(LeadForm::Quote(form), attachment)
        .await?;

    Ok(Json(QuoteResponse {
        success: true,
        lead_id: outcome.lead_id,
        floor_plan_uploaded: outcome.floor_plan_uploaded,
    }))
}

/// Drain the multipart body into the raw submission plus the optional
/// floor-plan upload. Unknown fields are ignored.
async fn read_quote_form(
    mut multipart: Multipart,
) -> Result<(QuoteSubmission, Option<FileUpload>), AppError> {
    let mut submission = QuoteSubmission::default();
    let mut attachment = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == "floorPlan" {
            let file_name = field.file_name().unwrap_or("floor-plan").to_string();
            let mime_type = field.content_type().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;

            // An empty file input submitted without a selection is treated
            // as no attachment.
            if !data.is_empty() {
                attachment = Some(FileUpload {
                    file_name,
                    mime_type,
                    data: data.to_vec(),
                });
            }
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        match name.as_str() {
            "name" => submission.name = Some(value),
            "email" => submission.email = Some(value),
            "phone" => submission.phone = Some(value),
            "organization" => submission.organization = Some(value),
            "projectType" => submission.project_type = Some(value),
            "description" => submission.description = Some(value),
            _ => {}
        }
    }

    Ok((submission, attachment))
}
