// src/web/handlers/ats_handlers.rs
use crate::app_log;
use crate::core::ServiceClient;
use crate::types::response::AtsScoreResponse;
use crate::web::types::*;

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;

/// Scored by default: what a tracking system parser would see
const DEFAULT_SCORING_TEMPLATE: &str = "ats-friendly";

fn service_unavailable() -> ApiError {
    StandardErrorResponse::new(
        "AI service is not configured".to_string(),
        "SERVICE_UNAVAILABLE".to_string(),
        vec!["Set ATS_SERVICE_URL and restart the server".to_string()],
    )
    .with_status(Status::ServiceUnavailable)
}

fn upstream_error(e: anyhow::Error, error_code: &str) -> ApiError {
    app_log!(error, "AI service call failed: {:#}", e);
    StandardErrorResponse::new(
        format!("AI service call failed: {}", e),
        error_code.to_string(),
        vec!["Try again in a few moments".to_string()],
    )
    .with_status(Status::BadGateway)
}

fn service(state: &AppState) -> Result<&ServiceClient, ApiError> {
    state.service.as_ref().ok_or_else(service_unavailable)
}

pub async fn ats_score_handler(
    request: Json<AtsScoreRequest>,
    state: &State<AppState>,
) -> Result<Json<DataResponse<AtsScoreResponse>>, ApiError> {
    let request = request.into_inner();
    let client = service(state)?;

    let profile = request.profile.unwrap_or_default();
    let customizations = request.customizations.unwrap_or_default();
    let template_id = request.template_id.as_deref().unwrap_or(DEFAULT_SCORING_TEMPLATE);

    let document = state
        .resolver
        .render(template_id, Some(&profile), Some(&customizations));

    if document.section_kinds().is_empty() {
        return Err(StandardErrorResponse::new(
            "Nothing to score: the profile is empty".to_string(),
            "EMPTY_PROFILE".to_string(),
            vec!["Fill in at least a summary or an experience entry".to_string()],
        )
        .with_status(Status::UnprocessableEntity));
    }

    let score = client
        .score_resume(&document.to_plain_text(), request.job_description.as_deref())
        .await
        .map_err(|e| upstream_error(e, "ATS_SCORE_FAILED"))?;

    app_log!(info, "ATS score for '{}': {:.1}", template_id, score.score);
    Ok(Json(DataResponse::success(
        format!("ATS score: {:.1}", score.score),
        score,
    )))
}

pub async fn enhance_handler(
    request: Json<EnhanceRequest>,
    state: &State<AppState>,
) -> Result<Json<DataResponse<EnhancedText>>, ApiError> {
    let request = request.into_inner();
    let client = service(state)?;

    if request.text.trim().is_empty() {
        return Err(StandardErrorResponse::new(
            "Text to enhance is empty".to_string(),
            "EMPTY_TEXT".to_string(),
            vec!["Provide the text of the section to rewrite".to_string()],
        )
        .with_status(Status::UnprocessableEntity));
    }

    let enhanced_text = client
        .enhance_text(&request.text, &request.section)
        .await
        .map_err(|e| upstream_error(e, "ENHANCE_FAILED"))?;

    Ok(Json(DataResponse::success(
        format!("Enhanced {}", request.section),
        EnhancedText {
            section: request.section,
            enhanced_text,
        },
    )))
}
