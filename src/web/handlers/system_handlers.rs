// src/web/handlers/system_handlers.rs
use crate::app_log;
use crate::web::types::*;

use rocket::serde::json::Json;
use rocket::State;

pub async fn health_handler(state: &State<AppState>) -> Json<TextResponse> {
    app_log!(debug, "Health check");

    let ats = if state.service.is_some() {
        "ATS service configured"
    } else {
        "ATS service not configured"
    };

    Json(TextResponse::success(format!(
        "Resume renderer is running ({} templates, {} generated, {})",
        state.resolver.registry().len(),
        state.resolver.store().len(),
        ats
    )))
}
