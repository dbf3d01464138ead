// src/web/handlers/render_handlers.rs
use crate::app_log;
use crate::templates::{Rendered, TemplateResolver};
use crate::types::{Profile, PublicAccess, Resume};
use crate::utils::output_file_name;
use crate::web::types::*;

use chrono::Utc;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;

fn warn_on_fallback(requested: &str, rendered: &Rendered) {
    if rendered.fallback {
        app_log!(
            warn,
            "Template '{}' not found, rendered '{}'",
            requested,
            rendered.document.template_id
        );
    }
}

fn html_response(rendered: Rendered) -> HtmlResponse {
    let Rendered { document, fallback } = rendered;
    HtmlResponse {
        filename: Some(output_file_name(
            &document.header.name,
            &document.template_id,
            "html",
        )),
        template_id: document.template_id.clone(),
        html: document.to_html(),
        fallback,
    }
}

pub async fn render_handler(request: Json<RenderRequest>, state: &State<AppState>) -> HtmlResponse {
    let request = request.into_inner();
    app_log!(info, "Rendering template '{}'", request.template_id);

    let rendered = state.resolver.render_tracked(
        &request.template_id,
        request.profile.as_ref(),
        request.customizations.as_ref(),
    );
    warn_on_fallback(&request.template_id, &rendered);
    html_response(rendered)
}

pub async fn render_text_handler(
    request: Json<RenderRequest>,
    state: &State<AppState>,
) -> Json<DataResponse<RenderedText>> {
    let request = request.into_inner();

    let Rendered { document, fallback } = state.resolver.render_tracked(
        &request.template_id,
        request.profile.as_ref(),
        request.customizations.as_ref(),
    );

    Json(DataResponse::success(
        format!("Rendered with '{}'", document.template_id),
        RenderedText {
            template_id: document.template_id.clone(),
            fallback,
            text: document.to_plain_text(),
        },
    ))
}

fn render_resume(
    resolver: &TemplateResolver,
    resume: &Resume,
    profile: Option<&Profile>,
) -> HtmlResponse {
    let rendered = resolver.render_resume(resume, profile);
    warn_on_fallback(&resume.template_id, &rendered);
    html_response(rendered)
}

pub async fn render_resume_handler(
    request: Json<ResumeRenderRequest>,
    state: &State<AppState>,
) -> HtmlResponse {
    let request = request.into_inner();
    app_log!(
        info,
        "Rendering resume '{}' (frozen: {})",
        request.resume.title,
        request.resume.is_frozen()
    );

    render_resume(&state.resolver, &request.resume, request.profile.as_ref())
}

pub async fn render_public_handler(
    request: Json<PublicRenderRequest>,
    state: &State<AppState>,
) -> Result<HtmlResponse, ApiError> {
    let request = request.into_inner();
    let access = request
        .resume
        .public_access(Utc::now(), request.password_verified);

    let (status, error, error_code, suggestion) = match access {
        PublicAccess::Granted => {
            return Ok(render_resume(
                &state.resolver,
                &request.resume,
                request.profile.as_ref(),
            ))
        }
        PublicAccess::PasswordRequired => (
            Status::Unauthorized,
            "This resume is password protected",
            "PASSWORD_REQUIRED",
            "Verify the share password before rendering",
        ),
        PublicAccess::Private => (
            Status::NotFound,
            "Resume not found",
            "RESUME_NOT_FOUND",
            "Check the share link",
        ),
        PublicAccess::Expired => (
            Status::Forbidden,
            "This share link has expired",
            "LINK_EXPIRED",
            "Ask the owner for a new link",
        ),
    };

    app_log!(
        info,
        "Public render of '{}' refused: {}",
        request.resume.title,
        error_code
    );

    Err(StandardErrorResponse::new(
        error.to_string(),
        error_code.to_string(),
        vec![suggestion.to_string()],
    )
    .with_status(status))
}
