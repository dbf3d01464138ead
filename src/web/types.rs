// src/web/types.rs
use rocket::http::{ContentType, Header, Status};
use rocket::response::{self, status, Responder};
use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};
use rocket::{Request, Response};

use crate::core::ServiceClient;
use crate::templates::TemplateResolver;
use crate::types::{Customizations, Profile, Resume};

/// Application state shared by all handlers (rocket managed state)
pub struct AppState {
    pub resolver: TemplateResolver,
    pub service: Option<ServiceClient>,
}

// ===== HTML responder =====

pub struct HtmlResponse {
    pub html: String,
    pub template_id: String,
    pub fallback: bool,
    pub filename: Option<String>,
}

impl<'r> Responder<'r, 'static> for HtmlResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let mut binding = Response::build();
        let mut response = binding
            .header(ContentType::HTML)
            .header(Header::new("X-Resume-Template", self.template_id))
            .header(Header::new(
                "X-Resume-Template-Fallback",
                self.fallback.to_string(),
            ))
            .sized_body(self.html.len(), std::io::Cursor::new(self.html));

        if let Some(filename) = self.filename {
            response = response.raw_header(
                "Content-Disposition",
                format!("inline; filename=\"{}\"", filename),
            );
        }

        response.ok()
    }
}

// ===== Standard response types =====

#[derive(Serialize)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum ResponseType {
    Text,
    Data,
    Error,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TextResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct DataResponse<T> {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
    pub data: T,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardErrorResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
}

pub type ApiError = status::Custom<Json<StandardErrorResponse>>;

impl TextResponse {
    pub fn success(message: String) -> Self {
        Self {
            response_type: ResponseType::Text,
            success: true,
            message,
        }
    }
}

impl<T> DataResponse<T> {
    pub fn success(message: String, data: T) -> Self {
        Self {
            response_type: ResponseType::Data,
            success: true,
            message,
            data,
        }
    }
}

impl StandardErrorResponse {
    pub fn new(error: String, error_code: String, suggestions: Vec<String>) -> Self {
        Self {
            response_type: ResponseType::Error,
            success: false,
            error,
            error_code,
            suggestions,
        }
    }

    /// Wrap with an HTTP status
    pub fn with_status(self, status: Status) -> ApiError {
        status::Custom(status, Json(self))
    }
}

// ===== Requests =====

#[derive(Deserialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct RenderRequest {
    #[serde(default)]
    #[serde(deserialize_with = "crate::types::profile::null_as_default")]
    pub template_id: String,
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub customizations: Option<Customizations>,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct ResumeRenderRequest {
    pub resume: Resume,
    #[serde(default)]
    pub profile: Option<Profile>,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct PublicRenderRequest {
    pub resume: Resume,
    #[serde(default)]
    pub profile: Option<Profile>,
    /// Set by the REST API once it has checked the share password
    #[serde(default)]
    pub password_verified: bool,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct AtsScoreRequest {
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub customizations: Option<Customizations>,
    #[serde(default)]
    pub job_description: Option<String>,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct EnhanceRequest {
    pub text: String,
    #[serde(default = "default_enhance_section")]
    pub section: String,
}

fn default_enhance_section() -> String {
    "summary".to_string()
}

// ===== Response payloads =====

#[derive(Serialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct TemplateInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct TemplateCatalog {
    pub templates: Vec<TemplateInfo>,
    pub aliases: Vec<(String, String)>,
    pub generated_count: usize,
    pub generated_categories: Vec<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct EnhancedText {
    pub section: String,
    pub enhanced_text: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct RenderedText {
    pub template_id: String,
    pub fallback: bool,
    pub text: String,
}
