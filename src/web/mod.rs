// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use handlers::*;
pub use types::*;

use crate::app_log;
use crate::core::{ConfigManager, ServiceClient};
use crate::templates::TemplateConfig;
use crate::types::response::AtsScoreResponse;
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new(
            "Access-Control-Expose-Headers",
            "X-Resume-Template, X-Resume-Template-Fallback, Content-Disposition",
        ));
    }
}

#[get("/health")]
pub async fn health(state: &State<AppState>) -> Json<TextResponse> {
    handlers::health_handler(state).await
}

#[get("/templates")]
pub async fn get_templates(state: &State<AppState>) -> Json<DataResponse<TemplateCatalog>> {
    handlers::get_templates_handler(state).await
}

#[get("/templates/generated?<category>")]
pub async fn get_generated_templates(
    category: Option<String>,
    state: &State<AppState>,
) -> Json<DataResponse<Vec<TemplateConfig>>> {
    handlers::get_generated_templates_handler(category, state).await
}

#[get("/templates/generated/<id>")]
pub async fn get_generated_template(
    id: &str,
    state: &State<AppState>,
) -> Result<Json<DataResponse<TemplateConfig>>, ApiError> {
    handlers::get_generated_template_handler(id, state).await
}

#[post("/render", data = "<request>")]
pub async fn render(request: Json<RenderRequest>, state: &State<AppState>) -> HtmlResponse {
    handlers::render_handler(request, state).await
}

#[post("/render/text", data = "<request>")]
pub async fn render_text(
    request: Json<RenderRequest>,
    state: &State<AppState>,
) -> Json<DataResponse<RenderedText>> {
    handlers::render_text_handler(request, state).await
}

#[post("/resumes/render", data = "<request>")]
pub async fn render_resume(
    request: Json<ResumeRenderRequest>,
    state: &State<AppState>,
) -> HtmlResponse {
    handlers::render_resume_handler(request, state).await
}

#[post("/public/render", data = "<request>")]
pub async fn render_public(
    request: Json<PublicRenderRequest>,
    state: &State<AppState>,
) -> Result<HtmlResponse, ApiError> {
    handlers::render_public_handler(request, state).await
}

#[post("/ai/ats-score", data = "<request>")]
pub async fn ats_score(
    request: Json<AtsScoreRequest>,
    state: &State<AppState>,
) -> Result<Json<DataResponse<AtsScoreResponse>>, ApiError> {
    handlers::ats_score_handler(request, state).await
}

#[post("/ai/enhance", data = "<request>")]
pub async fn enhance(
    request: Json<EnhanceRequest>,
    state: &State<AppState>,
) -> Result<Json<DataResponse<EnhancedText>>, ApiError> {
    handlers::enhance_handler(request, state).await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check your request JSON format".to_string(),
            "Verify all required fields are present".to_string(),
        ],
    ))
}

#[rocket::catch(404)]
pub fn not_found() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Endpoint not found".to_string(),
        "NOT_FOUND".to_string(),
        vec!["All endpoints live under /api".to_string()],
    ))
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Request body does not match the expected shape".to_string(),
        "INVALID_BODY".to_string(),
        vec!["Profile and resume fields use camelCase names".to_string()],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec![
            "Try again in a few moments".to_string(),
            "Contact support if the problem persists".to_string(),
        ],
    ))
}

/// Attach fairings, state, catchers and routes to a rocket instance
pub fn mount(rocket: Rocket<Build>, state: AppState) -> Rocket<Build> {
    rocket
        .attach(Cors)
        .manage(state)
        .register(
            "/api",
            catchers![bad_request, not_found, unprocessable, internal_error],
        )
        .mount(
            "/api",
            routes![
                health,
                get_templates,
                get_generated_templates,
                get_generated_template,
                render,
                render_text,
                render_resume,
                render_public,
                ats_score,
                enhance,
                options,
            ],
        )
}

// Main server start function
pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    config.ensure_directories().await?;

    let resolver = crate::build_resolver(&config)?;
    let service = match &config.service.ats_service_url {
        Some(url) => Some(ServiceClient::new(url, config.service.timeout_seconds)?),
        None => {
            app_log!(warn, "ATS_SERVICE_URL not set, AI endpoints will return 503");
            None
        }
    };

    app_log!(info, "Starting resume renderer ({})", config.environment_name);
    app_log!(
        info,
        "{} static templates, {} generated templates",
        resolver.registry().len(),
        resolver.store().len()
    );

    let figment = rocket::Config::figment()
        .merge(("address", config.server.address.clone()))
        .merge(("port", config.server.port));

    mount(rocket::custom(figment), AppState { resolver, service })
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Server failed: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{GeneratedTemplateStore, TemplateRegistry, TemplateResolver};
    use rocket::http::ContentType;
    use rocket::local::blocking::{Client, LocalResponse};
    use serde_json::{json, Value};

    fn client_with(service: Option<ServiceClient>) -> Client {
        let state = AppState {
            resolver: TemplateResolver::new(
                TemplateRegistry::with_builtin_templates(),
                GeneratedTemplateStore::generate_catalog(),
            ),
            service,
        };
        Client::tracked(mount(rocket::build(), state)).expect("valid rocket instance")
    }

    fn client() -> Client {
        client_with(None)
    }

    fn profile() -> Value {
        json!({
            "personalInfo": { "fullName": "Grace Hopper", "headline": "Rear Admiral" },
            "contact": { "email": "grace@navy.mil" },
            "summary": "Compiler pioneer",
            "experience": [
                { "company": "Harvard", "position": "Programmer", "highlights": ["Mark I"] }
            ],
            "projects": [ { "name": "COBOL" } ]
        })
    }

    fn post_json<'a>(client: &'a Client, uri: &'static str, body: Value) -> LocalResponse<'a> {
        client
            .post(uri)
            .header(ContentType::JSON)
            .body(body.to_string())
            .dispatch()
    }

    #[test]
    fn test_health() {
        let client = client();
        let response = client.get("/api/health").dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(
            response.headers().get_one("Access-Control-Allow-Origin"),
            Some("*")
        );
        let body: Value = response.into_json().unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["type"], "text");
    }

    #[test]
    fn test_list_templates() {
        let client = client();
        let body: Value = client.get("/api/templates").dispatch().into_json().unwrap();

        let templates = body["data"]["templates"].as_array().unwrap();
        assert_eq!(templates.len(), 12);
        assert!(templates.iter().any(|t| t["id"] == "two-column-modern"));
        assert!(body["data"]["generatedCount"].as_u64().unwrap() > 0);
    }

    #[test]
    fn test_generated_templates_by_category() {
        let client = client();
        let body: Value = client
            .get("/api/templates/generated?category=Creative")
            .dispatch()
            .into_json()
            .unwrap();

        let configs = body["data"].as_array().unwrap();
        assert!(!configs.is_empty());
        assert!(configs
            .iter()
            .all(|c| c["metadata"]["category"] == "creative"));
    }

    #[test]
    fn test_generated_template_lookup() {
        let client = client();
        let response = client
            .get("/api/templates/generated/OCEAN-SIDEBAR-LEFT-SERIF")
            .dispatch();
        assert_eq!(response.status(), Status::Ok);
        let body: Value = response.into_json().unwrap();
        assert_eq!(body["data"]["id"], "ocean-sidebar-left-serif");

        let response = client.get("/api/templates/generated/nope").dispatch();
        assert_eq!(response.status(), Status::NotFound);
        let body: Value = response.into_json().unwrap();
        assert_eq!(body["error_code"], "TEMPLATE_NOT_FOUND");
    }

    #[test]
    fn test_render_html() {
        let client = client();
        let response = post_json(
            &client,
            "/api/render",
            json!({ "templateId": "CLASSIC", "profile": profile() }),
        );

        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.content_type(), Some(ContentType::HTML));
        assert_eq!(response.headers().get_one("X-Resume-Template"), Some("classic"));
        assert_eq!(
            response.headers().get_one("X-Resume-Template-Fallback"),
            Some("false")
        );
        let html = response.into_string().unwrap();
        assert!(html.contains("Grace Hopper"));
        assert!(html.contains("COBOL"));
    }

    #[test]
    fn test_render_unknown_template_falls_back() {
        let client = client();
        let response = post_json(&client, "/api/render", json!({ "templateId": "nonexistent-id" }));

        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.headers().get_one("X-Resume-Template"), Some("modern"));
        assert_eq!(
            response.headers().get_one("X-Resume-Template-Fallback"),
            Some("true")
        );
    }

    #[test]
    fn test_render_layout_override_hides_sections() {
        let client = client();
        let body: Value = post_json(
            &client,
            "/api/render/text",
            json!({
                "templateId": "modern",
                "profile": profile(),
                "customizations": { "layout": "single-column", "hiddenSections": ["projects"] }
            }),
        )
        .into_json()
        .unwrap();

        assert_eq!(body["data"]["templateId"], "custom-single-column");
        let text = body["data"]["text"].as_str().unwrap();
        assert!(text.contains("HARVARD") || text.contains("Harvard"));
        assert!(!text.contains("COBOL"));
    }

    #[test]
    fn test_render_resume_uses_snapshot() {
        let client = client();
        let mut snapshot = profile();
        snapshot["personalInfo"]["fullName"] = json!("Frozen Name");

        let response = post_json(
            &client,
            "/api/resumes/render",
            json!({
                "resume": { "title": "Navy", "templateId": "elegant", "content": snapshot },
                "profile": profile()
            }),
        );

        assert_eq!(response.headers().get_one("X-Resume-Template"), Some("elegant"));
        let html = response.into_string().unwrap();
        assert!(html.contains("Frozen Name"));
        assert!(!html.contains("Grace Hopper"));
    }

    #[test]
    fn test_public_render_visibility() {
        let client = client();
        let resume = |visibility: &str| {
            json!({ "title": "Public", "templateId": "modern", "visibility": visibility })
        };

        let response = post_json(
            &client,
            "/api/public/render",
            json!({ "resume": resume("public"), "profile": profile() }),
        );
        assert_eq!(response.status(), Status::Ok);

        let response = post_json(
            &client,
            "/api/public/render",
            json!({ "resume": resume("private") }),
        );
        assert_eq!(response.status(), Status::NotFound);

        let response = post_json(
            &client,
            "/api/public/render",
            json!({ "resume": resume("password") }),
        );
        assert_eq!(response.status(), Status::Unauthorized);
        let body: Value = response.into_json().unwrap();
        assert_eq!(body["error_code"], "PASSWORD_REQUIRED");

        let response = post_json(
            &client,
            "/api/public/render",
            json!({ "resume": resume("password"), "passwordVerified": true }),
        );
        assert_eq!(response.status(), Status::Ok);

        let mut expired = resume("expiring");
        expired["expiresAt"] = json!("2000-01-01T00:00:00Z");
        let response = post_json(&client, "/api/public/render", json!({ "resume": expired }));
        assert_eq!(response.status(), Status::Forbidden);
    }

    #[test]
    fn test_ai_endpoints_without_service() {
        let client = client();
        let response = post_json(&client, "/api/ai/ats-score", json!({ "profile": profile() }));
        assert_eq!(response.status(), Status::ServiceUnavailable);

        let response = post_json(&client, "/api/ai/enhance", json!({ "text": "hello" }));
        assert_eq!(response.status(), Status::ServiceUnavailable);
    }

    #[test]
    fn test_ats_score_upstream_failure_is_bad_gateway() {
        let service = ServiceClient::new("http://127.0.0.1:9", 1).unwrap();
        let client = client_with(Some(service));

        let response = post_json(&client, "/api/ai/ats-score", json!({ "profile": profile() }));
        assert_eq!(response.status(), Status::BadGateway);
        let body: Value = response.into_json().unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error_code"], "ATS_SCORE_FAILED");
    }

    #[test]
    fn test_enhance_rejects_blank_text() {
        let service = ServiceClient::new("http://127.0.0.1:9", 1).unwrap();
        let client = client_with(Some(service));

        let response = post_json(&client, "/api/ai/enhance", json!({ "text": "   " }));
        assert_eq!(response.status(), Status::UnprocessableEntity);
        let body: Value = response.into_json().unwrap();
        assert_eq!(body["error_code"], "EMPTY_TEXT");
    }

    #[test]
    fn test_render_accepts_null_fields() {
        let client = client();
        let bodies = [
            json!({ "templateId": null }),
            json!({ "profile": { "summary": null, "experience": null } }),
            json!({
                "templateId": "classic",
                "profile": {
                    "personalInfo": { "fullName": "Grace Hopper" },
                    "experience": [ { "company": null, "position": "Dev" } ],
                    "skills": null
                }
            }),
            json!({ "customizations": { "hiddenSections": null, "layout": null } }),
        ];

        for body in bodies {
            let response = post_json(&client, "/api/render", body.clone());
            assert_eq!(response.status(), Status::Ok, "{}", body);
        }

        let html = post_json(
            &client,
            "/api/render",
            json!({
                "templateId": "classic",
                "profile": { "experience": [ { "company": null, "position": "Dev" } ] }
            }),
        )
        .into_string()
        .unwrap();
        assert!(html.contains("Dev"));
    }

    #[test]
    fn test_ats_score_rejects_empty_profile() {
        let service = ServiceClient::new("http://127.0.0.1:9", 1).unwrap();
        let client = client_with(Some(service));

        let response = post_json(&client, "/api/ai/ats-score", json!({}));
        assert_eq!(response.status(), Status::UnprocessableEntity);
        let body: Value = response.into_json().unwrap();
        assert_eq!(body["error_code"], "EMPTY_PROFILE");
    }

    #[test]
    fn test_malformed_body_uses_error_shape() {
        let client = client();
        let response = client
            .post("/api/render")
            .header(ContentType::JSON)
            .body("{ not json")
            .dispatch();

        assert_eq!(response.status(), Status::BadRequest);
        let body: Value = response.into_json().unwrap();
        assert_eq!(body["success"], false);
    }
}
