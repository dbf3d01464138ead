// src/web/handlers/template_handlers.rs
use crate::app_log;
use crate::templates::resolver::normalize_id;
use crate::templates::TemplateConfig;
use crate::web::types::*;

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;

pub async fn get_templates_handler(state: &State<AppState>) -> Json<DataResponse<TemplateCatalog>> {
    let registry = state.resolver.registry();
    let store = state.resolver.store();

    let templates: Vec<TemplateInfo> = registry
        .list()
        .into_iter()
        .map(|template| TemplateInfo {
            id: template.id().to_string(),
            name: template.name().to_string(),
            description: template.description().to_string(),
            category: template.category().to_string(),
        })
        .collect();

    let mut aliases: Vec<(String, String)> = registry
        .aliases()
        .map(|(alias, target)| (alias.to_string(), target.to_string()))
        .collect();
    aliases.sort();

    let message = format!("Found {} templates", templates.len());
    Json(DataResponse::success(
        message,
        TemplateCatalog {
            templates,
            aliases,
            generated_count: store.len(),
            generated_categories: store.categories(),
        },
    ))
}

pub async fn get_generated_templates_handler(
    category: Option<String>,
    state: &State<AppState>,
) -> Json<DataResponse<Vec<TemplateConfig>>> {
    let store = state.resolver.store();

    let configs: Vec<TemplateConfig> = match category.as_deref().map(str::trim) {
        Some(category) if !category.is_empty() => {
            store.by_category(category).into_iter().cloned().collect()
        }
        _ => store.list().into_iter().cloned().collect(),
    };

    app_log!(
        debug,
        "Listing {} generated templates (category: {:?})",
        configs.len(),
        category
    );

    let message = format!("Found {} generated templates", configs.len());
    Json(DataResponse::success(message, configs))
}

pub async fn get_generated_template_handler(
    id: &str,
    state: &State<AppState>,
) -> Result<Json<DataResponse<TemplateConfig>>, ApiError> {
    match state.resolver.store().get(&normalize_id(id)) {
        Some(config) => Ok(Json(DataResponse::success(
            format!("Template '{}'", config.id),
            config.clone(),
        ))),
        None => Err(StandardErrorResponse::new(
            format!("Generated template '{}' not found", id),
            "TEMPLATE_NOT_FOUND".to_string(),
            vec!["List available ids with GET /api/templates/generated".to_string()],
        )
        .with_status(Status::NotFound)),
    }
}
