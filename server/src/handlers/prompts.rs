use actix_web::{web, HttpResponse, Result};
use nebula_core::error::StoreError;
use nebula_core::services::prompt::{PromptService, PromptServiceImpl};
use nebula_core::store::PromptStore;
use serde_json::{Map, Value};

pub async fn list_prompts(store: web::Data<PromptStore>) -> Result<HttpResponse> {
    let service = PromptServiceImpl::new(store.get_ref().clone());

    match service.list() {
        Ok(prompts) => Ok(HttpResponse::Ok().json(prompts)),
        Err(e) => {
            tracing::error!("Failed to list prompts: {:?}", e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "message": "Error fetching prompts",
                "error": e.to_string()
            })))
        }
    }
}

pub async fn create_prompt(
    req: web::Json<Map<String, Value>>,
    store: web::Data<PromptStore>,
) -> Result<HttpResponse> {
    let service = PromptServiceImpl::new(store.get_ref().clone());

    match service.create(req.into_inner()) {
        Ok(prompt) => Ok(HttpResponse::Created().json(prompt)),
        Err(e) => {
            tracing::error!("Failed to create prompt: {:?}", e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "message": "Error creating prompt",
                "error": e.to_string()
            })))
        }
    }
}

pub async fn update_prompt(
    path: web::Path<String>,
    req: web::Json<Map<String, Value>>,
    store: web::Data<PromptStore>,
) -> Result<HttpResponse> {
    let service = PromptServiceImpl::new(store.get_ref().clone());
    let id = path.into_inner();

    match service.update(&id, req.into_inner()) {
        Ok(prompt) => Ok(HttpResponse::Ok().json(prompt)),
        Err(StoreError::NotFound(_)) => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "message": "Prompt not found"
        }))),
        Err(e) => {
            tracing::error!("Failed to update prompt {}: {:?}", id, e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "message": "Error updating prompt",
                "error": e.to_string()
            })))
        }
    }
}

pub async fn delete_prompt(
    path: web::Path<String>,
    store: web::Data<PromptStore>,
) -> Result<HttpResponse> {
    let service = PromptServiceImpl::new(store.get_ref().clone());
    let id = path.into_inner();

    match service.delete(&id) {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(StoreError::NotFound(_)) => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "message": "Prompt not found"
        }))),
        Err(e) => {
            tracing::error!("Failed to delete prompt {}: {:?}", id, e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "message": "Error deleting prompt",
                "error": e.to_string()
            })))
        }
    }
}
