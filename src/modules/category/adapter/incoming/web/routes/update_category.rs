use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::{AdminOnly, Authorized};
use crate::category::application::ports::incoming::use_cases::{
    UpdateCategoryCommand, UpdateCategoryError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[put("/api/v1/categories/{id}")]
pub async fn update_category_handler(
    admin: Authorized<AdminOnly>,
    path: web::Path<Uuid>,
    req: web::Json<UpdateCategoryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let category_id = path.into_inner();
    let req = req.into_inner();

    let command =
        match UpdateCategoryCommand::new(admin.actor, category_id, req.name, req.description) {
            Ok(cmd) => cmd,
            Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
        };

    match data.category.update.execute(command).await {
        Ok(category) => {
            info!(category_id = %category.id, "Category updated");
            ApiResponse::success(category)
        }
        Err(UpdateCategoryError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "You do not have permission to manage the catalog")
        }
        Err(UpdateCategoryError::CategoryNotFound) => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }
        Err(UpdateCategoryError::CategoryAlreadyExists) => {
            ApiResponse::conflict("CATEGORY_ALREADY_EXISTS", "Category already exists")
        }
        Err(UpdateCategoryError::RepositoryError(e)) => {
            error!("Repository error updating category {}: {}", category_id, e);
            ApiResponse::internal_error()
        }
    }
}
