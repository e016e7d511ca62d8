use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::auth::adapter::incoming::web::extractors::{AdminOnly, Authorized};
use crate::category::application::ports::incoming::use_cases::{
    CreateCategoryCommand, CreateCategoryError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub description: Option<String>,
}

#[post("/api/v1/categories")]
pub async fn create_category_handler(
    admin: Authorized<AdminOnly>,
    req: web::Json<CreateCategoryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = match CreateCategoryCommand::new(admin.actor, &req.name, req.description) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.category.create.execute(command).await {
        Ok(category) => {
            info!(category_id = %category.id, name = %category.name, "Category created");
            ApiResponse::created(category)
        }
        Err(CreateCategoryError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "You do not have permission to manage the catalog")
        }
        Err(CreateCategoryError::CategoryAlreadyExists) => {
            warn!(name = %req.name, "Duplicate category name");
            ApiResponse::conflict("CATEGORY_ALREADY_EXISTS", "Category already exists")
        }
        Err(CreateCategoryError::RepositoryError(e)) => {
            error!("Repository error creating category: {}", e);
            ApiResponse::internal_error()
        }
    }
}
