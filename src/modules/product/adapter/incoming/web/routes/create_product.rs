use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::{AdminOnly, Authorized};
use crate::product::application::ports::incoming::use_cases::{
    CreateProductCommand, CreateProductError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub category_id: Uuid,
    pub description: Option<String>,
    pub price_cents: i64,
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub images: Vec<String>,
}

#[post("/api/v1/products")]
pub async fn create_product_handler(
    admin: Authorized<AdminOnly>,
    req: web::Json<CreateProductRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = match CreateProductCommand::new(
        admin.actor,
        &req.name,
        req.category_id,
        req.description,
        req.price_cents,
        req.stock,
        req.images,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.product.create.execute(command).await {
        Ok(product) => {
            info!(product_id = %product.id, category_id = %product.category_id, "Product created");
            ApiResponse::created(product)
        }
        Err(CreateProductError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "You do not have permission to manage the catalog")
        }
        Err(CreateProductError::CategoryNotFound) => {
            warn!(category_id = %req.category_id, "Product references unknown category");
            ApiResponse::bad_request("INVALID_CATEGORY", "Category does not exist")
        }
        Err(CreateProductError::RepositoryError(e)) => {
            error!("Repository error creating product: {}", e);
            ApiResponse::internal_error()
        }
    }
}
