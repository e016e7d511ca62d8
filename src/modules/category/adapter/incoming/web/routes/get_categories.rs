use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::category::application::ports::incoming::use_cases::{
    GetCategoriesError, GetCategoryError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/v1/categories")]
pub async fn get_categories_handler(data: web::Data<AppState>) -> impl Responder {
    match data.category.get_list.execute().await {
        Ok(categories) => ApiResponse::success(categories),
        Err(GetCategoriesError::RepositoryError(e)) => {
            error!("Repository error listing categories: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/v1/categories/{id}")]
pub async fn get_category_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let category_id = path.into_inner();

    match data.category.get_single.execute(category_id).await {
        Ok(category) => ApiResponse::success(category),
        Err(GetCategoryError::CategoryNotFound) => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }
        Err(GetCategoryError::RepositoryError(e)) => {
            error!("Repository error fetching category {}: {}", category_id, e);
            ApiResponse::internal_error()
        }
    }
}
