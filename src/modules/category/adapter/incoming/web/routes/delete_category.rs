use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::{AdminOnly, Authorized};
use crate::category::application::ports::incoming::use_cases::DeleteCategoryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/v1/categories/{id}")]
pub async fn delete_category_handler(
    admin: Authorized<AdminOnly>,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let category_id = path.into_inner();

    match data.category.delete.execute(admin.actor, category_id).await {
        Ok(()) => {
            info!(category_id = %category_id, "Category deleted");
            ApiResponse::message("Category deleted successfully")
        }
        Err(DeleteCategoryError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "You do not have permission to manage the catalog")
        }
        Err(DeleteCategoryError::CategoryNotFound) => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }
        Err(DeleteCategoryError::RepositoryError(e)) => {
            error!("Repository error deleting category {}: {}", category_id, e);
            ApiResponse::internal_error()
        }
    }
}
