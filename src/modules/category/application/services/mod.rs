mod create_category_service;
mod delete_category_service;
mod get_categories_service;
mod update_category_service;

pub use create_category_service::CreateCategoryService;
pub use delete_category_service::DeleteCategoryService;
pub use get_categories_service::{GetCategoriesService, GetCategoryService};
pub use update_category_service::UpdateCategoryService;
