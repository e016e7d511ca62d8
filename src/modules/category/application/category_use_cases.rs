use std::sync::Arc;

use crate::category::application::ports::incoming::use_cases::{
    CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoriesUseCase, GetCategoryUseCase,
    UpdateCategoryUseCase,
};

#[derive(Clone)]
pub struct CategoryUseCases {
    pub create: Arc<dyn CreateCategoryUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateCategoryUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCategoryUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetCategoriesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetCategoryUseCase + Send + Sync>,
}
