use std::sync::Arc;

use crate::product::application::ports::incoming::use_cases::{
    CreateProductUseCase, DeleteProductUseCase, GetProductUseCase, GetProductsUseCase,
    UpdateProductUseCase,
};

#[derive(Clone)]
pub struct ProductUseCases {
    pub create: Arc<dyn CreateProductUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProductUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteProductUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetProductsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetProductUseCase + Send + Sync>,
}
