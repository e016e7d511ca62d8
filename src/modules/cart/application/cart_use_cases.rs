use std::sync::Arc;

use crate::cart::application::ports::incoming::use_cases::{
    CreateCartUseCase, DeleteCartUseCase, GetCartUseCase, GetCartsUseCase, GetMyCartUseCase,
    UpdateCartUseCase,
};

#[derive(Clone)]
pub struct CartUseCases {
    pub get_mine: Arc<dyn GetMyCartUseCase + Send + Sync>,
    pub create: Arc<dyn CreateCartUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetCartUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetCartsUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateCartUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCartUseCase + Send + Sync>,
}
