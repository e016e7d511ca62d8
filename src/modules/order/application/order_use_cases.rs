use std::sync::Arc;

use crate::order::application::ports::incoming::use_cases::{
    CancelOrderUseCase, CreateOrderUseCase, DeleteOrderUseCase, GetOrderUseCase,
    GetOrdersUseCase, UpdateOrderUseCase,
};

#[derive(Clone)]
pub struct OrderUseCases {
    pub create: Arc<dyn CreateOrderUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetOrderUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetOrdersUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateOrderUseCase + Send + Sync>,
    pub cancel: Arc<dyn CancelOrderUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteOrderUseCase + Send + Sync>,
}
