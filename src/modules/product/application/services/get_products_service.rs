use async_trait::async_trait;
use uuid::Uuid;

use crate::product::application::{
    domain::Product,
    ports::{
        incoming::use_cases::{
            GetProductError, GetProductUseCase, GetProductsError, GetProductsUseCase,
        },
        outgoing::ProductQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetProductsService<Q>
where
    Q: ProductQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetProductsService<Q>
where
    Q: ProductQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProductsUseCase for GetProductsService<Q>
where
    Q: ProductQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Product>, GetProductsError> {
        self.query
            .list_products()
            .await
            .map_err(|e| GetProductsError::RepositoryError(e.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct GetProductService<Q>
where
    Q: ProductQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetProductService<Q>
where
    Q: ProductQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProductUseCase for GetProductService<Q>
where
    Q: ProductQuery + Send + Sync,
{
    async fn execute(&self, product_id: Uuid) -> Result<Product, GetProductError> {
        self.query
            .find_by_id(product_id)
            .await
            .map_err(|e| GetProductError::RepositoryError(e.to_string()))?
            .ok_or(GetProductError::ProductNotFound)
    }
}
