use async_trait::async_trait;

use crate::auth::application::domain::Capability;
use crate::category::application::ports::outgoing::CategoryQuery;
use crate::product::application::{
    domain::Product,
    ports::{
        incoming::use_cases::{CreateProductCommand, CreateProductError, CreateProductUseCase},
        outgoing::{CreateProductData, ProductRepository},
    },
};

#[derive(Debug, Clone)]
pub struct CreateProductService<R, C>
where
    R: ProductRepository + Send + Sync,
    C: CategoryQuery + Send + Sync,
{
    repository: R,
    categories: C,
}

impl<R, C> CreateProductService<R, C>
where
    R: ProductRepository + Send + Sync,
    C: CategoryQuery + Send + Sync,
{
    pub fn new(repository: R, categories: C) -> Self {
        Self {
            repository,
            categories,
        }
    }
}

#[async_trait]
impl<R, C> CreateProductUseCase for CreateProductService<R, C>
where
    R: ProductRepository + Send + Sync,
    C: CategoryQuery + Send + Sync,
{
    async fn execute(&self, command: CreateProductCommand) -> Result<Product, CreateProductError> {
        if !command.actor().can(Capability::ManageCatalog) {
            return Err(CreateProductError::Forbidden);
        }

        let category = self
            .categories
            .find_by_id(command.category_id())
            .await
            .map_err(|e| CreateProductError::RepositoryError(e.to_string()))?
            .ok_or(CreateProductError::CategoryNotFound)?;

        let data = CreateProductData {
            name: command.name().to_string(),
            category_id: category.id,
            category_name: category.name,
            description: command.description().to_string(),
            price_cents: command.price_cents(),
            stock: command.stock(),
            images: command.images().to_vec(),
        };

        self.repository
            .create_product(data)
            .await
            .map_err(|e| CreateProductError::RepositoryError(e.to_string()))
    }
}
