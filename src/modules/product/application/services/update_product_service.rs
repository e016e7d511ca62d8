use async_trait::async_trait;

use crate::auth::application::domain::Capability;
use crate::category::application::ports::outgoing::CategoryQuery;
use crate::product::application::{
    domain::Product,
    ports::{
        incoming::use_cases::{UpdateProductCommand, UpdateProductError, UpdateProductUseCase},
        outgoing::{ProductRepository, ProductRepositoryError, UpdateProductData},
    },
};

#[derive(Debug, Clone)]
pub struct UpdateProductService<R, C>
where
    R: ProductRepository + Send + Sync,
    C: CategoryQuery + Send + Sync,
{
    repository: R,
    categories: C,
}

impl<R, C> UpdateProductService<R, C>
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
impl<R, C> UpdateProductUseCase for UpdateProductService<R, C>
where
    R: ProductRepository + Send + Sync,
    C: CategoryQuery + Send + Sync,
{
    async fn execute(&self, command: UpdateProductCommand) -> Result<Product, UpdateProductError> {
        if !command.actor().can(Capability::ManageCatalog) {
            return Err(UpdateProductError::Forbidden);
        }

        let patch = command.patch();

        let category = match patch.category_id {
            Some(category_id) => {
                let category = self
                    .categories
                    .find_by_id(category_id)
                    .await
                    .map_err(|e| UpdateProductError::RepositoryError(e.to_string()))?
                    .ok_or(UpdateProductError::CategoryNotFound)?;
                Some((category.id, category.name))
            }
            None => None,
        };

        let data = UpdateProductData {
            name: patch.name.clone(),
            category,
            description: patch.description.clone(),
            price_cents: patch.price_cents,
            stock: patch.stock,
            images: patch.images.clone(),
        };

        self.repository
            .update_product(command.product_id(), data)
            .await
            .map_err(|e| match e {
                ProductRepositoryError::ProductNotFound => UpdateProductError::ProductNotFound,
                other => UpdateProductError::RepositoryError(other.to_string()),
            })
    }
}
