mod create_product;
mod delete_product;
mod get_products;
mod update_product;

pub use create_product::{
    CreateProductCommand, CreateProductCommandError, CreateProductError, CreateProductUseCase,
};
pub use delete_product::{DeleteProductError, DeleteProductUseCase};
pub use get_products::{GetProductError, GetProductUseCase, GetProductsError, GetProductsUseCase};
pub use update_product::{
    ProductPatch, UpdateProductCommand, UpdateProductCommandError, UpdateProductError,
    UpdateProductUseCase,
};
