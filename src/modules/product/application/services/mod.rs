mod create_product_service;
mod delete_product_service;
mod get_products_service;
mod update_product_service;

pub use create_product_service::CreateProductService;
pub use delete_product_service::DeleteProductService;
pub use get_products_service::{GetProductService, GetProductsService};
pub use update_product_service::UpdateProductService;
