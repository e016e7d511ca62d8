mod create_product;
mod delete_product;
mod get_products;
mod update_product;

pub use create_product::create_product_handler;
pub use delete_product::delete_product_handler;
pub use get_products::{get_product_handler, get_products_handler};
pub use update_product::update_product_handler;
