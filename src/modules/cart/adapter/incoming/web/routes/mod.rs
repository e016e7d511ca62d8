mod create_cart;
mod delete_cart;
mod get_cart;
mod get_my_cart;
mod update_cart;

pub use create_cart::create_cart_handler;
pub use delete_cart::delete_cart_handler;
pub use get_cart::{get_cart_handler, get_carts_handler};
pub use get_my_cart::get_my_cart_handler;
pub use update_cart::update_cart_handler;
