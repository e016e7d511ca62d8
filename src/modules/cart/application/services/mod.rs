mod create_cart_service;
mod delete_cart_service;
mod get_cart_service;
mod get_my_cart_service;
mod update_cart_service;

pub use create_cart_service::CreateCartService;
pub use delete_cart_service::DeleteCartService;
pub use get_cart_service::{GetCartService, GetCartsService};
pub use get_my_cart_service::GetMyCartService;
pub use update_cart_service::UpdateCartService;
