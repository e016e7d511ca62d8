mod cancel_order;
mod create_order;
mod delete_order;
mod get_order;
mod update_order;

pub use cancel_order::cancel_order_handler;
pub use create_order::create_order_handler;
pub use delete_order::delete_order_handler;
pub use get_order::{get_order_handler, get_orders_handler};
pub use update_order::update_order_handler;
