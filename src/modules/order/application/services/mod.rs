mod cancel_order_service;
mod create_order_service;
mod delete_order_service;
mod get_order_service;
mod update_order_service;

pub use cancel_order_service::CancelOrderService;
pub use create_order_service::CreateOrderService;
pub use delete_order_service::DeleteOrderService;
pub use get_order_service::{GetOrderService, GetOrdersService};
pub use update_order_service::UpdateOrderService;
