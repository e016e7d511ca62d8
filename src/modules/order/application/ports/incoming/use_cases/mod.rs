mod cancel_order;
mod create_order;
mod delete_order;
mod get_order;
mod update_order;

pub use cancel_order::{CancelOrderError, CancelOrderUseCase};
pub use create_order::{
    CreateOrderCommand, CreateOrderCommandError, CreateOrderError, CreateOrderUseCase,
};
pub use delete_order::{DeleteOrderError, DeleteOrderUseCase};
pub use get_order::{GetOrderError, GetOrderUseCase, GetOrdersError, GetOrdersUseCase};
pub use update_order::{
    UpdateOrderCommand, UpdateOrderCommandError, UpdateOrderError, UpdateOrderUseCase,
};
