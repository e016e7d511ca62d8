pub mod entities;
pub mod status;

pub use entities::{
    NewOrder, Order, OrderBuildError, OrderId, OrderItem, OrderState, OrderTransitionError,
};
pub use status::{OrderStatus, PaymentMethod};
