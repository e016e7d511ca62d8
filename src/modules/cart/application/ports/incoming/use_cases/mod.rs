mod create_cart;
mod delete_cart;
mod get_cart;
mod get_my_cart;
mod update_cart;

pub use create_cart::{CreateCartCommand, CreateCartCommandError, CreateCartError, CreateCartUseCase};
pub use delete_cart::{DeleteCartError, DeleteCartUseCase};
pub use get_cart::{GetCartError, GetCartUseCase, GetCartsError, GetCartsUseCase};
pub use get_my_cart::{GetMyCartError, GetMyCartUseCase};
pub use update_cart::{UpdateCartCommand, UpdateCartCommandError, UpdateCartError, UpdateCartUseCase};
