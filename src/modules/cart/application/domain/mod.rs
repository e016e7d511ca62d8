pub mod entities;

pub use entities::{Cart, CartItem, CartItemInput};
