pub mod cart_query;
pub mod cart_repository;

pub use cart_query::{CartQuery, CartQueryError};
pub use cart_repository::{CartRepository, CartRepositoryError};
