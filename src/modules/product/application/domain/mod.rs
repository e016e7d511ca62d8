pub mod entities;

pub use entities::Product;
