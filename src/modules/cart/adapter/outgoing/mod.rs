pub mod cart_query_postgres;
pub mod cart_repository_postgres;
mod mapping;
pub mod sea_orm_entity;

pub use cart_query_postgres::CartQueryPostgres;
pub use cart_repository_postgres::CartRepositoryPostgres;
