pub use sea_orm_migration::prelude::*;

mod m20250304_105428_create_users_table;
mod m20260127_144214_create_table_categories;
mod m20260127_144229_create_table_products;
mod m20260127_144248_create_table_carts;
mod m20260202_230522_create_table_orders;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250304_105428_create_users_table::Migration),
            Box::new(m20260127_144214_create_table_categories::Migration),
            Box::new(m20260127_144229_create_table_products::Migration),
            Box::new(m20260127_144248_create_table_carts::Migration),
            Box::new(m20260202_230522_create_table_orders::Migration),
        ]
    }
}
