//! Schema migrations for the session store.
//!
//! Run [`Migrator`] once against a fresh database to create the `teachers`,
//! `users`, `sessions` and `participate` tables.

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_yoga_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    // Override the name of migration table to avoid conflicts
    fn migration_table_name() -> sea_orm::DynIden {
        Alias::new("yoga_sessions_seaorm_migrations").into_iden()
    }

    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_yoga_tables::Migration)]
    }
}
