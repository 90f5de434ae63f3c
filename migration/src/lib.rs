pub use sea_orm_migration::prelude::*;

mod m20240610_000001_create_albums;
mod m20240610_000002_create_tracks;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240610_000001_create_albums::Migration),
            Box::new(m20240610_000002_create_tracks::Migration),
        ]
    }
}
