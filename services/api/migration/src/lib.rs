use sea_orm_migration::prelude::*;

mod m20250715_000001_create_users;
mod m20250715_000002_create_gyms;
mod m20250715_000003_create_memberships;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250715_000001_create_users::Migration),
            Box::new(m20250715_000002_create_gyms::Migration),
            Box::new(m20250715_000003_create_memberships::Migration),
        ]
    }
}
