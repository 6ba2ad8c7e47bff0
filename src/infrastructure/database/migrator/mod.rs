//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users;
mod m20250301_000002_create_courses;
mod m20250301_000003_create_user_selected_courses;
mod m20250301_000004_create_announcements;
mod m20250301_000005_create_announcement_recipients;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users::Migration),
            Box::new(m20250301_000002_create_courses::Migration),
            Box::new(m20250301_000003_create_user_selected_courses::Migration),
            Box::new(m20250301_000004_create_announcements::Migration),
            Box::new(m20250301_000005_create_announcement_recipients::Migration),
        ]
    }
}
