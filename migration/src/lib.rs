pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_grades;
mod m20250308_000001_add_grade_level;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_grades::Migration),
            Box::new(m20250308_000001_add_grade_level::Migration),
        ]
    }
}
