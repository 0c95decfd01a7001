//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users_table;
mod m20250301_000002_create_categories_table;
mod m20250301_000003_create_muscle_groups_table;
mod m20250301_000004_create_exercises_table;
mod m20250302_000001_create_workout_exercises_table;
mod m20250302_000002_create_workout_plans_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users_table::Migration),
            Box::new(m20250301_000002_create_categories_table::Migration),
            Box::new(m20250301_000003_create_muscle_groups_table::Migration),
            Box::new(m20250301_000004_create_exercises_table::Migration),
            Box::new(m20250302_000001_create_workout_exercises_table::Migration),
            Box::new(m20250302_000002_create_workout_plans_table::Migration),
        ]
    }
}
