//! Migration: Create the workout_plans table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkoutPlans::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkoutPlans::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WorkoutPlans::UserId).integer().not_null())
                    .col(ColumnDef::new(WorkoutPlans::Date).date().not_null())
                    .col(ColumnDef::new(WorkoutPlans::Comments).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workout_plans_user_id")
                            .from(WorkoutPlans::Table, WorkoutPlans::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkoutPlans::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum WorkoutPlans {
    Table,
    Id,
    UserId,
    Date,
    Comments,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
