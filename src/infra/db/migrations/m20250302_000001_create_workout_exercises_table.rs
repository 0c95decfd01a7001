//! Migration: Create the workout_exercises table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkoutExercises::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkoutExercises::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WorkoutExercises::Description).text().null())
                    .col(
                        ColumnDef::new(WorkoutExercises::ExerciseId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(WorkoutExercises::Sets).integer().not_null())
                    .col(
                        ColumnDef::new(WorkoutExercises::Repetitions)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(WorkoutExercises::Weight).double().null())
                    .col(
                        ColumnDef::new(WorkoutExercises::Status)
                            .string_len(32)
                            .not_null()
                            .default("to_be_started"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workout_exercises_exercise_id")
                            .from(WorkoutExercises::Table, WorkoutExercises::ExerciseId)
                            .to(Exercises::Table, Exercises::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkoutExercises::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum WorkoutExercises {
    Table,
    Id,
    Description,
    ExerciseId,
    Sets,
    Repetitions,
    Weight,
    Status,
}

#[derive(Iden)]
enum Exercises {
    Table,
    Id,
}
