//! Migration: Create the exercises table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Exercises::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Exercises::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Exercises::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Exercises::Description).text().null())
                    .col(ColumnDef::new(Exercises::CategoryId).integer().not_null())
                    .col(
                        ColumnDef::new(Exercises::MuscleGroupId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exercises_category_id")
                            .from(Exercises::Table, Exercises::CategoryId)
                            .to(Categories::Table, Categories::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exercises_muscle_group_id")
                            .from(Exercises::Table, Exercises::MuscleGroupId)
                            .to(MuscleGroups::Table, MuscleGroups::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Exercises::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Exercises {
    Table,
    Id,
    Name,
    Description,
    CategoryId,
    MuscleGroupId,
}

#[derive(Iden)]
enum Categories {
    Table,
    Id,
}

#[derive(Iden)]
enum MuscleGroups {
    Table,
    Id,
}
