//! Migration: Create the muscle_groups table.
//!
//! Name duplicates are rejected by the repository, not a unique index.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MuscleGroups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MuscleGroups::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MuscleGroups::Name).string_len(255).not_null())
                    .col(
                        ColumnDef::new(MuscleGroups::Description)
                            .string_len(255)
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_muscle_groups_name")
                    .table(MuscleGroups::Table)
                    .col(MuscleGroups::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MuscleGroups::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum MuscleGroups {
    Table,
    Id,
    Name,
    Description,
}
