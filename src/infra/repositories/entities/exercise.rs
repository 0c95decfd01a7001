//! Exercise table entity.

use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "exercises")]
#[schema(as = Exercise)]
pub struct Model {
    #[sea_orm(primary_key)]
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Bench press")]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub category_id: i32,
    pub muscle_group_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::muscle_group::Entity",
        from = "Column::MuscleGroupId",
        to = "super::muscle_group::Column::Id"
    )]
    MuscleGroup,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::muscle_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MuscleGroup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
