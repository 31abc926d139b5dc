use crate::ids::{ExperienceDetailId, TechnologyId};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "experience_detail_technology")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub experience_detail_id: ExperienceDetailId,
    #[sea_orm(primary_key, auto_increment = false)]
    pub technology_id: TechnologyId,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::experience_detail::Entity",
        from = "Column::ExperienceDetailId",
        to = "super::experience_detail::Column::Id"
    )]
    ExperienceDetail,
    #[sea_orm(
        belongs_to = "super::technology::Entity",
        from = "Column::TechnologyId",
        to = "super::technology::Column::Id"
    )]
    Technology,
}

impl Related<super::experience_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExperienceDetail.def()
    }
}

impl Related<super::technology::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Technology.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
