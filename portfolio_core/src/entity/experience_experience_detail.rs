use crate::ids::{ExperienceDetailId, ExperienceId};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "experience_experience_detail")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub experience_id: ExperienceId,
    #[sea_orm(primary_key, auto_increment = false)]
    pub experience_detail_id: ExperienceDetailId,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::experience::Entity",
        from = "Column::ExperienceId",
        to = "super::experience::Column::Id"
    )]
    Experience,
    #[sea_orm(
        belongs_to = "super::experience_detail::Entity",
        from = "Column::ExperienceDetailId",
        to = "super::experience_detail::Column::Id"
    )]
    ExperienceDetail,
}

impl Related<super::experience::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Experience.def()
    }
}

impl Related<super::experience_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExperienceDetail.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
