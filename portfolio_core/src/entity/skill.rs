use crate::entity::enums::ProficiencyLevel;
use crate::entity::EntityLabels;
use crate::ids::{SkillId, TechnologyId};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Self-assessed proficiency with one technology. `progress` is a 0-100
/// percentage, validated at write time by the service layer.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "skill")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: SkillId,
    pub technology_id: TechnologyId,
    pub progress: i32,
    pub level: Option<ProficiencyLevel>,
    pub years_experience: f32,
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::technology::Entity",
        from = "Column::TechnologyId",
        to = "super::technology::Column::Id"
    )]
    Technology,
}

impl Related<super::technology::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Technology.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl EntityLabels for Entity {
    const SINGULAR: &'static str = "Skill";
    const PLURAL: &'static str = "Skills";
}
