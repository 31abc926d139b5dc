use crate::entity::enums::ExperienceKind;
use crate::entity::EntityLabels;
use crate::ids::ExperienceId;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Grouping of experience details by kind (professional, academic, personal).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "experience")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: ExperienceId,
    pub kind: ExperienceKind,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

// Many-to-many: experience <-> experience_detail via experience_experience_detail
impl Related<super::experience_detail::Entity> for Entity {
    fn to() -> RelationDef {
        super::experience_experience_detail::Relation::ExperienceDetail.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::experience_experience_detail::Relation::Experience
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl EntityLabels for Entity {
    const SINGULAR: &'static str = "Experience";
    const PLURAL: &'static str = "Experiences";
}
