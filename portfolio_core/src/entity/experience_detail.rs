use crate::entity::EntityLabels;
use crate::ids::ExperienceDetailId;
use chrono::Datelike;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One position held: where, in what role, and for how long. `ended_on`
/// stays empty while `is_current` is set.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "experience_detail")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: ExperienceDetailId,
    pub started_on: Date,
    pub ended_on: Option<Date>,
    pub role: String,
    pub company: String,
    pub description: Option<String>,
    pub is_current: bool,
}

impl Model {
    /// Caption for admin lists: "role at company (2020 - 2023)", with
    /// "current" standing in for a missing end year.
    pub fn display_name(&self) -> String {
        let until = if self.is_current {
            "current".to_string()
        } else {
            self.ended_on
                .map(|d| d.year().to_string())
                .unwrap_or_else(|| "current".to_string())
        };
        format!(
            "{} at {} ({} - {})",
            self.role,
            self.company,
            self.started_on.year(),
            until
        )
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

// Many-to-many: experience_detail <-> technology via experience_detail_technology
impl Related<super::technology::Entity> for Entity {
    fn to() -> RelationDef {
        super::experience_detail_technology::Relation::Technology.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::experience_detail_technology::Relation::ExperienceDetail
                .def()
                .rev(),
        )
    }
}

// Many-to-many: experience_detail <-> experience via experience_experience_detail
impl Related<super::experience::Entity> for Entity {
    fn to() -> RelationDef {
        super::experience_experience_detail::Relation::Experience.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::experience_experience_detail::Relation::ExperienceDetail
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl EntityLabels for Entity {
    const SINGULAR: &'static str = "Experience detail";
    const PLURAL: &'static str = "Experience details";
}
