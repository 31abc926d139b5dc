use crate::entity::enums::Area;
use crate::entity::EntityLabels;
use crate::ids::TechnologyId;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "technology")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: TechnologyId,
    pub name: String,
    pub area: Area,
    pub version: Option<String>,
    pub description: Option<String>,
}

impl Model {
    /// Caption for admin lists: "name version" when a version is present.
    pub fn display_name(&self) -> String {
        match &self.version {
            Some(version) => format!("{} {}", self.name, version),
            None => self.name.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::skill::Entity")]
    Skill,
}

impl Related<super::skill::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Skill.def()
    }
}

// Many-to-many: technology <-> project via project_technology
impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        super::project_technology::Relation::Project.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::project_technology::Relation::Technology.def().rev())
    }
}

// Many-to-many: technology <-> certification via certification_technology
impl Related<super::certification::Entity> for Entity {
    fn to() -> RelationDef {
        super::certification_technology::Relation::Certification.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::certification_technology::Relation::Technology
                .def()
                .rev(),
        )
    }
}

// Many-to-many: technology <-> experience_detail via experience_detail_technology
impl Related<super::experience_detail::Entity> for Entity {
    fn to() -> RelationDef {
        super::experience_detail_technology::Relation::ExperienceDetail.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::experience_detail_technology::Relation::Technology
                .def()
                .rev(),
        )
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(name) = &self.name {
            self.name = Set(name.trim().to_string());
        }

        Ok(self)
    }
}

impl EntityLabels for Entity {
    const SINGULAR: &'static str = "Technology";
    const PLURAL: &'static str = "Technologies";
}
