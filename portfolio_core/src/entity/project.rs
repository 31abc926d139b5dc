use crate::entity::enums::ProjectStatus;
use crate::entity::EntityLabels;
use crate::ids::ProjectId;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Short blurb for cards; the full description stays on the detail page.
    pub summary: Option<String>,
    pub featured_image: Option<String>,
    pub status: ProjectStatus,
    pub started_on: Date,
    pub completed_on: Option<Date>,
    pub demo_url: Option<String>,
    pub repository_url: Option<String>,
    pub featured: bool,
    pub position: i32,
}

impl Model {
    /// Whole-month development time, derived on every read.
    ///
    /// The month count is the integer day count divided by 30, not calendar
    /// months. A project without a completion date reads as in progress.
    pub fn development_duration(&self) -> String {
        match self.completed_on {
            Some(completed_on) => {
                let days = (completed_on - self.started_on).num_days();
                format!("{} months", days / 30)
            }
            None => "in progress".to_string(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project_image::Entity")]
    ProjectImage,
}

impl Related<super::project_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectImage.def()
    }
}

// Many-to-many: project <-> technology via project_technology
impl Related<super::technology::Entity> for Entity {
    fn to() -> RelationDef {
        super::project_technology::Relation::Technology.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::project_technology::Relation::Project.def().rev())
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(title) = &self.title {
            self.title = Set(title.trim().to_string());
        }

        Ok(self)
    }
}

impl EntityLabels for Entity {
    const SINGULAR: &'static str = "Project";
    const PLURAL: &'static str = "Projects";
}
