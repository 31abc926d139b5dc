use crate::entity::EntityLabels;
use crate::ids::{ProjectId, ProjectImageId};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Gallery image owned exclusively by one project; removed when the project
/// is removed.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project_image")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: ProjectImageId,
    pub project_id: ProjectId,
    pub image: String,
    pub caption: Option<String>,
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::project::Entity",
        from = "Column::ProjectId",
        to = "super::project::Column::Id"
    )]
    Project,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl EntityLabels for Entity {
    const SINGULAR: &'static str = "Project image";
    const PLURAL: &'static str = "Project images";
}
