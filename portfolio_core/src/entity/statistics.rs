use crate::entity::EntityLabels;
use crate::ids::StatisticsId;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Singleton-style headline counters for the landing page.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "statistics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: StatisticsId,
    pub years_experience: i32,
    pub projects_completed: i32,
    pub technologies_mastered: i32,
    pub clients_satisfied: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl EntityLabels for Entity {
    const SINGULAR: &'static str = "Statistic";
    const PLURAL: &'static str = "Statistics";
}
