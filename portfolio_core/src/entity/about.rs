use crate::entity::EntityLabels;
use crate::ids::AboutId;
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

/// Who the site is about. `profile_photo` and `resume` hold opaque storage
/// references; `updated_at` is bumped on every write.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "about")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: AboutId,
    pub name: String,
    pub role: String,
    pub bio: Option<String>,
    pub profile_photo: Option<String>,
    pub resume: Option<String>,
    pub updated_at: DateTimeUtc,
}

impl Model {
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.name, self.role)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        self.updated_at = Set(Utc::now());
        Ok(self)
    }
}

impl EntityLabels for Entity {
    const SINGULAR: &'static str = "About";
    const PLURAL: &'static str = "About";
}
