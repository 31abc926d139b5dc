use crate::entity::EntityLabels;
use crate::ids::SocialLinkId;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A social profile shown on the page. `icon` holds an opaque storage
/// reference; inactive links stay persisted but are filtered from display.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "social_link")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: SocialLinkId,
    pub name: String,
    pub handle: Option<String>,
    pub url: String,
    pub icon: Option<String>,
    pub active: bool,
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

// Many-to-many: social_link <-> contact via contact_social_link
impl Related<super::contact::Entity> for Entity {
    fn to() -> RelationDef {
        super::contact_social_link::Relation::Contact.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::contact_social_link::Relation::SocialLink.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl EntityLabels for Entity {
    const SINGULAR: &'static str = "Social link";
    const PLURAL: &'static str = "Social links";
}
