use crate::entity::EntityLabels;
use crate::ids::ContactId;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: ContactId,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

// Many-to-many: contact <-> social_link via contact_social_link
impl Related<super::social_link::Entity> for Entity {
    fn to() -> RelationDef {
        super::contact_social_link::Relation::SocialLink.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::contact_social_link::Relation::Contact.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl EntityLabels for Entity {
    const SINGULAR: &'static str = "Contact";
    const PLURAL: &'static str = "Contacts";
}
