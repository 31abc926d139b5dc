use crate::entity::EntityLabels;
use crate::ids::CertificationId;
use chrono::Utc;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "certification")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: CertificationId,
    pub title: String,
    pub institution: String,
    pub issued_on: Date,
    pub expires_on: Option<Date>,
    pub certificate_url: Option<String>,
    pub credential_code: Option<String>,
}

impl Model {
    /// Derived, never stored: expired iff an expiration date exists and lies
    /// strictly before `today`. No expiration date means never expired.
    pub fn is_expired_on(&self, today: Date) -> bool {
        match self.expires_on {
            Some(expires_on) => expires_on < today,
            None => false,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_on(Utc::now().date_naive())
    }

    pub fn display_name(&self) -> String {
        format!("{} - {}", self.title, self.institution)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

// Many-to-many: certification <-> technology via certification_technology
impl Related<super::technology::Entity> for Entity {
    fn to() -> RelationDef {
        super::certification_technology::Relation::Technology.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::certification_technology::Relation::Certification
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl EntityLabels for Entity {
    const SINGULAR: &'static str = "Certification";
    const PLURAL: &'static str = "Certifications";
}
