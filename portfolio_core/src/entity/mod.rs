// SeaORM entities
// One module per table; join tables carry composite primary keys.

pub mod enums;

pub mod about;
pub mod certification;
pub mod certification_technology;
pub mod contact;
pub mod contact_social_link;
pub mod experience;
pub mod experience_detail;
pub mod experience_detail_technology;
pub mod experience_experience_detail;
pub mod project;
pub mod project_image;
pub mod project_technology;
pub mod skill;
pub mod social_link;
pub mod statistics;
pub mod technology;


/// Singular/plural display names an admin surface can render for an entity.
pub trait EntityLabels {
    const SINGULAR: &'static str;
    const PLURAL: &'static str;
}

pub mod prelude {
    // Re-export all entities for convenience
    pub use super::about::{
        ActiveModel as AboutActiveModel, Column as AboutColumn, Entity as About, Model as AboutModel,
    };
    pub use super::certification::{
        ActiveModel as CertificationActiveModel, Column as CertificationColumn,
        Entity as Certification, Model as CertificationModel,
    };
    pub use super::certification_technology::{
        ActiveModel as CertificationTechnologyActiveModel, Column as CertificationTechnologyColumn,
        Entity as CertificationTechnology, Model as CertificationTechnologyModel,
    };
    pub use super::contact::{
        ActiveModel as ContactActiveModel, Column as ContactColumn, Entity as Contact,
        Model as ContactModel,
    };
    pub use super::contact_social_link::{
        ActiveModel as ContactSocialLinkActiveModel, Column as ContactSocialLinkColumn,
        Entity as ContactSocialLink, Model as ContactSocialLinkModel,
    };
    pub use super::experience::{
        ActiveModel as ExperienceActiveModel, Column as ExperienceColumn, Entity as Experience,
        Model as ExperienceModel,
    };
    pub use super::experience_detail::{
        ActiveModel as ExperienceDetailActiveModel, Column as ExperienceDetailColumn,
        Entity as ExperienceDetail, Model as ExperienceDetailModel,
    };
    pub use super::experience_detail_technology::{
        ActiveModel as ExperienceDetailTechnologyActiveModel,
        Column as ExperienceDetailTechnologyColumn, Entity as ExperienceDetailTechnology,
        Model as ExperienceDetailTechnologyModel,
    };
    pub use super::experience_experience_detail::{
        ActiveModel as ExperienceExperienceDetailActiveModel,
        Column as ExperienceExperienceDetailColumn, Entity as ExperienceExperienceDetail,
        Model as ExperienceExperienceDetailModel,
    };
    pub use super::project::{
        ActiveModel as ProjectActiveModel, Column as ProjectColumn, Entity as Project,
        Model as ProjectModel,
    };
    pub use super::project_image::{
        ActiveModel as ProjectImageActiveModel, Column as ProjectImageColumn,
        Entity as ProjectImage, Model as ProjectImageModel,
    };
    pub use super::project_technology::{
        ActiveModel as ProjectTechnologyActiveModel, Column as ProjectTechnologyColumn,
        Entity as ProjectTechnology, Model as ProjectTechnologyModel,
    };
    pub use super::skill::{
        ActiveModel as SkillActiveModel, Column as SkillColumn, Entity as Skill, Model as SkillModel,
    };
    pub use super::social_link::{
        ActiveModel as SocialLinkActiveModel, Column as SocialLinkColumn, Entity as SocialLink,
        Model as SocialLinkModel,
    };
    pub use super::statistics::{
        ActiveModel as StatisticsActiveModel, Column as StatisticsColumn, Entity as Statistics,
        Model as StatisticsModel,
    };
    pub use super::technology::{
        ActiveModel as TechnologyActiveModel, Column as TechnologyColumn, Entity as Technology,
        Model as TechnologyModel,
    };

    pub use super::enums::{Area, ExperienceKind, ProficiencyLevel, ProjectStatus};
    pub use super::EntityLabels;

    // Re-export commonly used SeaORM types and traits
    pub use sea_orm::{
        ActiveModelTrait,
        ActiveValue,

        ColumnTrait,
        ConnectionTrait,

        // Database and connection types
        Database,
        DatabaseConnection,
        DbConn,
        // Common result types
        DbErr,
        Delete,

        // Core traits
        EntityTrait,
        Insert,
        Linked,

        ModelTrait,
        NotSet,
        QueryFilter,
        QueryOrder,
        QuerySelect,
        Related,
        RelationTrait,
        // Query builders
        Select,
        // Active model helpers
        Set,

        TransactionTrait,
        Unchanged,
        Update,
    };
}
