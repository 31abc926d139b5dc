//! Closed enumerations shared by the entities.
//!
//! The database stores the symbolic key (`string_value`), never the display
//! label; `label()` is the human-readable side for admin and page rendering.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Area {
    #[sea_orm(string_value = "FRONTEND")]
    Frontend,
    #[sea_orm(string_value = "BACKEND")]
    Backend,
    #[sea_orm(string_value = "FULLSTACK")]
    Fullstack,
    #[sea_orm(string_value = "MOBILE")]
    Mobile,
    #[sea_orm(string_value = "DEVOPS")]
    Devops,
    #[sea_orm(string_value = "DATA_SCIENCE")]
    DataScience,
    #[sea_orm(string_value = "MACHINE_LEARNING")]
    MachineLearning,
    #[sea_orm(string_value = "CYBERSECURITY")]
    Cybersecurity,
    #[sea_orm(string_value = "CLOUD_COMPUTING")]
    CloudComputing,
    #[sea_orm(string_value = "DATABASE")]
    Database,
    #[sea_orm(string_value = "GAME_DEVELOPMENT")]
    GameDevelopment,
    #[sea_orm(string_value = "EMBEDDED_SYSTEMS")]
    EmbeddedSystems,
    #[sea_orm(string_value = "IOT")]
    Iot,
    #[sea_orm(string_value = "BLOCKCHAIN")]
    Blockchain,
    #[sea_orm(string_value = "QA_TESTING")]
    QaTesting,
    #[sea_orm(string_value = "UI_UX")]
    UiUx,
    #[sea_orm(string_value = "PRODUCT_MANAGEMENT")]
    ProductManagement,
    #[sea_orm(string_value = "AGILE_DEVOPS")]
    AgileDevops,
    #[sea_orm(string_value = "COMPUTER_VISION")]
    ComputerVision,
    #[sea_orm(string_value = "NATURAL_LANGUAGE_PROCESSING")]
    NaturalLanguageProcessing,
    #[sea_orm(string_value = "BIG_DATA")]
    BigData,
    #[sea_orm(string_value = "AR_VR")]
    ArVr,
    #[sea_orm(string_value = "QUANTUM_COMPUTING")]
    QuantumComputing,
    #[sea_orm(string_value = "ROBOTICS")]
    Robotics,
    #[sea_orm(string_value = "NETWORKING")]
    Networking,
}

impl Area {
    pub fn label(&self) -> &'static str {
        match self {
            Area::Frontend => "Frontend Development",
            Area::Backend => "Backend Development",
            Area::Fullstack => "Full Stack Development",
            Area::Mobile => "Mobile Development",
            Area::Devops => "DevOps & Infrastructure",
            Area::DataScience => "Data Science",
            Area::MachineLearning => "Machine Learning & AI",
            Area::Cybersecurity => "Cybersecurity",
            Area::CloudComputing => "Cloud Computing",
            Area::Database => "Database Administration",
            Area::GameDevelopment => "Game Development",
            Area::EmbeddedSystems => "Embedded Systems",
            Area::Iot => "Internet of Things",
            Area::Blockchain => "Blockchain & Web3",
            Area::QaTesting => "Quality Assurance & Testing",
            Area::UiUx => "UI/UX Design",
            Area::ProductManagement => "Product Management",
            Area::AgileDevops => "Agile & DevOps",
            Area::ComputerVision => "Computer Vision",
            Area::NaturalLanguageProcessing => "Natural Language Processing",
            Area::BigData => "Big Data",
            Area::ArVr => "Augmented & Virtual Reality",
            Area::QuantumComputing => "Quantum Computing",
            Area::Robotics => "Robotics & Automation",
            Area::Networking => "Networking & Telecommunications",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ExperienceKind {
    #[sea_orm(string_value = "PROFESSIONAL")]
    Professional,
    #[sea_orm(string_value = "ACADEMIC")]
    Academic,
    #[sea_orm(string_value = "PERSONAL")]
    Personal,
}

impl ExperienceKind {
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceKind::Professional => "Professional",
            ExperienceKind::Academic => "Academic",
            ExperienceKind::Personal => "Personal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ProficiencyLevel {
    #[sea_orm(string_value = "BEGINNER")]
    Beginner,
    #[sea_orm(string_value = "INTERMEDIATE")]
    Intermediate,
    #[sea_orm(string_value = "ADVANCED")]
    Advanced,
    #[sea_orm(string_value = "EXPERT")]
    Expert,
}

impl ProficiencyLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ProficiencyLevel::Beginner => "Beginner",
            ProficiencyLevel::Intermediate => "Intermediate",
            ProficiencyLevel::Advanced => "Advanced",
            ProficiencyLevel::Expert => "Expert",
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ProjectStatus {
    #[sea_orm(string_value = "PLANNING")]
    Planning,
    #[sea_orm(string_value = "DEVELOPMENT")]
    Development,
    #[default]
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
    #[sea_orm(string_value = "PAUSED")]
    Paused,
    #[sea_orm(string_value = "CANCELLED")]
    Cancelled,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "In planning",
            ProjectStatus::Development => "In development",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Paused => "Paused",
            ProjectStatus::Cancelled => "Cancelled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveEnum;
    use sea_orm::Iterable;

    #[test]
    fn stored_value_is_the_symbolic_key() {
        assert_eq!(Area::MachineLearning.to_value(), "MACHINE_LEARNING");
        assert_eq!(ProjectStatus::Planning.to_value(), "PLANNING");
        assert_eq!(ExperienceKind::Academic.to_value(), "ACADEMIC");
        assert_eq!(ProficiencyLevel::Expert.to_value(), "EXPERT");
    }

    #[test]
    fn keys_round_trip_and_unknown_keys_are_rejected() {
        for area in Area::iter() {
            let key = area.to_value();
            assert_eq!(Area::try_from_value(&key).unwrap(), area);
        }
        assert!(Area::try_from_value(&"UNDERWATER_BASKET_WEAVING".to_owned()).is_err());
        assert!(ProjectStatus::try_from_value(&"Completed".to_owned()).is_err());
    }

    #[test]
    fn labels_are_never_the_stored_key() {
        for area in Area::iter() {
            assert_ne!(area.label(), area.to_value());
        }
    }

    #[test]
    fn area_is_a_closed_set_of_25() {
        assert_eq!(Area::iter().count(), 25);
    }
}
