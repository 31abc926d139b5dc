pub mod certifications;
pub mod experiences;
pub mod projects;
pub mod site;
pub mod skills;
pub mod technologies;

pub use certifications::CertificationsService;
pub use experiences::ExperiencesService;
pub use projects::ProjectsService;
pub use site::SiteService;
pub use skills::SkillsService;
pub use technologies::TechnologiesService;
