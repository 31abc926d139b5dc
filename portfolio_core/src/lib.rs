pub mod entity;
pub mod ids;
pub mod models;
use tokio::sync::OnceCell;

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::service::{
    CertificationsService, ExperiencesService, ProjectsService, SiteService, SkillsService,
    TechnologiesService,
};

pub mod service;

pub mod error;

pub mod config;

pub mod test_utils;

static PORTFOLIO_CORE: OnceCell<Arc<PortfolioCore>> = OnceCell::const_new();

pub async fn core() -> Arc<PortfolioCore> {
    PORTFOLIO_CORE
        .get_or_init(|| async move {
            Arc::new(PortfolioCore::start().await.expect("failed to init"))
        })
        .await
        .clone()
}

/// Main runtime handle for the portfolio data layer.
pub struct PortfolioCore {
    pub config: config::PortfolioConfig,

    /// Shared connection every service runs on.
    pub db: DatabaseConnection,

    /// Typed services, one per aggregate.
    pub technologies: TechnologiesService,
    pub skills: SkillsService,
    pub projects: ProjectsService,
    pub certifications: CertificationsService,
    pub experiences: ExperiencesService,
    pub site: SiteService,
}

impl PortfolioCore {
    pub async fn start() -> Result<Self, Box<dyn std::error::Error>> {
        let config = config::get_or_init().await?;
        tracing::info!(?config, "starting portfolio core");

        // DB + migrations
        let db = models::open_or_create_db(&config).await;
        models::migrate_up(db.clone()).await;

        Ok(Self {
            technologies: TechnologiesService::new(db.clone()),
            skills: SkillsService::new(db.clone()),
            projects: ProjectsService::new(db.clone()),
            certifications: CertificationsService::new(db.clone()),
            experiences: ExperiencesService::new(db.clone()),
            site: SiteService::new(db.clone()),
            config,
            db,
        })
    }

    pub async fn shutdown(self) -> Result<(), Box<dyn std::error::Error>> {
        self.db.close().await?;
        Ok(())
    }
}

pub mod prelude {
    pub use super::ids;
    pub use super::entity;
    pub use super::models;

    pub use super::service;

    pub use super::error;

    pub use super::config;
}
