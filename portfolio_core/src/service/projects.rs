use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, TransactionTrait};
use thiserror::Error;

use crate::{
    entity::prelude::*,
    error::{validate_non_empty, validate_url, ValidationError},
    ids::{ProjectId, ProjectImageId, TechnologyId},
};

#[derive(Debug, Error)]
pub enum ProjectsServiceError {
    #[error("fatal database error")]
    DbError(#[from] DbErr),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("project not found")]
    ProjectNotFound,

    #[error("project image not found")]
    ProjectImageNotFound,

    #[error("technology not found")]
    TechnologyNotFound,
}

#[derive(Debug, Clone)]
pub struct CreateProject {
    pub title: String,
    pub description: String,
    pub summary: Option<String>,
    pub featured_image: Option<String>,
    pub status: ProjectStatus,
    pub started_on: NaiveDate,
    pub completed_on: Option<NaiveDate>,
    pub demo_url: Option<String>,
    pub repository_url: Option<String>,
    pub featured: bool,
    pub position: i32,
    /// Technologies associated on creation, all in one transaction.
    pub technologies: Vec<TechnologyId>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub summary: Option<String>,
    pub featured_image: Option<String>,
    pub status: Option<ProjectStatus>,
    pub started_on: Option<NaiveDate>,
    pub completed_on: Option<NaiveDate>,
    pub demo_url: Option<String>,
    pub repository_url: Option<String>,
    pub featured: Option<bool>,
    pub position: Option<i32>,
}

#[derive(Clone)]
pub struct ProjectsService {
    db: DatabaseConnection,
}

impl ProjectsService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a project together with its technology associations
    pub async fn create(
        &self,
        project: CreateProject,
    ) -> Result<ProjectModel, ProjectsServiceError> {
        validate_non_empty("title", &project.title)?;
        if let Some(demo_url) = &project.demo_url {
            validate_url("demo_url", demo_url)?;
        }
        if let Some(repository_url) = &project.repository_url {
            validate_url("repository_url", repository_url)?;
        }

        let txn = self.db.begin().await?;

        let project_id = ProjectId::new();
        let model = ProjectActiveModel {
            id: Set(project_id),
            title: Set(project.title),
            description: Set(project.description),
            summary: Set(project.summary),
            featured_image: Set(project.featured_image),
            status: Set(project.status),
            started_on: Set(project.started_on),
            completed_on: Set(project.completed_on),
            demo_url: Set(project.demo_url),
            repository_url: Set(project.repository_url),
            featured: Set(project.featured),
            position: Set(project.position),
        };

        let created = model.insert(&txn).await?;

        for technology_id in project.technologies {
            let link = ProjectTechnologyActiveModel {
                project_id: Set(project_id),
                technology_id: Set(technology_id),
            };
            ProjectTechnology::insert(link).exec(&txn).await?;
        }

        txn.commit().await?;
        tracing::debug!(id = %created.id, "created project");
        Ok(created)
    }

    pub async fn get(&self, project_id: ProjectId) -> Result<ProjectModel, ProjectsServiceError> {
        Project::find_by_id(project_id)
            .one(&self.db)
            .await?
            .ok_or(ProjectsServiceError::ProjectNotFound)
    }

    pub async fn update(
        &self,
        project_id: ProjectId,
        changes: UpdateProject,
    ) -> Result<ProjectModel, ProjectsServiceError> {
        if let Some(title) = &changes.title {
            validate_non_empty("title", title)?;
        }
        if let Some(demo_url) = &changes.demo_url {
            validate_url("demo_url", demo_url)?;
        }
        if let Some(repository_url) = &changes.repository_url {
            validate_url("repository_url", repository_url)?;
        }

        let project = self.get(project_id).await?;

        let mut project: ProjectActiveModel = project.into();
        if let Some(title) = changes.title {
            project.title = Set(title);
        }
        if let Some(description) = changes.description {
            project.description = Set(description);
        }
        if let Some(summary) = changes.summary {
            project.summary = Set(Some(summary));
        }
        if let Some(featured_image) = changes.featured_image {
            project.featured_image = Set(Some(featured_image));
        }
        if let Some(status) = changes.status {
            project.status = Set(status);
        }
        if let Some(started_on) = changes.started_on {
            project.started_on = Set(started_on);
        }
        if let Some(completed_on) = changes.completed_on {
            project.completed_on = Set(Some(completed_on));
        }
        if let Some(demo_url) = changes.demo_url {
            project.demo_url = Set(Some(demo_url));
        }
        if let Some(repository_url) = changes.repository_url {
            project.repository_url = Set(Some(repository_url));
        }
        if let Some(featured) = changes.featured {
            project.featured = Set(featured);
        }
        if let Some(position) = changes.position {
            project.position = Set(position);
        }

        Ok(project.update(&self.db).await?)
    }

    /// Delete a project. Its gallery images and technology associations are
    /// removed with it by the FK constraints.
    pub async fn delete(&self, project_id: ProjectId) -> Result<(), ProjectsServiceError> {
        let result = Project::delete_by_id(project_id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(ProjectsServiceError::ProjectNotFound);
        }

        tracing::debug!(id = %project_id, "deleted project");
        Ok(())
    }

    /// List all projects in canonical order: explicit position ascending,
    /// then start date descending.
    pub async fn list(&self) -> Result<Vec<ProjectModel>, ProjectsServiceError> {
        let projects = Project::find()
            .order_by_asc(ProjectColumn::Position)
            .order_by_desc(ProjectColumn::StartedOn)
            .all(&self.db)
            .await?;

        Ok(projects)
    }

    /// Highlighted projects only, in canonical order
    pub async fn list_featured(&self) -> Result<Vec<ProjectModel>, ProjectsServiceError> {
        let projects = Project::find()
            .filter(ProjectColumn::Featured.eq(true))
            .order_by_asc(ProjectColumn::Position)
            .order_by_desc(ProjectColumn::StartedOn)
            .all(&self.db)
            .await?;

        Ok(projects)
    }

    pub async fn add_technology(
        &self,
        project_id: ProjectId,
        technology_id: TechnologyId,
    ) -> Result<(), ProjectsServiceError> {
        // Both ends must exist before linking them
        self.get(project_id).await?;
        let technology_exists = Technology::find_by_id(technology_id)
            .one(&self.db)
            .await?
            .is_some();
        if !technology_exists {
            return Err(ProjectsServiceError::TechnologyNotFound);
        }

        let link = ProjectTechnologyActiveModel {
            project_id: Set(project_id),
            technology_id: Set(technology_id),
        };
        ProjectTechnology::insert(link).exec(&self.db).await?;

        Ok(())
    }

    pub async fn remove_technology(
        &self,
        project_id: ProjectId,
        technology_id: TechnologyId,
    ) -> Result<(), ProjectsServiceError> {
        ProjectTechnology::delete_many()
            .filter(ProjectTechnologyColumn::ProjectId.eq(project_id))
            .filter(ProjectTechnologyColumn::TechnologyId.eq(technology_id))
            .exec(&self.db)
            .await?;

        Ok(())
    }

    pub async fn technologies(
        &self,
        project_id: ProjectId,
    ) -> Result<Vec<TechnologyModel>, ProjectsServiceError> {
        let project = self.get(project_id).await?;

        let technologies = project
            .find_related(Technology)
            .order_by_asc(TechnologyColumn::Name)
            .all(&self.db)
            .await?;

        Ok(technologies)
    }

    /// Attach a gallery image to a project
    pub async fn add_image(
        &self,
        project_id: ProjectId,
        image: String,
        caption: Option<String>,
        position: i32,
    ) -> Result<ProjectImageModel, ProjectsServiceError> {
        validate_non_empty("image", &image)?;
        self.get(project_id).await?;

        let image = ProjectImageActiveModel {
            id: Set(ProjectImageId::new()),
            project_id: Set(project_id),
            image: Set(image),
            caption: Set(caption),
            position: Set(position),
        };

        Ok(image.insert(&self.db).await?)
    }

    pub async fn remove_image(
        &self,
        image_id: ProjectImageId,
    ) -> Result<(), ProjectsServiceError> {
        let result = ProjectImage::delete_by_id(image_id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(ProjectsServiceError::ProjectImageNotFound);
        }

        Ok(())
    }

    /// Gallery images of a project, position ascending
    pub async fn images(
        &self,
        project_id: ProjectId,
    ) -> Result<Vec<ProjectImageModel>, ProjectsServiceError> {
        let images = ProjectImage::find()
            .filter(ProjectImageColumn::ProjectId.eq(project_id))
            .order_by_asc(ProjectImageColumn::Position)
            .all(&self.db)
            .await?;

        Ok(images)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::service::technologies::TechnologiesService;
    use crate::test_utils;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn project(title: &str, position: i32, started_on: NaiveDate) -> CreateProject {
        CreateProject {
            title: title.to_string(),
            description: "A project".to_string(),
            summary: None,
            featured_image: None,
            status: ProjectStatus::Completed,
            started_on,
            completed_on: None,
            demo_url: None,
            repository_url: None,
            featured: false,
            position,
            technologies: Vec::new(),
        }
    }

    #[tokio::test]
    async fn development_duration_is_whole_months_of_day_count() {
        let db = test_utils::setup_test_db().await;
        let service = ProjectsService::new(db);

        let mut create = project("Done", 0, date(2023, 1, 1));
        create.completed_on = Some(date(2024, 1, 1));
        let done = service.create(create).await.unwrap();

        // 365 days, integer-divided by 30
        assert_eq!(done.development_duration(), "12 months");

        let mut create = project("Short", 0, date(2024, 3, 1));
        create.completed_on = Some(date(2024, 3, 29));
        let short = service.create(create).await.unwrap();
        assert_eq!(short.development_duration(), "0 months");

        let open_ended = service
            .create(project("Ongoing", 0, date(2024, 1, 1)))
            .await
            .unwrap();
        assert_eq!(open_ended.development_duration(), "in progress");
    }

    #[tokio::test]
    async fn lists_by_position_then_start_date_descending() {
        let db = test_utils::setup_test_db().await;
        let service = ProjectsService::new(db);

        service
            .create(project("Old pinned", 0, date(2020, 1, 1)))
            .await
            .unwrap();
        service
            .create(project("New pinned", 0, date(2024, 6, 1)))
            .await
            .unwrap();
        service
            .create(project("Trailing", 5, date(2025, 1, 1)))
            .await
            .unwrap();

        let titles: Vec<String> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["New pinned", "Old pinned", "Trailing"]);
    }

    #[tokio::test]
    async fn featured_listing_only_returns_featured() {
        let db = test_utils::setup_test_db().await;
        let service = ProjectsService::new(db);

        let mut create = project("Showcase", 0, date(2024, 1, 1));
        create.featured = true;
        service.create(create).await.unwrap();
        service
            .create(project("Side project", 0, date(2024, 2, 1)))
            .await
            .unwrap();

        let featured = service.list_featured().await.unwrap();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].title, "Showcase");
    }

    #[tokio::test]
    async fn rejects_malformed_urls() {
        let db = test_utils::setup_test_db().await;
        let service = ProjectsService::new(db);

        let mut create = project("Broken", 0, date(2024, 1, 1));
        create.demo_url = Some("not a url".to_string());

        let result = service.create(create).await;
        assert!(matches!(
            result,
            Err(ProjectsServiceError::Validation(
                ValidationError::InvalidUrl { .. }
            ))
        ));
    }

    #[tokio::test]
    async fn creates_with_technologies_in_one_transaction() {
        let db = test_utils::setup_test_db().await;
        let service = ProjectsService::new(db.clone());
        let technologies = TechnologiesService::new(db);

        let rust = technologies
            .create("Rust".to_string(), Area::Backend, None, None)
            .await
            .unwrap();
        let react = technologies
            .create("React".to_string(), Area::Frontend, None, None)
            .await
            .unwrap();

        let mut create = project("Fullstack", 0, date(2024, 1, 1));
        create.technologies = vec![rust.id, react.id];
        let created = service.create(create).await.unwrap();

        let names: Vec<String> = service
            .technologies(created.id)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, ["React", "Rust"]);
    }

    #[tokio::test]
    async fn images_are_listed_by_position() {
        let db = test_utils::setup_test_db().await;
        let service = ProjectsService::new(db);

        let created = service
            .create(project("Gallery", 0, date(2024, 1, 1)))
            .await
            .unwrap();

        for (file, position) in [("b.png", 2), ("a.png", 1), ("c.png", 3)] {
            service
                .add_image(created.id, format!("project_images/{file}"), None, position)
                .await
                .unwrap();
        }

        let files: Vec<String> = service
            .images(created.id)
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.image)
            .collect();
        assert_eq!(
            files,
            [
                "project_images/a.png",
                "project_images/b.png",
                "project_images/c.png"
            ]
        );
    }

    #[tokio::test]
    async fn add_image_requires_existing_project() {
        let db = test_utils::setup_test_db().await;
        let service = ProjectsService::new(db);

        let result = service
            .add_image(ProjectId::new(), "x.png".to_string(), None, 0)
            .await;
        assert!(matches!(result, Err(ProjectsServiceError::ProjectNotFound)));
    }
}
