use sea_orm::DatabaseConnection;
use thiserror::Error;

use crate::{
    entity::prelude::*,
    error::{validate_non_empty, ValidationError},
    ids::TechnologyId,
};

#[derive(Debug, Error)]
pub enum TechnologiesServiceError {
    #[error("fatal database error")]
    DbError(#[from] DbErr),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("technology not found")]
    TechnologyNotFound,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTechnology {
    pub name: Option<String>,
    pub area: Option<Area>,
    pub version: Option<String>,
    pub description: Option<String>,
}

#[derive(Clone)]
pub struct TechnologiesService {
    db: DatabaseConnection,
}

impl TechnologiesService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Register a technology under one of the closed areas
    pub async fn create(
        &self,
        name: String,
        area: Area,
        version: Option<String>,
        description: Option<String>,
    ) -> Result<TechnologyModel, TechnologiesServiceError> {
        validate_non_empty("name", &name)?;

        let technology = TechnologyActiveModel {
            id: Set(TechnologyId::new()),
            name: Set(name),
            area: Set(area),
            version: Set(version),
            description: Set(description),
        };

        let technology = technology.insert(&self.db).await?;
        tracing::debug!(id = %technology.id, "created technology");
        Ok(technology)
    }

    pub async fn get(
        &self,
        technology_id: TechnologyId,
    ) -> Result<TechnologyModel, TechnologiesServiceError> {
        Technology::find_by_id(technology_id)
            .one(&self.db)
            .await?
            .ok_or(TechnologiesServiceError::TechnologyNotFound)
    }

    pub async fn update(
        &self,
        technology_id: TechnologyId,
        changes: UpdateTechnology,
    ) -> Result<TechnologyModel, TechnologiesServiceError> {
        let technology = self.get(technology_id).await?;

        let mut technology: TechnologyActiveModel = technology.into();
        if let Some(name) = changes.name {
            validate_non_empty("name", &name)?;
            technology.name = Set(name);
        }
        if let Some(area) = changes.area {
            technology.area = Set(area);
        }
        if let Some(version) = changes.version {
            technology.version = Set(Some(version));
        }
        if let Some(description) = changes.description {
            technology.description = Set(Some(description));
        }

        Ok(technology.update(&self.db).await?)
    }

    /// Delete a technology. Dependent skills are removed with it; projects,
    /// certifications and experience details only lose the association row.
    pub async fn delete(
        &self,
        technology_id: TechnologyId,
    ) -> Result<(), TechnologiesServiceError> {
        let result = Technology::delete_by_id(technology_id)
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(TechnologiesServiceError::TechnologyNotFound);
        }

        tracing::debug!(id = %technology_id, "deleted technology");
        Ok(())
    }

    /// List all technologies in canonical order (name ascending)
    pub async fn list(&self) -> Result<Vec<TechnologyModel>, TechnologiesServiceError> {
        let technologies = Technology::find()
            .order_by_asc(TechnologyColumn::Name)
            .all(&self.db)
            .await?;

        Ok(technologies)
    }

    /// List technologies of one area, name ascending
    pub async fn list_by_area(
        &self,
        area: Area,
    ) -> Result<Vec<TechnologyModel>, TechnologiesServiceError> {
        let technologies = Technology::find()
            .filter(TechnologyColumn::Area.eq(area))
            .order_by_asc(TechnologyColumn::Name)
            .all(&self.db)
            .await?;

        Ok(technologies)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils;

    #[tokio::test]
    async fn lists_technologies_in_name_order() {
        let db = test_utils::setup_test_db().await;
        let service = TechnologiesService::new(db);

        for name in ["Rust", "Axum", "PostgreSQL", "Docker"] {
            service
                .create(name.to_string(), Area::Backend, None, None)
                .await
                .unwrap();
        }

        let names: Vec<String> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, ["Axum", "Docker", "PostgreSQL", "Rust"]);
    }

    #[tokio::test]
    async fn filters_by_area() {
        let db = test_utils::setup_test_db().await;
        let service = TechnologiesService::new(db);

        service
            .create("Rust".to_string(), Area::Backend, None, None)
            .await
            .unwrap();
        service
            .create("React".to_string(), Area::Frontend, None, None)
            .await
            .unwrap();

        let backend = service.list_by_area(Area::Backend).await.unwrap();
        assert_eq!(backend.len(), 1);
        assert_eq!(backend[0].name, "Rust");
    }

    #[tokio::test]
    async fn rejects_empty_name() {
        let db = test_utils::setup_test_db().await;
        let service = TechnologiesService::new(db);

        let result = service
            .create("   ".to_string(), Area::Backend, None, None)
            .await;

        assert!(matches!(
            result,
            Err(TechnologiesServiceError::Validation(
                ValidationError::Empty { field: "name" }
            ))
        ));
    }

    #[tokio::test]
    async fn delete_of_missing_technology_is_an_error() {
        let db = test_utils::setup_test_db().await;
        let service = TechnologiesService::new(db);

        let result = service.delete(TechnologyId::new()).await;
        assert!(matches!(
            result,
            Err(TechnologiesServiceError::TechnologyNotFound)
        ));
    }

    #[tokio::test]
    async fn updates_fields_in_place() {
        let db = test_utils::setup_test_db().await;
        let service = TechnologiesService::new(db);

        let tech = service
            .create("Rust".to_string(), Area::Backend, None, None)
            .await
            .unwrap();

        let updated = service
            .update(
                tech.id,
                UpdateTechnology {
                    version: Some("1.80".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Rust");
        assert_eq!(updated.version.as_deref(), Some("1.80"));
        assert_eq!(updated.display_name(), "Rust 1.80");
    }
}
