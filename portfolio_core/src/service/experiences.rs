use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, TransactionTrait};
use thiserror::Error;

use crate::{
    entity::prelude::*,
    error::{validate_non_empty, ValidationError},
    ids::{ExperienceDetailId, ExperienceId, TechnologyId},
};

#[derive(Debug, Error)]
pub enum ExperiencesServiceError {
    #[error("fatal database error")]
    DbError(#[from] DbErr),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("experience not found")]
    ExperienceNotFound,

    #[error("experience detail not found")]
    ExperienceDetailNotFound,

    #[error("technology not found")]
    TechnologyNotFound,
}

#[derive(Debug, Clone)]
pub struct CreateExperienceDetail {
    pub started_on: NaiveDate,
    pub ended_on: Option<NaiveDate>,
    pub role: String,
    pub company: String,
    pub description: Option<String>,
    pub is_current: bool,
    pub technologies: Vec<TechnologyId>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateExperienceDetail {
    pub started_on: Option<NaiveDate>,
    pub ended_on: Option<NaiveDate>,
    pub role: Option<String>,
    pub company: Option<String>,
    pub description: Option<String>,
    pub is_current: Option<bool>,
}

#[derive(Clone)]
pub struct ExperiencesService {
    db: DatabaseConnection,
}

impl ExperiencesService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a grouping of one kind (professional, academic, personal)
    pub async fn create(
        &self,
        kind: ExperienceKind,
    ) -> Result<ExperienceModel, ExperiencesServiceError> {
        let experience = ExperienceActiveModel {
            id: Set(ExperienceId::new()),
            kind: Set(kind),
        };

        let experience = experience.insert(&self.db).await?;
        tracing::debug!(id = %experience.id, "created experience");
        Ok(experience)
    }

    pub async fn get(
        &self,
        experience_id: ExperienceId,
    ) -> Result<ExperienceModel, ExperiencesServiceError> {
        Experience::find_by_id(experience_id)
            .one(&self.db)
            .await?
            .ok_or(ExperiencesServiceError::ExperienceNotFound)
    }

    pub async fn update(
        &self,
        experience_id: ExperienceId,
        kind: ExperienceKind,
    ) -> Result<ExperienceModel, ExperiencesServiceError> {
        let experience = self.get(experience_id).await?;

        let mut experience: ExperienceActiveModel = experience.into();
        experience.kind = Set(kind);

        Ok(experience.update(&self.db).await?)
    }

    pub async fn delete(&self, experience_id: ExperienceId) -> Result<(), ExperiencesServiceError> {
        let result = Experience::delete_by_id(experience_id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(ExperiencesServiceError::ExperienceNotFound);
        }

        tracing::debug!(id = %experience_id, "deleted experience");
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<ExperienceModel>, ExperiencesServiceError> {
        Ok(Experience::find().all(&self.db).await?)
    }

    /// Create a detail together with its technology associations
    pub async fn create_detail(
        &self,
        detail: CreateExperienceDetail,
    ) -> Result<ExperienceDetailModel, ExperiencesServiceError> {
        validate_non_empty("role", &detail.role)?;
        validate_non_empty("company", &detail.company)?;

        let txn = self.db.begin().await?;

        let detail_id = ExperienceDetailId::new();
        let model = ExperienceDetailActiveModel {
            id: Set(detail_id),
            started_on: Set(detail.started_on),
            ended_on: Set(detail.ended_on),
            role: Set(detail.role),
            company: Set(detail.company),
            description: Set(detail.description),
            is_current: Set(detail.is_current),
        };

        let created = model.insert(&txn).await?;

        for technology_id in detail.technologies {
            let link = ExperienceDetailTechnologyActiveModel {
                experience_detail_id: Set(detail_id),
                technology_id: Set(technology_id),
            };
            ExperienceDetailTechnology::insert(link).exec(&txn).await?;
        }

        txn.commit().await?;
        tracing::debug!(id = %created.id, "created experience detail");
        Ok(created)
    }

    pub async fn get_detail(
        &self,
        detail_id: ExperienceDetailId,
    ) -> Result<ExperienceDetailModel, ExperiencesServiceError> {
        ExperienceDetail::find_by_id(detail_id)
            .one(&self.db)
            .await?
            .ok_or(ExperiencesServiceError::ExperienceDetailNotFound)
    }

    pub async fn update_detail(
        &self,
        detail_id: ExperienceDetailId,
        changes: UpdateExperienceDetail,
    ) -> Result<ExperienceDetailModel, ExperiencesServiceError> {
        if let Some(role) = &changes.role {
            validate_non_empty("role", role)?;
        }
        if let Some(company) = &changes.company {
            validate_non_empty("company", company)?;
        }

        let detail = self.get_detail(detail_id).await?;

        let mut detail: ExperienceDetailActiveModel = detail.into();
        if let Some(started_on) = changes.started_on {
            detail.started_on = Set(started_on);
        }
        if let Some(ended_on) = changes.ended_on {
            detail.ended_on = Set(Some(ended_on));
        }
        if let Some(role) = changes.role {
            detail.role = Set(role);
        }
        if let Some(company) = changes.company {
            detail.company = Set(company);
        }
        if let Some(description) = changes.description {
            detail.description = Set(Some(description));
        }
        if let Some(is_current) = changes.is_current {
            detail.is_current = Set(is_current);
        }

        Ok(detail.update(&self.db).await?)
    }

    pub async fn delete_detail(
        &self,
        detail_id: ExperienceDetailId,
    ) -> Result<(), ExperiencesServiceError> {
        let result = ExperienceDetail::delete_by_id(detail_id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(ExperiencesServiceError::ExperienceDetailNotFound);
        }

        tracing::debug!(id = %detail_id, "deleted experience detail");
        Ok(())
    }

    /// List all details in canonical order (entry date descending)
    pub async fn list_details(
        &self,
    ) -> Result<Vec<ExperienceDetailModel>, ExperiencesServiceError> {
        let details = ExperienceDetail::find()
            .order_by_desc(ExperienceDetailColumn::StartedOn)
            .all(&self.db)
            .await?;

        Ok(details)
    }

    /// Put a detail under an experience grouping
    pub async fn attach_detail(
        &self,
        experience_id: ExperienceId,
        detail_id: ExperienceDetailId,
    ) -> Result<(), ExperiencesServiceError> {
        self.get(experience_id).await?;
        self.get_detail(detail_id).await?;

        let link = ExperienceExperienceDetailActiveModel {
            experience_id: Set(experience_id),
            experience_detail_id: Set(detail_id),
        };
        ExperienceExperienceDetail::insert(link).exec(&self.db).await?;

        Ok(())
    }

    pub async fn detach_detail(
        &self,
        experience_id: ExperienceId,
        detail_id: ExperienceDetailId,
    ) -> Result<(), ExperiencesServiceError> {
        ExperienceExperienceDetail::delete_many()
            .filter(ExperienceExperienceDetailColumn::ExperienceId.eq(experience_id))
            .filter(ExperienceExperienceDetailColumn::ExperienceDetailId.eq(detail_id))
            .exec(&self.db)
            .await?;

        Ok(())
    }

    /// Details under one experience grouping, entry date descending
    pub async fn details(
        &self,
        experience_id: ExperienceId,
    ) -> Result<Vec<ExperienceDetailModel>, ExperiencesServiceError> {
        let experience = self.get(experience_id).await?;

        let details = experience
            .find_related(ExperienceDetail)
            .order_by_desc(ExperienceDetailColumn::StartedOn)
            .all(&self.db)
            .await?;

        Ok(details)
    }

    pub async fn attach_technology(
        &self,
        detail_id: ExperienceDetailId,
        technology_id: TechnologyId,
    ) -> Result<(), ExperiencesServiceError> {
        self.get_detail(detail_id).await?;
        let technology_exists = Technology::find_by_id(technology_id)
            .one(&self.db)
            .await?
            .is_some();
        if !technology_exists {
            return Err(ExperiencesServiceError::TechnologyNotFound);
        }

        let link = ExperienceDetailTechnologyActiveModel {
            experience_detail_id: Set(detail_id),
            technology_id: Set(technology_id),
        };
        ExperienceDetailTechnology::insert(link).exec(&self.db).await?;

        Ok(())
    }

    pub async fn detach_technology(
        &self,
        detail_id: ExperienceDetailId,
        technology_id: TechnologyId,
    ) -> Result<(), ExperiencesServiceError> {
        ExperienceDetailTechnology::delete_many()
            .filter(ExperienceDetailTechnologyColumn::ExperienceDetailId.eq(detail_id))
            .filter(ExperienceDetailTechnologyColumn::TechnologyId.eq(technology_id))
            .exec(&self.db)
            .await?;

        Ok(())
    }

    pub async fn detail_technologies(
        &self,
        detail_id: ExperienceDetailId,
    ) -> Result<Vec<TechnologyModel>, ExperiencesServiceError> {
        let detail = self.get_detail(detail_id).await?;

        let technologies = detail
            .find_related(Technology)
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

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn detail(role: &str, company: &str, started_on: NaiveDate) -> CreateExperienceDetail {
        CreateExperienceDetail {
            started_on,
            ended_on: None,
            role: role.to_string(),
            company: company.to_string(),
            description: None,
            is_current: false,
            technologies: Vec::new(),
        }
    }

    #[tokio::test]
    async fn details_list_newest_first() {
        let db = test_utils::setup_test_db().await;
        let service = ExperiencesService::new(db);

        service
            .create_detail(detail("Intern", "First Co", date(2018, 6, 1)))
            .await
            .unwrap();
        service
            .create_detail(detail("Staff", "Third Co", date(2024, 3, 1)))
            .await
            .unwrap();
        service
            .create_detail(detail("Engineer", "Second Co", date(2020, 9, 1)))
            .await
            .unwrap();

        let roles: Vec<String> = service
            .list_details()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.role)
            .collect();
        assert_eq!(roles, ["Staff", "Engineer", "Intern"]);
    }

    #[tokio::test]
    async fn groups_details_under_an_experience() {
        let db = test_utils::setup_test_db().await;
        let service = ExperiencesService::new(db);

        let professional = service.create(ExperienceKind::Professional).await.unwrap();
        let academic = service.create(ExperienceKind::Academic).await.unwrap();

        let job = service
            .create_detail(detail("Engineer", "Acme", date(2021, 1, 1)))
            .await
            .unwrap();
        let thesis = service
            .create_detail(detail("Researcher", "University", date(2019, 1, 1)))
            .await
            .unwrap();

        service.attach_detail(professional.id, job.id).await.unwrap();
        service.attach_detail(academic.id, thesis.id).await.unwrap();

        let professional_details = service.details(professional.id).await.unwrap();
        assert_eq!(professional_details.len(), 1);
        assert_eq!(professional_details[0].role, "Engineer");

        service.detach_detail(professional.id, job.id).await.unwrap();
        assert!(service.details(professional.id).await.unwrap().is_empty());

        // Detaching never deletes the detail itself
        assert!(service.get_detail(job.id).await.is_ok());
    }

    #[tokio::test]
    async fn tracks_technologies_per_detail() {
        let db = test_utils::setup_test_db().await;
        let service = ExperiencesService::new(db.clone());
        let technologies = crate::service::technologies::TechnologiesService::new(db);

        let rust = technologies
            .create("Rust".to_string(), Area::Backend, None, None)
            .await
            .unwrap();

        let mut create = detail("Engineer", "Acme", date(2021, 1, 1));
        create.technologies = vec![rust.id];
        let created = service.create_detail(create).await.unwrap();

        let names: Vec<String> = service
            .detail_technologies(created.id)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, ["Rust"]);

        service.detach_technology(created.id, rust.id).await.unwrap();
        assert!(service
            .detail_technologies(created.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn rejects_blank_role() {
        let db = test_utils::setup_test_db().await;
        let service = ExperiencesService::new(db);

        let result = service
            .create_detail(detail("", "Acme", date(2021, 1, 1)))
            .await;
        assert!(matches!(
            result,
            Err(ExperiencesServiceError::Validation(
                ValidationError::Empty { field: "role" }
            ))
        ));
    }
}
