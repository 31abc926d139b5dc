use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, TransactionTrait};
use thiserror::Error;

use crate::{
    entity::prelude::*,
    error::{validate_non_empty, validate_url, ValidationError},
    ids::{CertificationId, TechnologyId},
};

#[derive(Debug, Error)]
pub enum CertificationsServiceError {
    #[error("fatal database error")]
    DbError(#[from] DbErr),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("certification not found")]
    CertificationNotFound,

    #[error("technology not found")]
    TechnologyNotFound,
}

#[derive(Debug, Clone)]
pub struct CreateCertification {
    pub title: String,
    pub institution: String,
    pub issued_on: NaiveDate,
    pub expires_on: Option<NaiveDate>,
    pub certificate_url: Option<String>,
    pub credential_code: Option<String>,
    pub technologies: Vec<TechnologyId>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCertification {
    pub title: Option<String>,
    pub institution: Option<String>,
    pub issued_on: Option<NaiveDate>,
    pub expires_on: Option<NaiveDate>,
    pub certificate_url: Option<String>,
    pub credential_code: Option<String>,
}

#[derive(Clone)]
pub struct CertificationsService {
    db: DatabaseConnection,
}

impl CertificationsService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Record a certification together with its technology associations.
    /// Expiry is never stored; it derives from `expires_on` at read time.
    pub async fn create(
        &self,
        certification: CreateCertification,
    ) -> Result<CertificationModel, CertificationsServiceError> {
        validate_non_empty("title", &certification.title)?;
        validate_non_empty("institution", &certification.institution)?;
        if let Some(certificate_url) = &certification.certificate_url {
            validate_url("certificate_url", certificate_url)?;
        }

        let txn = self.db.begin().await?;

        let certification_id = CertificationId::new();
        let model = CertificationActiveModel {
            id: Set(certification_id),
            title: Set(certification.title),
            institution: Set(certification.institution),
            issued_on: Set(certification.issued_on),
            expires_on: Set(certification.expires_on),
            certificate_url: Set(certification.certificate_url),
            credential_code: Set(certification.credential_code),
        };

        let created = model.insert(&txn).await?;

        for technology_id in certification.technologies {
            let link = CertificationTechnologyActiveModel {
                certification_id: Set(certification_id),
                technology_id: Set(technology_id),
            };
            CertificationTechnology::insert(link).exec(&txn).await?;
        }

        txn.commit().await?;
        tracing::debug!(id = %created.id, "created certification");
        Ok(created)
    }

    pub async fn get(
        &self,
        certification_id: CertificationId,
    ) -> Result<CertificationModel, CertificationsServiceError> {
        Certification::find_by_id(certification_id)
            .one(&self.db)
            .await?
            .ok_or(CertificationsServiceError::CertificationNotFound)
    }

    pub async fn update(
        &self,
        certification_id: CertificationId,
        changes: UpdateCertification,
    ) -> Result<CertificationModel, CertificationsServiceError> {
        if let Some(title) = &changes.title {
            validate_non_empty("title", title)?;
        }
        if let Some(institution) = &changes.institution {
            validate_non_empty("institution", institution)?;
        }
        if let Some(certificate_url) = &changes.certificate_url {
            validate_url("certificate_url", certificate_url)?;
        }

        let certification = self.get(certification_id).await?;

        let mut certification: CertificationActiveModel = certification.into();
        if let Some(title) = changes.title {
            certification.title = Set(title);
        }
        if let Some(institution) = changes.institution {
            certification.institution = Set(institution);
        }
        if let Some(issued_on) = changes.issued_on {
            certification.issued_on = Set(issued_on);
        }
        if let Some(expires_on) = changes.expires_on {
            certification.expires_on = Set(Some(expires_on));
        }
        if let Some(certificate_url) = changes.certificate_url {
            certification.certificate_url = Set(Some(certificate_url));
        }
        if let Some(credential_code) = changes.credential_code {
            certification.credential_code = Set(Some(credential_code));
        }

        Ok(certification.update(&self.db).await?)
    }

    pub async fn delete(
        &self,
        certification_id: CertificationId,
    ) -> Result<(), CertificationsServiceError> {
        let result = Certification::delete_by_id(certification_id)
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(CertificationsServiceError::CertificationNotFound);
        }

        tracing::debug!(id = %certification_id, "deleted certification");
        Ok(())
    }

    /// List all certifications in canonical order (issue date descending)
    pub async fn list(&self) -> Result<Vec<CertificationModel>, CertificationsServiceError> {
        let certifications = Certification::find()
            .order_by_desc(CertificationColumn::IssuedOn)
            .all(&self.db)
            .await?;

        Ok(certifications)
    }

    pub async fn add_technology(
        &self,
        certification_id: CertificationId,
        technology_id: TechnologyId,
    ) -> Result<(), CertificationsServiceError> {
        self.get(certification_id).await?;
        let technology_exists = Technology::find_by_id(technology_id)
            .one(&self.db)
            .await?
            .is_some();
        if !technology_exists {
            return Err(CertificationsServiceError::TechnologyNotFound);
        }

        let link = CertificationTechnologyActiveModel {
            certification_id: Set(certification_id),
            technology_id: Set(technology_id),
        };
        CertificationTechnology::insert(link).exec(&self.db).await?;

        Ok(())
    }

    pub async fn remove_technology(
        &self,
        certification_id: CertificationId,
        technology_id: TechnologyId,
    ) -> Result<(), CertificationsServiceError> {
        CertificationTechnology::delete_many()
            .filter(CertificationTechnologyColumn::CertificationId.eq(certification_id))
            .filter(CertificationTechnologyColumn::TechnologyId.eq(technology_id))
            .exec(&self.db)
            .await?;

        Ok(())
    }

    pub async fn technologies(
        &self,
        certification_id: CertificationId,
    ) -> Result<Vec<TechnologyModel>, CertificationsServiceError> {
        let certification = self.get(certification_id).await?;

        let technologies = certification
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

    fn certification(title: &str, issued_on: NaiveDate) -> CreateCertification {
        CreateCertification {
            title: title.to_string(),
            institution: "Cert Institute".to_string(),
            issued_on,
            expires_on: None,
            certificate_url: None,
            credential_code: None,
            technologies: Vec::new(),
        }
    }

    #[tokio::test]
    async fn expiry_derives_from_expiration_date() {
        let db = test_utils::setup_test_db().await;
        let service = CertificationsService::new(db);

        let mut create = certification("Cloud Architect", date(2023, 1, 1));
        create.expires_on = Some(date(2024, 1, 1));
        let expiring = service.create(create).await.unwrap();

        // Evaluated on a clock reading 2025-01-01
        assert!(expiring.is_expired_on(date(2025, 1, 1)));
        // Not yet expired the day it expires
        assert!(!expiring.is_expired_on(date(2024, 1, 1)));
        assert!(!expiring.is_expired_on(date(2023, 6, 1)));

        let perpetual = service
            .create(certification("Kubernetes", date(2020, 1, 1)))
            .await
            .unwrap();
        assert!(
            !perpetual.is_expired_on(date(2099, 1, 1)),
            "no expiration date means never expired"
        );
    }

    #[tokio::test]
    async fn lists_newest_issued_first() {
        let db = test_utils::setup_test_db().await;
        let service = CertificationsService::new(db);

        service
            .create(certification("Oldest", date(2019, 5, 1)))
            .await
            .unwrap();
        service
            .create(certification("Newest", date(2025, 2, 1)))
            .await
            .unwrap();
        service
            .create(certification("Middle", date(2022, 8, 1)))
            .await
            .unwrap();

        let titles: Vec<String> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, ["Newest", "Middle", "Oldest"]);
    }

    #[tokio::test]
    async fn rejects_malformed_certificate_url() {
        let db = test_utils::setup_test_db().await;
        let service = CertificationsService::new(db);

        let mut create = certification("Bad link", date(2024, 1, 1));
        create.certificate_url = Some("ftp://certs.example.com/1".to_string());

        let result = service.create(create).await;
        assert!(matches!(
            result,
            Err(CertificationsServiceError::Validation(
                ValidationError::InvalidUrl { .. }
            ))
        ));
    }

    #[tokio::test]
    async fn technology_deletion_detaches_but_keeps_certification() {
        let db = test_utils::setup_test_db().await;
        let service = CertificationsService::new(db.clone());
        let technologies = crate::service::technologies::TechnologiesService::new(db);

        let tech = technologies
            .create("Terraform".to_string(), Area::Devops, None, None)
            .await
            .unwrap();

        let mut create = certification("IaC Associate", date(2024, 1, 1));
        create.technologies = vec![tech.id];
        let created = service.create(create).await.unwrap();

        technologies.delete(tech.id).await.unwrap();

        let remaining = service.technologies(created.id).await.unwrap();
        assert!(remaining.is_empty());
        assert!(service.get(created.id).await.is_ok());
    }
}
