use sea_orm::DatabaseConnection;
use thiserror::Error;

use crate::{
    entity::prelude::*,
    error::{validate_non_negative_decimal, validate_range, ValidationError},
    ids::{SkillId, TechnologyId},
};

#[derive(Debug, Error)]
pub enum SkillsServiceError {
    #[error("fatal database error")]
    DbError(#[from] DbErr),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("skill not found")]
    SkillNotFound,

    #[error("technology not found")]
    TechnologyNotFound,
}

#[derive(Debug, Clone)]
pub struct CreateSkill {
    pub technology_id: TechnologyId,
    pub progress: i32,
    pub level: Option<ProficiencyLevel>,
    pub years_experience: f32,
    pub position: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSkill {
    pub progress: Option<i32>,
    pub level: Option<ProficiencyLevel>,
    pub years_experience: Option<f32>,
    pub position: Option<i32>,
}

#[derive(Clone)]
pub struct SkillsService {
    db: DatabaseConnection,
}

impl SkillsService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Record proficiency with an existing technology. `progress` outside
    /// [0, 100] is rejected, never clamped.
    pub async fn create(&self, skill: CreateSkill) -> Result<SkillModel, SkillsServiceError> {
        validate_range("progress", skill.progress, 0, 100)?;
        validate_non_negative_decimal("years_experience", skill.years_experience)?;

        // Verify technology exists
        let technology_exists = Technology::find_by_id(skill.technology_id)
            .one(&self.db)
            .await?
            .is_some();

        if !technology_exists {
            return Err(SkillsServiceError::TechnologyNotFound);
        }

        let skill = SkillActiveModel {
            id: Set(SkillId::new()),
            technology_id: Set(skill.technology_id),
            progress: Set(skill.progress),
            level: Set(skill.level),
            years_experience: Set(skill.years_experience),
            position: Set(skill.position),
        };

        let skill = skill.insert(&self.db).await?;
        tracing::debug!(id = %skill.id, "created skill");
        Ok(skill)
    }

    pub async fn get(&self, skill_id: SkillId) -> Result<SkillModel, SkillsServiceError> {
        Skill::find_by_id(skill_id)
            .one(&self.db)
            .await?
            .ok_or(SkillsServiceError::SkillNotFound)
    }

    pub async fn update(
        &self,
        skill_id: SkillId,
        changes: UpdateSkill,
    ) -> Result<SkillModel, SkillsServiceError> {
        if let Some(progress) = changes.progress {
            validate_range("progress", progress, 0, 100)?;
        }
        if let Some(years_experience) = changes.years_experience {
            validate_non_negative_decimal("years_experience", years_experience)?;
        }

        let skill = self.get(skill_id).await?;

        let mut skill: SkillActiveModel = skill.into();
        if let Some(progress) = changes.progress {
            skill.progress = Set(progress);
        }
        if let Some(level) = changes.level {
            skill.level = Set(Some(level));
        }
        if let Some(years_experience) = changes.years_experience {
            skill.years_experience = Set(years_experience);
        }
        if let Some(position) = changes.position {
            skill.position = Set(position);
        }

        Ok(skill.update(&self.db).await?)
    }

    pub async fn delete(&self, skill_id: SkillId) -> Result<(), SkillsServiceError> {
        let result = Skill::delete_by_id(skill_id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(SkillsServiceError::SkillNotFound);
        }

        tracing::debug!(id = %skill_id, "deleted skill");
        Ok(())
    }

    /// List all skills in canonical order: explicit position ascending, then
    /// progress descending.
    pub async fn list(&self) -> Result<Vec<SkillModel>, SkillsServiceError> {
        let skills = Skill::find()
            .order_by_asc(SkillColumn::Position)
            .order_by_desc(SkillColumn::Progress)
            .all(&self.db)
            .await?;

        Ok(skills)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::service::technologies::TechnologiesService;
    use crate::test_utils;

    async fn technology_id(db: &DatabaseConnection, name: &str) -> TechnologyId {
        TechnologiesService::new(db.clone())
            .create(name.to_string(), Area::Backend, None, None)
            .await
            .unwrap()
            .id
    }

    fn skill(technology_id: TechnologyId, progress: i32, position: i32) -> CreateSkill {
        CreateSkill {
            technology_id,
            progress,
            level: None,
            years_experience: 1.0,
            position,
        }
    }

    #[tokio::test]
    async fn rejects_progress_outside_bounds() {
        let db = test_utils::setup_test_db().await;
        let service = SkillsService::new(db.clone());
        let tech_id = technology_id(&db, "Rust").await;

        for progress in [-1, 101, 250] {
            let result = service.create(skill(tech_id, progress, 0)).await;
            assert!(
                matches!(
                    result,
                    Err(SkillsServiceError::Validation(
                        ValidationError::OutOfRange { .. }
                    ))
                ),
                "progress {progress} must be rejected"
            );
        }

        // Bounds themselves are valid
        assert!(service.create(skill(tech_id, 0, 0)).await.is_ok());
        assert!(service.create(skill(tech_id, 100, 1)).await.is_ok());
    }

    #[tokio::test]
    async fn rejects_out_of_range_update() {
        let db = test_utils::setup_test_db().await;
        let service = SkillsService::new(db.clone());
        let tech_id = technology_id(&db, "Rust").await;

        let created = service.create(skill(tech_id, 50, 0)).await.unwrap();

        let result = service
            .update(
                created.id,
                UpdateSkill {
                    progress: Some(120),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(
            result,
            Err(SkillsServiceError::Validation(
                ValidationError::OutOfRange { .. }
            ))
        ));

        // The stored value stays untouched
        let stored = service.get(created.id).await.unwrap();
        assert_eq!(stored.progress, 50);
    }

    #[tokio::test]
    async fn create_requires_existing_technology() {
        let db = test_utils::setup_test_db().await;
        let service = SkillsService::new(db);

        let result = service.create(skill(TechnologyId::new(), 50, 0)).await;
        assert!(matches!(
            result,
            Err(SkillsServiceError::TechnologyNotFound)
        ));
    }

    #[tokio::test]
    async fn lists_by_position_then_progress_descending() {
        let db = test_utils::setup_test_db().await;
        let service = SkillsService::new(db.clone());
        let tech_id = technology_id(&db, "Rust").await;

        // Insert in scrambled order
        for (progress, position) in [(40, 1), (90, 0), (70, 1), (55, 0)] {
            service.create(skill(tech_id, progress, position)).await.unwrap();
        }

        let listed: Vec<(i32, i32)> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|s| (s.position, s.progress))
            .collect();

        assert_eq!(listed, [(0, 90), (0, 55), (1, 70), (1, 40)]);
    }
}
