use sea_orm_migration::prelude::*;

mod m20260807_000001_create_technologies_table;
mod m20260807_000002_create_statistics_table;
mod m20260807_000003_create_about_table;
mod m20260807_000004_create_experience_details_table;
mod m20260807_000005_create_experiences_table;
mod m20260807_000006_create_experience_detail_technologies_table;
mod m20260807_000007_create_experience_experience_details_table;
mod m20260807_000008_create_social_links_table;
mod m20260807_000009_create_contacts_table;
mod m20260807_000010_create_contact_social_links_table;
mod m20260807_000011_create_skills_table;
mod m20260807_000012_create_projects_table;
mod m20260807_000013_create_project_technologies_table;
mod m20260807_000014_create_project_images_table;
mod m20260807_000015_create_certifications_table;
mod m20260807_000016_create_certification_technologies_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260807_000001_create_technologies_table::Migration),
            Box::new(m20260807_000002_create_statistics_table::Migration),
            Box::new(m20260807_000003_create_about_table::Migration),
            Box::new(m20260807_000004_create_experience_details_table::Migration),
            Box::new(m20260807_000005_create_experiences_table::Migration),
            Box::new(m20260807_000006_create_experience_detail_technologies_table::Migration),
            Box::new(m20260807_000007_create_experience_experience_details_table::Migration),
            Box::new(m20260807_000008_create_social_links_table::Migration),
            Box::new(m20260807_000009_create_contacts_table::Migration),
            Box::new(m20260807_000010_create_contact_social_links_table::Migration),
            Box::new(m20260807_000011_create_skills_table::Migration),
            Box::new(m20260807_000012_create_projects_table::Migration),
            Box::new(m20260807_000013_create_project_technologies_table::Migration),
            Box::new(m20260807_000014_create_project_images_table::Migration),
            Box::new(m20260807_000015_create_certifications_table::Migration),
            Box::new(m20260807_000016_create_certification_technologies_table::Migration),
        ]
    }
}

#[cfg(test)]
use sea_orm::{Database, DbErr};

#[tokio::test]
async fn test_migrations_okay() -> Result<(), DbErr> {
    let db = Database::connect("sqlite:file::memory:?cache=shared").await?;
    let schema_manager = SchemaManager::new(&db);

    Migrator::refresh(&db).await?;

    assert!(schema_manager.has_table("technology").await?);
    assert!(schema_manager.has_table("statistics").await?);
    assert!(schema_manager.has_table("about").await?);
    assert!(schema_manager.has_table("experience_detail").await?);
    assert!(schema_manager.has_table("experience").await?);
    assert!(schema_manager
        .has_table("experience_detail_technology")
        .await?);
    assert!(schema_manager
        .has_table("experience_experience_detail")
        .await?);
    assert!(schema_manager.has_table("social_link").await?);
    assert!(schema_manager.has_table("contact").await?);
    assert!(schema_manager.has_table("contact_social_link").await?);
    assert!(schema_manager.has_table("skill").await?);
    assert!(schema_manager.has_table("project").await?);
    assert!(schema_manager.has_table("project_technology").await?);
    assert!(schema_manager.has_table("project_image").await?);
    assert!(schema_manager.has_table("certification").await?);
    assert!(schema_manager.has_table("certification_technology").await?);

    Ok(())
}
