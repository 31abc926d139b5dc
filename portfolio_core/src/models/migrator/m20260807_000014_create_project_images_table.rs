use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20260807_000014_create_project_images_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectImage::Table)
                    .col(
                        ColumnDef::new(ProjectImage::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProjectImage::ProjectId).string().not_null())
                    .col(ColumnDef::new(ProjectImage::Image).string().not_null())
                    .col(ColumnDef::new(ProjectImage::Caption).string().null())
                    .col(
                        ColumnDef::new(ProjectImage::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_image_project_id")
                            .from(ProjectImage::Table, ProjectImage::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index on project_id
        manager
            .create_index(
                Index::create()
                    .name("idx_project_image_project_id")
                    .table(ProjectImage::Table)
                    .col(ProjectImage::ProjectId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectImage::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ProjectImage {
    Table,
    Id,
    ProjectId,
    Image,
    Caption,
    Position,
}

#[derive(Iden)]
enum Project {
    Table,
    Id,
}
