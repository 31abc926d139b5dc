use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20260807_000013_create_project_technologies_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectTechnology::Table)
                    .col(
                        ColumnDef::new(ProjectTechnology::ProjectId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectTechnology::TechnologyId)
                            .string()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(ProjectTechnology::ProjectId)
                            .col(ProjectTechnology::TechnologyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_technology_project_id")
                            .from(ProjectTechnology::Table, ProjectTechnology::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_technology_technology_id")
                            .from(ProjectTechnology::Table, ProjectTechnology::TechnologyId)
                            .to(Technology::Table, Technology::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index on technology_id for reverse lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_project_technology_technology_id")
                    .table(ProjectTechnology::Table)
                    .col(ProjectTechnology::TechnologyId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectTechnology::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ProjectTechnology {
    Table,
    ProjectId,
    TechnologyId,
}

#[derive(Iden)]
enum Project {
    Table,
    Id,
}

#[derive(Iden)]
enum Technology {
    Table,
    Id,
}
