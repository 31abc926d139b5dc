use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20260807_000012_create_projects_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Project::Table)
                    .col(
                        ColumnDef::new(Project::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Project::Title).string().not_null())
                    .col(ColumnDef::new(Project::Description).text().not_null())
                    .col(ColumnDef::new(Project::Summary).string().null())
                    .col(ColumnDef::new(Project::FeaturedImage).string().null())
                    .col(ColumnDef::new(Project::Status).string().not_null())
                    .col(ColumnDef::new(Project::StartedOn).date().not_null())
                    .col(ColumnDef::new(Project::CompletedOn).date().null())
                    .col(ColumnDef::new(Project::DemoUrl).string().null())
                    .col(ColumnDef::new(Project::RepositoryUrl).string().null())
                    .col(
                        ColumnDef::new(Project::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Project::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index on (position, started_on), the canonical listing order
        manager
            .create_index(
                Index::create()
                    .name("idx_project_position_started_on")
                    .table(Project::Table)
                    .col(Project::Position)
                    .col(Project::StartedOn)
                    .to_owned(),
            )
            .await?;

        // Create index on featured for the highlighted subset
        manager
            .create_index(
                Index::create()
                    .name("idx_project_featured")
                    .table(Project::Table)
                    .col(Project::Featured)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Project::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Project {
    Table,
    Id,
    Title,
    Description,
    Summary,
    FeaturedImage,
    Status,
    StartedOn,
    CompletedOn,
    DemoUrl,
    RepositoryUrl,
    Featured,
    Position,
}
