use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20260807_000004_create_experience_details_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExperienceDetail::Table)
                    .col(
                        ColumnDef::new(ExperienceDetail::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ExperienceDetail::StartedOn)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ExperienceDetail::EndedOn).date().null())
                    .col(ColumnDef::new(ExperienceDetail::Role).string().not_null())
                    .col(
                        ColumnDef::new(ExperienceDetail::Company)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ExperienceDetail::Description).text().null())
                    .col(
                        ColumnDef::new(ExperienceDetail::IsCurrent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index on started_on for the canonical newest-first listing
        manager
            .create_index(
                Index::create()
                    .name("idx_experience_detail_started_on")
                    .table(ExperienceDetail::Table)
                    .col(ExperienceDetail::StartedOn)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ExperienceDetail::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ExperienceDetail {
    Table,
    Id,
    StartedOn,
    EndedOn,
    Role,
    Company,
    Description,
    IsCurrent,
}
