use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20260807_000006_create_experience_detail_technologies_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExperienceDetailTechnology::Table)
                    .col(
                        ColumnDef::new(ExperienceDetailTechnology::ExperienceDetailId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExperienceDetailTechnology::TechnologyId)
                            .string()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(ExperienceDetailTechnology::ExperienceDetailId)
                            .col(ExperienceDetailTechnology::TechnologyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experience_detail_technology_experience_detail_id")
                            .from(
                                ExperienceDetailTechnology::Table,
                                ExperienceDetailTechnology::ExperienceDetailId,
                            )
                            .to(ExperienceDetail::Table, ExperienceDetail::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experience_detail_technology_technology_id")
                            .from(
                                ExperienceDetailTechnology::Table,
                                ExperienceDetailTechnology::TechnologyId,
                            )
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
                    .name("idx_experience_detail_technology_technology_id")
                    .table(ExperienceDetailTechnology::Table)
                    .col(ExperienceDetailTechnology::TechnologyId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ExperienceDetailTechnology::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
pub enum ExperienceDetailTechnology {
    Table,
    ExperienceDetailId,
    TechnologyId,
}

#[derive(Iden)]
enum ExperienceDetail {
    Table,
    Id,
}

#[derive(Iden)]
enum Technology {
    Table,
    Id,
}
