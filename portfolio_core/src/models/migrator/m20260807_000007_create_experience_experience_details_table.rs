use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20260807_000007_create_experience_experience_details_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExperienceExperienceDetail::Table)
                    .col(
                        ColumnDef::new(ExperienceExperienceDetail::ExperienceId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExperienceExperienceDetail::ExperienceDetailId)
                            .string()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(ExperienceExperienceDetail::ExperienceId)
                            .col(ExperienceExperienceDetail::ExperienceDetailId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experience_experience_detail_experience_id")
                            .from(
                                ExperienceExperienceDetail::Table,
                                ExperienceExperienceDetail::ExperienceId,
                            )
                            .to(Experience::Table, Experience::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experience_experience_detail_experience_detail_id")
                            .from(
                                ExperienceExperienceDetail::Table,
                                ExperienceExperienceDetail::ExperienceDetailId,
                            )
                            .to(ExperienceDetail::Table, ExperienceDetail::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index on experience_detail_id for reverse lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_experience_experience_detail_experience_detail_id")
                    .table(ExperienceExperienceDetail::Table)
                    .col(ExperienceExperienceDetail::ExperienceDetailId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ExperienceExperienceDetail::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
pub enum ExperienceExperienceDetail {
    Table,
    ExperienceId,
    ExperienceDetailId,
}

#[derive(Iden)]
enum Experience {
    Table,
    Id,
}

#[derive(Iden)]
enum ExperienceDetail {
    Table,
    Id,
}
