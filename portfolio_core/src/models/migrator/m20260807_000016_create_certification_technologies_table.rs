use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20260807_000016_create_certification_technologies_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CertificationTechnology::Table)
                    .col(
                        ColumnDef::new(CertificationTechnology::CertificationId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CertificationTechnology::TechnologyId)
                            .string()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CertificationTechnology::CertificationId)
                            .col(CertificationTechnology::TechnologyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_certification_technology_certification_id")
                            .from(
                                CertificationTechnology::Table,
                                CertificationTechnology::CertificationId,
                            )
                            .to(Certification::Table, Certification::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_certification_technology_technology_id")
                            .from(
                                CertificationTechnology::Table,
                                CertificationTechnology::TechnologyId,
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
                    .name("idx_certification_technology_technology_id")
                    .table(CertificationTechnology::Table)
                    .col(CertificationTechnology::TechnologyId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(CertificationTechnology::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
pub enum CertificationTechnology {
    Table,
    CertificationId,
    TechnologyId,
}

#[derive(Iden)]
enum Certification {
    Table,
    Id,
}

#[derive(Iden)]
enum Technology {
    Table,
    Id,
}
