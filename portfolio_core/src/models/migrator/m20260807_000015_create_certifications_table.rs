use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20260807_000015_create_certifications_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Certification::Table)
                    .col(
                        ColumnDef::new(Certification::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Certification::Title).string().not_null())
                    .col(
                        ColumnDef::new(Certification::Institution)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Certification::IssuedOn).date().not_null())
                    .col(ColumnDef::new(Certification::ExpiresOn).date().null())
                    .col(ColumnDef::new(Certification::CertificateUrl).string().null())
                    .col(ColumnDef::new(Certification::CredentialCode).string().null())
                    .to_owned(),
            )
            .await?;

        // Create index on issued_on for the canonical newest-first listing
        manager
            .create_index(
                Index::create()
                    .name("idx_certification_issued_on")
                    .table(Certification::Table)
                    .col(Certification::IssuedOn)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Certification::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Certification {
    Table,
    Id,
    Title,
    Institution,
    IssuedOn,
    ExpiresOn,
    CertificateUrl,
    CredentialCode,
}
