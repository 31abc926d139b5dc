use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20260807_000003_create_about_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(About::Table)
                    .col(ColumnDef::new(About::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(About::Name).string().not_null())
                    .col(ColumnDef::new(About::Role).string().not_null())
                    .col(ColumnDef::new(About::Bio).text().null())
                    .col(ColumnDef::new(About::ProfilePhoto).string().null())
                    .col(ColumnDef::new(About::Resume).string().null())
                    .col(
                        ColumnDef::new(About::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(About::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum About {
    Table,
    Id,
    Name,
    Role,
    Bio,
    ProfilePhoto,
    Resume,
    UpdatedAt,
}
