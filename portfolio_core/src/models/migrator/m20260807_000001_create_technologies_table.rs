use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20260807_000001_create_technologies_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Technology::Table)
                    .col(
                        ColumnDef::new(Technology::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Technology::Name).string().not_null())
                    .col(ColumnDef::new(Technology::Area).string().not_null())
                    .col(ColumnDef::new(Technology::Version).string().null())
                    .col(ColumnDef::new(Technology::Description).text().null())
                    .to_owned(),
            )
            .await?;

        // Create index on name for the canonical name-ascending listing
        manager
            .create_index(
                Index::create()
                    .name("idx_technology_name")
                    .table(Technology::Table)
                    .col(Technology::Name)
                    .to_owned(),
            )
            .await?;

        // Create index on area for filtered listings
        manager
            .create_index(
                Index::create()
                    .name("idx_technology_area")
                    .table(Technology::Table)
                    .col(Technology::Area)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Technology::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Technology {
    Table,
    Id,
    Name,
    Area,
    Version,
    Description,
}
