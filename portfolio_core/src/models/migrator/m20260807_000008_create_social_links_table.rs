use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20260807_000008_create_social_links_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SocialLink::Table)
                    .col(
                        ColumnDef::new(SocialLink::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SocialLink::Name).string().not_null())
                    .col(ColumnDef::new(SocialLink::Handle).string().null())
                    .col(ColumnDef::new(SocialLink::Url).string().not_null())
                    .col(ColumnDef::new(SocialLink::Icon).string().null())
                    .col(
                        ColumnDef::new(SocialLink::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(SocialLink::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index on (position, name), the canonical listing order
        manager
            .create_index(
                Index::create()
                    .name("idx_social_link_position_name")
                    .table(SocialLink::Table)
                    .col(SocialLink::Position)
                    .col(SocialLink::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SocialLink::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum SocialLink {
    Table,
    Id,
    Name,
    Handle,
    Url,
    Icon,
    Active,
    Position,
}
