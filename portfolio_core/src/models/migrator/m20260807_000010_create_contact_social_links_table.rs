use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20260807_000010_create_contact_social_links_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactSocialLink::Table)
                    .col(
                        ColumnDef::new(ContactSocialLink::ContactId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContactSocialLink::SocialLinkId)
                            .string()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(ContactSocialLink::ContactId)
                            .col(ContactSocialLink::SocialLinkId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contact_social_link_contact_id")
                            .from(ContactSocialLink::Table, ContactSocialLink::ContactId)
                            .to(Contact::Table, Contact::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contact_social_link_social_link_id")
                            .from(ContactSocialLink::Table, ContactSocialLink::SocialLinkId)
                            .to(SocialLink::Table, SocialLink::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index on social_link_id for reverse lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_contact_social_link_social_link_id")
                    .table(ContactSocialLink::Table)
                    .col(ContactSocialLink::SocialLinkId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContactSocialLink::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ContactSocialLink {
    Table,
    ContactId,
    SocialLinkId,
}

#[derive(Iden)]
enum Contact {
    Table,
    Id,
}

#[derive(Iden)]
enum SocialLink {
    Table,
    Id,
}
