use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20260807_000011_create_skills_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Skill::Table)
                    .col(ColumnDef::new(Skill::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Skill::TechnologyId).string().not_null())
                    .col(
                        ColumnDef::new(Skill::Progress)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Skill::Level).string().null())
                    .col(
                        ColumnDef::new(Skill::YearsExperience)
                            .float()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Skill::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_skill_technology_id")
                            .from(Skill::Table, Skill::TechnologyId)
                            .to(Technology::Table, Technology::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index on technology_id
        manager
            .create_index(
                Index::create()
                    .name("idx_skill_technology_id")
                    .table(Skill::Table)
                    .col(Skill::TechnologyId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Skill::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Skill {
    Table,
    Id,
    TechnologyId,
    Progress,
    Level,
    YearsExperience,
    Position,
}

#[derive(Iden)]
enum Technology {
    Table,
    Id,
}
