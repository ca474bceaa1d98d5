use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Query, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Categories {
    Table,
    Id,
    Type,
}

#[derive(Iden)]
enum Questions {
    Table,
    Id,
    Question,
    Answer,
    Difficulty,
    Category,
}

/// Category names every fresh database starts with. The service treats
/// categories as read-only, so the seed is the only writer.
const SEED_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categories::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Categories::Type).text().not_null())
                    .to_owned(),
            )
            .await?;

        // questions.category stores the category id as text. No foreign key:
        // referential integrity is advisory only.
        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Questions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Questions::Question).text().not_null())
                    .col(ColumnDef::new(Questions::Answer).text().not_null())
                    .col(ColumnDef::new(Questions::Difficulty).integer().not_null())
                    .col(ColumnDef::new(Questions::Category).text().not_null())
                    .to_owned(),
            )
            .await?;

        let mut seed = Query::insert()
            .into_table(Categories::Table)
            .columns([Categories::Type])
            .to_owned();
        for name in SEED_CATEGORIES {
            seed.values_panic([name.into()]);
        }
        manager.exec_stmt(seed).await?;

        tracing::info!(
            categories = SEED_CATEGORIES.len(),
            "trivia schema created and seeded"
        );
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await?;
        Ok(())
    }
}
