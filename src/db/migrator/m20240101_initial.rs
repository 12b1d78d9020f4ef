use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Movies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Movies::Title).string().not_null())
                    .col(ColumnDef::new(Movies::Genre).string().null())
                    .col(ColumnDef::new(Movies::ReleaseYear).integer().null())
                    .col(ColumnDef::new(Movies::Rating).double().null())
                    .col(ColumnDef::new(Movies::TitleSearch).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Serves the exact title + year search
        manager
            .create_index(
                Index::create()
                    .name("idx_movies_title_release_year")
                    .table(Movies::Table)
                    .col(Movies::Title)
                    .col(Movies::ReleaseYear)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Movies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    Id,
    Title,
    Genre,
    ReleaseYear,
    Rating,
    TitleSearch,
}
