use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240610_000002_create_tracks" // Make sure this matches with the file name
    }
}

#[derive(Iden)]
enum Album {
    #[iden = "albums"]
    Table,
    Id,
}

#[derive(Iden)]
enum Track {
    #[iden = "tracks"]
    Table,
    Id,
    Title,
    LengthInSeconds,
    AlbumId,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Track::Table)
                    .col(
                        ColumnDef::new(Track::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Track::Title).string().not_null())
                    .col(ColumnDef::new(Track::LengthInSeconds).integer().not_null())
                    // Can't have a Track without an Album
                    .col(ColumnDef::new(Track::AlbumId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-track-album_id")
                            .from(Track::Table, Track::AlbumId)
                            .to(Album::Table, Album::Id),
                    )
                    .col(
                        ColumnDef::new(Track::CreatedAt)
                            .date_time()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Track::UpdatedAt)
                            .date_time()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Track::Table).to_owned())
            .await
    }
}
