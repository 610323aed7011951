use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Auction::Table)
                    .if_not_exists()
                    .col(string(Auction::Id).primary_key())
                    .col(string(Auction::ProductName))
                    .col(string(Auction::Category))
                    .col(text(Auction::Description))
                    .col(integer(Auction::Condition))
                    .col(integer(Auction::Status))
                    .col(timestamp_with_time_zone(Auction::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Covers the expiry sweep predicate (status = Active AND created_at < cutoff)
        manager
            .create_index(
                Index::create()
                    .name("idx_auction_status_created_at")
                    .table(Auction::Table)
                    .col(Auction::Status)
                    .col(Auction::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_auction_status_created_at")
                    .table(Auction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Auction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Auction {
    Table,
    Id,
    ProductName,
    Category,
    Description,
    Condition,
    Status,
    CreatedAt,
}
