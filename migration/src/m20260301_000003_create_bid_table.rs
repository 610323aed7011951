use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User, m20260301_000002_create_auction_table::Auction,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bid::Table)
                    .if_not_exists()
                    .col(string(Bid::Id).primary_key())
                    .col(string(Bid::UserId))
                    .col(string(Bid::AuctionId))
                    .col(double(Bid::Amount))
                    .col(timestamp_with_time_zone(Bid::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bid_user_id")
                            .from(Bid::Table, Bid::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bid_auction_id")
                            .from(Bid::Table, Bid::AuctionId)
                            .to(Auction::Table, Auction::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bid_auction_id")
                    .table(Bid::Table)
                    .col(Bid::AuctionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_bid_auction_id")
                    .table(Bid::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Bid::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Bid {
    Table,
    Id,
    UserId,
    AuctionId,
    Amount,
    CreatedAt,
}
