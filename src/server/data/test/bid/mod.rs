use crate::server::{data::bid::BidRepository, model::bid::CreateBidParams};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::bid::BidFactory};

mod create;
mod get_by_auction_id;
mod get_highest_by_auction_id;
