use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::bid::BidDto;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProductConditionDto {
    New,
    Used,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuctionStatusDto {
    Active,
    Completed,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateAuctionDto {
    pub product_name: String,
    pub category: String,
    pub description: String,
    pub condition: ProductConditionDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AuctionDto {
    pub id: String,
    pub product_name: String,
    pub category: String,
    pub description: String,
    pub condition: ProductConditionDto,
    pub status: AuctionStatusDto,
    pub created_at: DateTime<Utc>,
}

/// Auction together with its highest bid, if any.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct WinningInfoDto {
    pub auction: AuctionDto,
    pub bid: Option<BidDto>,
}
