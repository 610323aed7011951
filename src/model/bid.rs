use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateBidDto {
    pub user_id: String,
    pub auction_id: String,
    pub amount: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BidDto {
    pub id: String,
    pub user_id: String,
    pub auction_id: String,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}
