//! Domain models for bids.

use chrono::{DateTime, Utc};

use crate::{
    model::bid::{BidDto, CreateBidDto},
    server::{error::AppError, util::parse::parse_uuid},
};

/// A bid placed by a user on an auction.
#[derive(Debug, Clone, PartialEq)]
pub struct Bid {
    pub id: String,
    pub user_id: String,
    pub auction_id: String,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

impl Bid {
    /// Converts an entity model to a bid domain model at the repository boundary.
    pub fn from_entity(entity: entity::bid::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            auction_id: entity.auction_id,
            amount: entity.amount,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> BidDto {
        BidDto {
            id: self.id,
            user_id: self.user_id,
            auction_id: self.auction_id,
            amount: self.amount,
            created_at: self.created_at,
        }
    }
}

/// Parameters for placing a bid. IDs are validated UUID strings.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBidParams {
    pub user_id: String,
    pub auction_id: String,
    pub amount: f64,
}

impl CreateBidParams {
    /// Validates and converts the bid DTO.
    ///
    /// # Returns
    /// - `Ok(CreateBidParams)` - IDs are UUIDs and the amount is finite and positive
    /// - `Err(AppError::BadRequest)` - Validation failed
    pub fn from_dto(dto: CreateBidDto) -> Result<Self, AppError> {
        let user_id = parse_uuid("user_id", &dto.user_id)?;
        let auction_id = parse_uuid("auction_id", &dto.auction_id)?;

        if !dto.amount.is_finite() || dto.amount <= 0.0 {
            return Err(AppError::BadRequest(
                "amount must be a positive number".to_string(),
            ));
        }

        Ok(Self {
            user_id,
            auction_id,
            amount: dto.amount,
        })
    }
}
