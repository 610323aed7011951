//! Domain models for auction data operations.
//!
//! Defines the auction domain model, its lifecycle helpers and the parameter types used
//! to create and query auctions.

use chrono::{DateTime, TimeDelta, Utc};
use std::time::Duration;

pub use entity::auction::{AuctionStatus, ProductCondition};

use crate::{
    model::auction::{
        AuctionDto, AuctionStatusDto, CreateAuctionDto, ProductConditionDto, WinningInfoDto,
    },
    server::{error::AppError, model::bid::Bid},
};

const MIN_PRODUCT_NAME_LEN: usize = 2;
const MIN_CATEGORY_LEN: usize = 3;
const MIN_DESCRIPTION_LEN: usize = 11;
const MAX_DESCRIPTION_LEN: usize = 200;

/// A timed auction.
///
/// Everything but `status` is immutable after creation; `status` only ever moves from
/// `Active` to `Completed`.
#[derive(Debug, Clone, PartialEq)]
pub struct Auction {
    /// UUID assigned on creation.
    pub id: String,
    pub product_name: String,
    pub category: String,
    pub description: String,
    pub condition: ProductCondition,
    pub status: AuctionStatus,
    /// Set once by the store on insert.
    pub created_at: DateTime<Utc>,
}

impl Auction {
    /// Converts an entity model to an auction domain model at the repository boundary.
    pub fn from_entity(entity: entity::auction::Model) -> Self {
        Self {
            id: entity.id,
            product_name: entity.product_name,
            category: entity.category,
            description: entity.description,
            condition: entity.condition,
            status: entity.status,
            created_at: entity.created_at,
        }
    }

    /// Converts the domain model to its API representation.
    pub fn into_dto(self) -> AuctionDto {
        AuctionDto {
            id: self.id,
            product_name: self.product_name,
            category: self.category,
            description: self.description,
            condition: condition_into_dto(self.condition),
            status: status_into_dto(self.status),
            created_at: self.created_at,
        }
    }

    /// Instant at which the auction's active window ends.
    ///
    /// Saturates to the maximum representable instant for windows too large to add.
    pub fn expires_at(&self, duration: Duration) -> DateTime<Utc> {
        TimeDelta::from_std(duration)
            .ok()
            .and_then(|delta| self.created_at.checked_add_signed(delta))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Whether the auction still accepts bids at `now`.
    ///
    /// Checks the window directly rather than trusting `status` alone, since the expiry
    /// sweep may not have run yet.
    pub fn is_open_at(&self, now: DateTime<Utc>, duration: Duration) -> bool {
        self.status == AuctionStatus::Active && now < self.expires_at(duration)
    }
}

/// Parameters for creating a new auction.
///
/// The store assigns `id`, `status` and `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAuctionParams {
    pub product_name: String,
    pub category: String,
    pub description: String,
    pub condition: ProductCondition,
}

impl CreateAuctionParams {
    /// Validates and converts the creation DTO.
    ///
    /// # Returns
    /// - `Ok(CreateAuctionParams)` - All fields within bounds
    /// - `Err(AppError::BadRequest)` - A field failed validation
    pub fn from_dto(dto: CreateAuctionDto) -> Result<Self, AppError> {
        let product_name = dto.product_name.trim().to_string();
        let category = dto.category.trim().to_string();
        let description = dto.description.trim().to_string();

        if product_name.chars().count() < MIN_PRODUCT_NAME_LEN {
            return Err(AppError::BadRequest(format!(
                "product_name must be at least {} characters",
                MIN_PRODUCT_NAME_LEN
            )));
        }
        if category.chars().count() < MIN_CATEGORY_LEN {
            return Err(AppError::BadRequest(format!(
                "category must be at least {} characters",
                MIN_CATEGORY_LEN
            )));
        }
        let description_len = description.chars().count();
        if !(MIN_DESCRIPTION_LEN..=MAX_DESCRIPTION_LEN).contains(&description_len) {
            return Err(AppError::BadRequest(format!(
                "description must be between {} and {} characters",
                MIN_DESCRIPTION_LEN, MAX_DESCRIPTION_LEN
            )));
        }

        Ok(Self {
            product_name,
            category,
            description,
            condition: condition_from_dto(dto.condition),
        })
    }
}

/// Optional filters for listing auctions. `None` fields do not filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuctionFilter {
    pub status: Option<AuctionStatus>,
    /// Exact match.
    pub category: Option<String>,
    /// Substring match.
    pub product_name: Option<String>,
}

/// An auction with its highest bid.
#[derive(Debug, Clone, PartialEq)]
pub struct AuctionWinner {
    pub auction: Auction,
    pub bid: Option<Bid>,
}

impl AuctionWinner {
    pub fn into_dto(self) -> WinningInfoDto {
        WinningInfoDto {
            auction: self.auction.into_dto(),
            bid: self.bid.map(Bid::into_dto),
        }
    }
}

pub fn status_from_dto(status: AuctionStatusDto) -> AuctionStatus {
    match status {
        AuctionStatusDto::Active => AuctionStatus::Active,
        AuctionStatusDto::Completed => AuctionStatus::Completed,
    }
}

fn status_into_dto(status: AuctionStatus) -> AuctionStatusDto {
    match status {
        AuctionStatus::Active => AuctionStatusDto::Active,
        AuctionStatus::Completed => AuctionStatusDto::Completed,
    }
}

fn condition_from_dto(condition: ProductConditionDto) -> ProductCondition {
    match condition {
        ProductConditionDto::New => ProductCondition::New,
        ProductConditionDto::Used => ProductCondition::Used,
    }
}

fn condition_into_dto(condition: ProductCondition) -> ProductConditionDto {
    match condition {
        ProductCondition::New => ProductConditionDto::New,
        ProductCondition::Used => ProductConditionDto::Used,
    }
}
