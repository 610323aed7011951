use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        auction::{AuctionDto, AuctionStatusDto, CreateAuctionDto, WinningInfoDto},
    },
    server::{
        error::AppError,
        model::auction::{status_from_dto, AuctionFilter, CreateAuctionParams},
        service::auction::AuctionService,
        state::AppState,
        util::parse::parse_uuid,
    },
};

/// Tag for grouping auction endpoints in OpenAPI documentation
pub static AUCTION_TAG: &str = "auction";

/// Optional listing filters. Blank values are ignored.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AuctionQuery {
    /// Lifecycle status to match
    pub status: Option<AuctionStatusDto>,
    /// Exact category
    pub category: Option<String>,
    /// Substring of the product name
    #[serde(alias = "productName")]
    pub product_name: Option<String>,
}

impl AuctionQuery {
    fn into_filter(self) -> AuctionFilter {
        let non_blank = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        AuctionFilter {
            status: self.status.map(status_from_dto),
            category: non_blank(self.category),
            product_name: non_blank(self.product_name),
        }
    }
}

/// Create a new auction.
///
/// The auction starts Active and closes once the configured duration has elapsed since
/// creation.
///
/// # Returns
/// - `201 Created` - The created auction
/// - `400 Bad Request` - A field failed validation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/auctions",
    tag = AUCTION_TAG,
    request_body = CreateAuctionDto,
    responses(
        (status = 201, description = "Successfully created auction", body = AuctionDto),
        (status = 400, description = "Invalid auction data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_auction(
    State(state): State<AppState>,
    Json(payload): Json<CreateAuctionDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateAuctionParams::from_dto(payload)?;

    let auction = AuctionService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(auction.into_dto())))
}

/// List auctions, newest first.
#[utoipa::path(
    get,
    path = "/auctions",
    tag = AUCTION_TAG,
    params(AuctionQuery),
    responses(
        (status = 200, description = "Matching auctions", body = Vec<AuctionDto>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_auctions(
    State(state): State<AppState>,
    Query(query): Query<AuctionQuery>,
) -> Result<impl IntoResponse, AppError> {
    let auctions = AuctionService::new(&state.db)
        .find_all(query.into_filter())
        .await?;

    let auctions: Vec<AuctionDto> = auctions.into_iter().map(|a| a.into_dto()).collect();

    Ok(Json(auctions))
}

/// Get an auction by ID.
///
/// # Returns
/// - `200 OK` - The auction
/// - `400 Bad Request` - `auction_id` is not a UUID
/// - `404 Not Found` - No auction with that ID
#[utoipa::path(
    get,
    path = "/auctions/{auction_id}",
    tag = AUCTION_TAG,
    params(
        ("auction_id" = String, Path, description = "Auction UUID")
    ),
    responses(
        (status = 200, description = "Auction found", body = AuctionDto),
        (status = 400, description = "Malformed auction ID", body = ErrorDto),
        (status = 404, description = "Auction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_auction(
    State(state): State<AppState>,
    Path(auction_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let auction_id = parse_uuid("auction_id", &auction_id)?;

    let auction = AuctionService::new(&state.db).get_by_id(&auction_id).await?;

    Ok(Json(auction.into_dto()))
}

/// Get an auction with its winning bid.
///
/// The winning bid is the highest amount, the earliest on ties. `bid` is `null` when the
/// auction has no bids. Works for Active auctions too, reporting the current leader.
#[utoipa::path(
    get,
    path = "/auction/winner/{auction_id}",
    tag = AUCTION_TAG,
    params(
        ("auction_id" = String, Path, description = "Auction UUID")
    ),
    responses(
        (status = 200, description = "Auction and winning bid", body = WinningInfoDto),
        (status = 400, description = "Malformed auction ID", body = ErrorDto),
        (status = 404, description = "Auction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_winner(
    State(state): State<AppState>,
    Path(auction_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let auction_id = parse_uuid("auction_id", &auction_id)?;

    let winner = AuctionService::new(&state.db).get_winner(&auction_id).await?;

    Ok(Json(winner.into_dto()))
}
