use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        bid::{BidDto, CreateBidDto},
    },
    server::{
        error::AppError, model::bid::CreateBidParams, service::bid::BidService, state::AppState,
        util::parse::parse_uuid,
    },
};

/// Tag for grouping bid endpoints in OpenAPI documentation
pub static BID_TAG: &str = "bid";

/// Place a bid.
///
/// # Returns
/// - `201 Created` - The accepted bid
/// - `400 Bad Request` - Malformed IDs, non-positive amount, or the auction is closed
/// - `404 Not Found` - User or auction does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/bid",
    tag = BID_TAG,
    request_body = CreateBidDto,
    responses(
        (status = 201, description = "Bid accepted", body = BidDto),
        (status = 400, description = "Invalid bid or auction closed", body = ErrorDto),
        (status = 404, description = "User or auction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_bid(
    State(state): State<AppState>,
    Json(payload): Json<CreateBidDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateBidParams::from_dto(payload)?;

    let bid = BidService::new(&state.db, state.auction_duration)
        .create(params)
        .await?;

    Ok((StatusCode::CREATED, Json(bid.into_dto())))
}

/// List bids on an auction in the order they were placed.
#[utoipa::path(
    get,
    path = "/bid/{auction_id}",
    tag = BID_TAG,
    params(
        ("auction_id" = String, Path, description = "Auction UUID")
    ),
    responses(
        (status = 200, description = "Bids on the auction", body = Vec<BidDto>),
        (status = 400, description = "Malformed auction ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bids(
    State(state): State<AppState>,
    Path(auction_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let auction_id = parse_uuid("auction_id", &auction_id)?;

    let bids = BidService::new(&state.db, state.auction_duration)
        .get_by_auction(&auction_id)
        .await?;

    let bids: Vec<BidDto> = bids.into_iter().map(|b| b.into_dto()).collect();

    Ok(Json(bids))
}
