use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auction::*, bid::*, user::*},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Auction House API"),
    tags(
        (name = AUCTION_TAG, description = "Timed auctions"),
        (name = BID_TAG, description = "Bids on auctions"),
        (name = USER_TAG, description = "Registered bidders")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(create_auction, list_auctions))
        .routes(routes!(get_auction))
        .routes(routes!(get_winner))
        .routes(routes!(create_bid))
        .routes(routes!(get_bids))
        .routes(routes!(get_user))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
