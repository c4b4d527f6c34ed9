use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::cart::{AddToCartRequest, CartList},
    error::AppResult,
    middleware::auth::ensure_user,
    models::CartLine,
    response::{ApiResponse, Meta},
    services::catalog_service,
    session::Session,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(cart_list).post(add_to_cart))
}

#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart lines for the signed-in customer", body = ApiResponse<CartList>),
        (status = 403, description = "User role required"),
    ),
    tag = "Cart"
)]
pub async fn cart_list(
    State(state): State<AppState>,
    session: Session,
) -> AppResult<Json<ApiResponse<CartList>>> {
    ensure_user(&session)?;
    let cart = catalog_service::list_cart(&state).await?;
    let total = cart.items.len() as i64;

    Ok(Json(ApiResponse::success(
        "OK",
        cart,
        Some(Meta::new(1, total.max(1), total)),
    )))
}

#[utoipa::path(
    post,
    path = "/api/cart",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Add or update cart line", body = ApiResponse<CartLine>),
        (status = 400, description = "Quantity must be positive"),
        (status = 403, description = "User role required"),
        (status = 404, description = "Unknown product"),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<Json<ApiResponse<CartLine>>> {
    ensure_user(&session)?;
    let line = catalog_service::add_to_cart(&state, payload).await?;
    Ok(Json(ApiResponse::success("OK", line, None)))
}
