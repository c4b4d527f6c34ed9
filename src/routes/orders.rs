use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    dto::orders::OrderList,
    error::AppResult,
    middleware::auth::ensure_admin,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    services::order_service,
    session::Session,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_orders))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    params(Pagination),
    responses(
        (status = 200, description = "Recent orders", body = ApiResponse<OrderList>),
        (status = 403, description = "Admin role required"),
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    ensure_admin(&session)?;
    let (items, page, per_page, total) =
        pagination.slice(order_service::list_orders(&state).await?);

    let meta = Meta::new(page, per_page, total);
    Ok(Json(ApiResponse::success("OK", OrderList { items }, Some(meta))))
}
