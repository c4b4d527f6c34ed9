use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    dto::orders::AppointmentList,
    error::AppResult,
    middleware::auth::ensure_admin,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    services::booking_service,
    session::Session,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_appointments))
}

#[utoipa::path(
    get,
    path = "/api/appointments",
    params(Pagination),
    responses(
        (status = 200, description = "Booked appointments, newest first", body = ApiResponse<AppointmentList>),
        (status = 403, description = "Admin role required"),
    ),
    tag = "Appointments"
)]
pub async fn list_appointments(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<AppointmentList>>> {
    ensure_admin(&session)?;
    let appointments = booking_service::list_appointments(&state).await?;
    let (items, page, per_page, total) = pagination.slice(appointments);

    Ok(Json(ApiResponse::success(
        "Appointments",
        AppointmentList { items },
        Some(Meta::new(page, per_page, total)),
    )))
}
