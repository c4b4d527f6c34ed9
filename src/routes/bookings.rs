use axum::{Json, Router, extract::State, http::StatusCode, routing::post};

use crate::{
    dto::bookings::BookingRequest,
    error::AppResult,
    middleware::auth::ensure_user,
    models::Appointment,
    response::{ApiResponse, Meta},
    services::booking_service,
    session::Session,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(create_booking))
}

#[utoipa::path(
    post,
    path = "/api/bookings",
    request_body = BookingRequest,
    responses(
        (status = 201, description = "Appointment booked", body = ApiResponse<Appointment>),
        (status = 403, description = "User role required"),
        (status = 422, description = "Validation failed"),
    ),
    tag = "Appointments"
)]
pub async fn create_booking(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<BookingRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Appointment>>)> {
    ensure_user(&session)?;
    let appointment = booking_service::book_appointment(&state, &payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Booking submitted successfully!",
            appointment,
            Some(Meta::empty()),
        )),
    ))
}
