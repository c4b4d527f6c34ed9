use crate::{
    dto::bookings::BookingRequest,
    error::AppResult,
    models::Appointment,
    query::QueryKey,
    state::AppState,
};

pub async fn list_appointments(state: &AppState) -> AppResult<Vec<Appointment>> {
    let store = state.store.clone();
    let appointments = state
        .queries
        .appointments
        .fetch(|| async move { store.list_appointments().await })
        .await?;
    Ok(appointments)
}

pub async fn book_appointment(state: &AppState, request: &BookingRequest) -> AppResult<Appointment> {
    let booking = request.validate()?;
    let appointment = state.store.create_booking(booking).await?;
    tracing::info!(
        appointment_id = appointment.id,
        service = appointment.service.as_str(),
        date = %appointment.date,
        "appointment booked"
    );
    state.queries.invalidate(QueryKey::Appointments);
    Ok(appointment)
}
