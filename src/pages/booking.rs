use askama::Template;
use axum::{Form, extract::State, response::Response};

use super::{Alert, Shell, render, render_with_status};
use crate::{
    dto::bookings::BookingRequest,
    middleware::auth::RequireUser,
    models::ServiceKind,
    services::booking_service,
    session::Session,
    state::AppState,
};

pub const BOOKED_NOTICE: &str = "Booking submitted successfully!";

pub struct ServiceOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "booking.html")]
pub struct BookingTemplate {
    pub shell: Shell,
    pub form: BookingRequest,
    pub services: Vec<ServiceOption>,
}

impl BookingTemplate {
    fn new(session: Session, form: BookingRequest, alerts: Vec<Alert>) -> Self {
        let services = ServiceKind::ALL
            .iter()
            .map(|kind| ServiceOption {
                value: kind.as_str(),
                label: kind.label(),
                selected: form.service.trim() == kind.as_str(),
            })
            .collect();
        Self {
            shell: Shell::new(session, "Book a Service", "/booking").with_alerts(alerts),
            form,
            services,
        }
    }
}

pub async fn show(RequireUser(session): RequireUser) -> Response {
    render(BookingTemplate::new(session, BookingRequest::default(), Vec::new()))
}

/// On success the form is cleared; on failure the submitted values come back with the errors.
pub async fn submit(
    State(state): State<AppState>,
    RequireUser(session): RequireUser,
    Form(form): Form<BookingRequest>,
) -> Response {
    match booking_service::book_appointment(&state, &form).await {
        Ok(_) => render(BookingTemplate::new(
            session,
            BookingRequest::default(),
            vec![Alert::success(BOOKED_NOTICE)],
        )),
        Err(err) => {
            let alerts = err.messages().into_iter().map(Alert::error).collect();
            render_with_status(err.status(), BookingTemplate::new(session, form, alerts))
        }
    }
}
