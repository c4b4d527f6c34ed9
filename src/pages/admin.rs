use std::convert::Infallible;

use askama::Template;
use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{
        IntoResponse, Redirect, Response,
        sse::{Event, KeepAlive, Sse},
    },
};
use serde::Deserialize;
use tokio_stream::{Stream, StreamExt, wrappers::BroadcastStream};

use super::{Alert, Shell, render_with_status};
use crate::{
    dto::products::ProductForm,
    middleware::auth::RequireAdmin,
    models::{Appointment, Order, Product},
    query::QueryKey,
    services::{booking_service, catalog_service, order_service},
    session::Session,
    state::AppState,
};

/// Query keys the dashboard shows; an invalidation of any of them refreshes it.
pub const WATCHED_KEYS: [QueryKey; 3] =
    [QueryKey::Products, QueryKey::Appointments, QueryKey::Orders];

#[derive(Debug, Default, Deserialize)]
pub struct AdminQuery {
    pub created: Option<i64>,
}

#[derive(Template)]
#[template(path = "admin.html")]
pub struct AdminTemplate {
    pub shell: Shell,
    pub form: ProductForm,
    pub products: Option<Vec<Product>>,
    pub appointments: Option<Vec<Appointment>>,
    pub orders: Option<Vec<Order>>,
    pub watched: String,
}

async fn admin_page(
    state: &AppState,
    session: Session,
    status: StatusCode,
    form: ProductForm,
    alerts: Vec<Alert>,
) -> Response {
    let (products, appointments, orders) = tokio::join!(
        catalog_service::list_products(state),
        booking_service::list_appointments(state),
        order_service::list_orders(state),
    );

    let watched = WATCHED_KEYS
        .iter()
        .map(QueryKey::as_str)
        .collect::<Vec<_>>()
        .join(",");

    render_with_status(
        status,
        AdminTemplate {
            shell: Shell::new(session, "Admin Dashboard", "/admin").with_alerts(alerts),
            form,
            products: products.ok(),
            appointments: appointments.ok(),
            orders: orders.ok(),
            watched,
        },
    )
}

pub async fn show(
    State(state): State<AppState>,
    RequireAdmin(session): RequireAdmin,
    Query(query): Query<AdminQuery>,
) -> Response {
    let alerts = query
        .created
        .map(|id| Alert::success(format!("Product #{id} added.")))
        .into_iter()
        .collect();
    admin_page(&state, session, StatusCode::OK, ProductForm::default(), alerts).await
}

pub async fn add_product(
    State(state): State<AppState>,
    RequireAdmin(session): RequireAdmin,
    Form(form): Form<ProductForm>,
) -> Response {
    let result = match form.validate() {
        Ok(product) => catalog_service::create_product(&state, product).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(product) => Redirect::to(&format!("/admin?created={}", product.id)).into_response(),
        Err(err) => {
            let alerts = err.messages().into_iter().map(Alert::error).collect();
            admin_page(&state, session, err.status(), form, alerts).await
        }
    }
}

/// Server-sent events: one `invalidate` event per invalidated query key.
pub async fn events(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = BroadcastStream::new(state.queries.subscribe()).filter_map(|result| match result {
        Ok(key) => Some(Ok(Event::default().event("invalidate").data(key.as_str()))),
        // Lagged: the next event triggers a refresh anyway.
        Err(_) => None,
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
