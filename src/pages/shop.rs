use askama::Template;
use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use super::{Alert, Shell, render_with_status};
use crate::{
    dto::cart::AddToCartRequest,
    middleware::auth::RequireUser,
    models::Product,
    services::catalog_service,
    session::Session,
    state::AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct ShopQuery {
    pub added: Option<i64>,
}

#[derive(Template)]
#[template(path = "shop.html")]
pub struct ShopTemplate {
    pub shell: Shell,
    pub products: Vec<Product>,
    pub products_error: bool,
    pub cart_count: Option<u64>,
}

async fn shop_page(
    state: &AppState,
    session: Session,
    status: StatusCode,
    added: Option<i64>,
    mut alerts: Vec<Alert>,
) -> Response {
    let (products, products_error) = match catalog_service::list_products(state).await {
        Ok(products) => (products, false),
        Err(_) => (Vec::new(), true),
    };
    let cart_count = catalog_service::list_cart(state)
        .await
        .ok()
        .map(|cart| cart.item_count());

    if let Some(product) = added.and_then(|id| products.iter().find(|p| p.id == id)) {
        alerts.push(Alert::success(format!("Added {} to your cart.", product.name)));
    }

    render_with_status(
        status,
        ShopTemplate {
            shell: Shell::new(session, "Electrical Products Shop", "/shop").with_alerts(alerts),
            products,
            products_error,
            cart_count,
        },
    )
}

pub async fn show(
    State(state): State<AppState>,
    RequireUser(session): RequireUser,
    Query(query): Query<ShopQuery>,
) -> Response {
    shop_page(&state, session, StatusCode::OK, query.added, Vec::new()).await
}

pub async fn add_to_cart(
    State(state): State<AppState>,
    RequireUser(session): RequireUser,
    Form(request): Form<AddToCartRequest>,
) -> Response {
    match catalog_service::add_to_cart(&state, request).await {
        Ok(line) => Redirect::to(&format!("/shop?added={}", line.product_id)).into_response(),
        Err(err) => {
            let alerts = err.messages().into_iter().map(Alert::error).collect();
            shop_page(&state, session, err.status(), None, alerts).await
        }
    }
}
