mod common;

use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use axum::{
    body::BodyDataStream,
    http::{StatusCode, header},
};
use electropro::{
    config::AppConfig,
    models::{Appointment, CartLine, NewBooking, NewProduct, Order, Product, UserProfile},
    query::QueryKey,
    repository::{MemoryStore, MockStoreRepository, StoreError, StoreRepository},
    services::catalog_service,
    state::AppState,
};
use rust_decimal::Decimal;
use tokio_stream::StreamExt;

/// Seeded store that counts product reads and answers them slowly.
struct SlowStore {
    inner: MemoryStore,
    product_reads: AtomicUsize,
}

#[async_trait]
impl StoreRepository for SlowStore {
    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        self.product_reads.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(50)).await;
        self.inner.list_products().await
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, StoreError> {
        self.inner.create_product(product).await
    }

    async fn list_appointments(&self) -> Result<Vec<Appointment>, StoreError> {
        self.inner.list_appointments().await
    }

    async fn create_booking(&self, booking: NewBooking) -> Result<Appointment, StoreError> {
        self.inner.create_booking(booking).await
    }

    async fn list_orders(&self) -> Result<Vec<Order>, StoreError> {
        self.inner.list_orders().await
    }

    async fn list_cart(&self) -> Result<Vec<CartLine>, StoreError> {
        self.inner.list_cart().await
    }

    async fn add_to_cart(&self, product_id: i64, quantity: u32) -> Result<CartLine, StoreError> {
        self.inner.add_to_cart(product_id, quantity).await
    }

    async fn user_profile(&self) -> Result<UserProfile, StoreError> {
        self.inner.user_profile().await
    }
}

/// Reads the event stream until the next `invalidate` frame and returns it.
async fn next_invalidation(stream: &mut BodyDataStream) -> String {
    let read = async {
        loop {
            let chunk = stream
                .next()
                .await
                .expect("event stream closed")
                .expect("event stream failed");
            let frame = String::from_utf8(chunk.to_vec()).unwrap();
            if frame.contains("event: invalidate") {
                return frame;
            }
        }
    };
    tokio::time::timeout(Duration::from_secs(2), read)
        .await
        .expect("no invalidate event")
}

fn product(id: i64, name: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        price: Decimal::new(999, 2),
        image: format!("https://img.example.com/{id}.jpg"),
    }
}

#[tokio::test]
async fn concurrent_reads_share_one_fetch() {
    let store = Arc::new(SlowStore {
        inner: MemoryStore::seeded(),
        product_reads: AtomicUsize::new(0),
    });
    let state = AppState::new(store.clone(), AppConfig::default());

    let (a, b, c) = tokio::join!(
        catalog_service::list_products(&state),
        catalog_service::list_products(&state),
        catalog_service::list_products(&state),
    );

    assert_eq!(a.unwrap().len(), 6);
    assert_eq!(b.unwrap().len(), 6);
    assert_eq!(c.unwrap().len(), 6);
    assert_eq!(store.product_reads.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn cached_products_are_not_fetched_again() {
    let mut store = MockStoreRepository::new();
    store
        .expect_list_products()
        .times(1)
        .returning(|| Ok(vec![product(1, "Fuse")]));
    let state = AppState::new(Arc::new(store), AppConfig::default());

    for _ in 0..3 {
        let products = catalog_service::list_products(&state).await.unwrap();
        assert_eq!(products[0].name, "Fuse");
    }
    assert!(state.queries.products.is_cached());
}

#[tokio::test]
async fn failed_reads_are_not_cached() {
    let mut store = MockStoreRepository::new();
    let mut calls = 0;
    store.expect_list_products().times(2).returning(move || {
        calls += 1;
        if calls == 1 {
            Err(StoreError::Unavailable("catalog offline".into()))
        } else {
            Ok(vec![product(1, "Fuse")])
        }
    });
    let state = AppState::new(Arc::new(store), AppConfig::default());

    let err = catalog_service::list_products(&state).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(!state.queries.products.is_cached());

    let products = catalog_service::list_products(&state).await.unwrap();
    assert_eq!(products.len(), 1);
}

#[tokio::test]
async fn shop_shows_a_static_error_when_products_fail() {
    let mut store = MockStoreRepository::new();
    store
        .expect_list_products()
        .returning(|| Err(StoreError::Unavailable("catalog offline".into())));
    store.expect_list_cart().returning(|| Ok(Vec::new()));
    let app = common::app_with(AppState::new(Arc::new(store), AppConfig::default()));

    let response = common::get(&app, "/shop", Some("user")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_text(response).await;
    assert!(body.contains("Error loading products"));
    assert!(!body.contains("Add to Cart"));
}

#[tokio::test]
async fn dashboard_shows_a_static_error_when_profile_fails() {
    let mut store = MockStoreRepository::new();
    store
        .expect_user_profile()
        .returning(|| Err(StoreError::NotFound("user profile".into())));
    let app = common::app_with(AppState::new(Arc::new(store), AppConfig::default()));

    let response = common::get(&app, "/dashboard", Some("user")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(common::body_text(response).await.contains("Error loading user data"));
}

#[tokio::test]
async fn adding_a_product_invalidates_and_refreshes_the_admin_view() {
    let state = AppState::in_memory(AppConfig::default());
    let mut events = state.queries.subscribe();
    let app = common::app_with(state.clone());

    let before = common::body_text(common::get(&app, "/admin", Some("admin")).await).await;
    assert!(!before.contains("Cable Ties"));
    assert!(state.queries.products.is_cached());

    let response = common::post_form(
        &app,
        "/admin/products",
        Some("admin"),
        "name=Cable+Ties&price=4.50&image=https%3A%2F%2Fimg.example.com%2Fties.jpg",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(common::location(&response), Some("/admin?created=7"));
    assert_eq!(events.recv().await.unwrap(), QueryKey::Products);
    assert!(!state.queries.products.is_cached());

    let after = common::body_text(common::get(&app, "/admin?created=7", Some("admin")).await).await;
    assert!(after.contains("Cable Ties"));
    assert!(after.contains("$4.50"));
    assert!(after.contains("Product #7 added."));
}

#[tokio::test]
async fn invalid_product_form_is_rerendered_without_changes() {
    let state = AppState::in_memory(AppConfig::default());
    let app = common::app_with(state.clone());

    let response = common::post_form(
        &app,
        "/admin/products",
        Some("admin"),
        "name=Fuse&price=-1&image=ftp%3A%2F%2Fnope",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = common::body_text(response).await;
    assert!(body.contains("Price cannot be negative"));
    assert!(body.contains("Image URL must start with http:// or https://"));
    assert!(body.contains("value=\"Fuse\""));

    let products = catalog_service::list_products(&state).await.unwrap();
    assert_eq!(products.len(), 6);
}

#[tokio::test]
async fn booking_refreshes_the_appointment_list() {
    let state = AppState::in_memory(AppConfig::default());
    let app = common::app_with(state.clone());

    let response = common::post_form(
        &app,
        "/booking",
        Some("user"),
        "name=Ama+Mensah&email=ama%40example.com&phone=0549247690&service=repair&date=2024-04-10&time=09%3A30",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_text(response).await;
    assert!(body.contains("Booking submitted successfully!"));
    // The form is reset after a successful booking.
    assert!(!body.contains("value=\"Ama Mensah\""));

    let admin = common::body_text(common::get(&app, "/admin", Some("admin")).await).await;
    assert!(admin.contains("Ama Mensah"));
}

#[tokio::test]
async fn invalid_booking_keeps_the_submitted_values() {
    let app = common::app();
    let response = common::post_form(
        &app,
        "/booking",
        Some("user"),
        "name=Ama+Mensah&email=ama%40example.com&phone=&service=&date=&time=",
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = common::body_text(response).await;
    assert!(body.contains("value=\"Ama Mensah\""));
    assert!(body.contains("Please select a service"));
    assert!(body.contains("Phone is required"));
}

#[tokio::test]
async fn adding_to_cart_updates_the_count() {
    let app = common::app();

    let response = common::post_form(&app, "/shop/cart", Some("user"), "productId=2").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(common::location(&response), Some("/shop?added=2"));

    let body = common::body_text(common::get(&app, "/shop?added=2", Some("user")).await).await;
    assert!(body.contains("Added Smart Thermostat to your cart."));
    assert!(body.contains("Cart: 1 item(s)"));
}

#[tokio::test]
async fn admin_events_announce_invalidated_keys() {
    let app = common::app();

    let response = common::get(&app, "/admin/events", Some("admin")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/event-stream"
    );
    let mut events = response.into_body().into_data_stream();

    let response = common::post_form(
        &app,
        "/admin/products",
        Some("admin"),
        "name=Fuse&price=1.25&image=https%3A%2F%2Fimg.example.com%2Ffuse.jpg",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let frame = next_invalidation(&mut events).await;
    assert!(frame.contains("data: products"), "{frame}");

    let response = common::post_form(
        &app,
        "/booking",
        Some("user"),
        "name=Ama&email=ama%40example.com&phone=0549247690&service=upgrade&date=2024-06-01&time=10%3A00",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let frame = next_invalidation(&mut events).await;
    assert!(frame.contains("data: appointments"), "{frame}");
}

#[tokio::test]
async fn slow_event_readers_skip_what_they_missed() {
    let state = AppState::in_memory(AppConfig::default());
    let app = common::app_with(state.clone());

    let response = common::get(&app, "/admin/events", Some("admin")).await;
    let mut events = response.into_body().into_data_stream();

    // More invalidations than the channel holds, before the reader polls once.
    for _ in 0..100 {
        state.queries.invalidate(QueryKey::Orders);
    }
    state.queries.invalidate(QueryKey::Cart);

    let first = next_invalidation(&mut events).await;
    assert!(first.contains("data: orders"), "{first}");

    loop {
        let frame = next_invalidation(&mut events).await;
        if frame.contains("data: cart") {
            break;
        }
        assert!(frame.contains("data: orders"), "{frame}");
    }
}

#[tokio::test]
async fn shop_count_survives_a_full_cart_line() {
    let app = common::app();

    let response = common::post_json(
        &app,
        "/api/cart",
        Some("user"),
        serde_json::json!({ "productId": 1, "quantity": u32::MAX }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = common::post_json(
        &app,
        "/api/cart",
        Some("user"),
        serde_json::json!({ "productId": 2, "quantity": 1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = common::get(&app, "/shop", Some("user")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(common::body_text(response).await.contains("Cart: 4294967296 item(s)"));
}
