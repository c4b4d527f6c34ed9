//! Data source behind every page and JSON endpoint.
//!
//! [`StoreRepository`] is the seam between the views and wherever the catalog,
//! bookings and orders live. [`MemoryStore`] is the implementation the server
//! runs with; [`MockStoreRepository`] is generated for tests.

mod memory;

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

use crate::models::{Appointment, CartLine, NewBooking, NewProduct, Order, Product, UserProfile};

pub use memory::MemoryStore;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[automock]
#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// Lists the catalog in id order.
    async fn list_products(&self) -> Result<Vec<Product>, StoreError>;

    /// Adds a product and assigns it the next id.
    async fn create_product(&self, product: NewProduct) -> Result<Product, StoreError>;

    /// Lists appointments, most recent booking first.
    async fn list_appointments(&self) -> Result<Vec<Appointment>, StoreError>;

    /// Records a booking as an appointment.
    async fn create_booking(&self, booking: NewBooking) -> Result<Appointment, StoreError>;

    /// Lists orders, newest first.
    async fn list_orders(&self) -> Result<Vec<Order>, StoreError>;

    /// Returns the cart contents.
    async fn list_cart(&self) -> Result<Vec<CartLine>, StoreError>;

    /// Adds `quantity` of a product to the cart, merging with an existing line.
    async fn add_to_cart(&self, product_id: i64, quantity: u32) -> Result<CartLine, StoreError>;

    /// Returns the signed-in customer's dashboard data.
    async fn user_profile(&self) -> Result<UserProfile, StoreError>;
}
