use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StoreError, StoreRepository};
use crate::{
    fixtures,
    models::{Appointment, CartLine, NewBooking, NewProduct, Order, Product, UserProfile},
};

#[derive(Debug, Default)]
struct StoreData {
    products: Vec<Product>,
    appointments: Vec<Appointment>,
    orders: Vec<Order>,
    cart: Vec<CartLine>,
    profile: Option<UserProfile>,
}

/// Process-local store. Everything is lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<StoreData>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with the demo catalog, appointments, orders and profile.
    pub fn seeded() -> Self {
        Self {
            data: RwLock::new(StoreData {
                products: fixtures::products(),
                appointments: fixtures::appointments(),
                orders: fixtures::orders(),
                cart: Vec::new(),
                profile: Some(fixtures::user_profile()),
            }),
        }
    }
}

fn next_id<T>(items: &[T], id: impl Fn(&T) -> i64) -> i64 {
    items.iter().map(id).max().unwrap_or(0) + 1
}

#[async_trait]
impl StoreRepository for MemoryStore {
    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let data = self.data.read().await;
        let mut products = data.products.clone();
        products.sort_by_key(|p| p.id);
        Ok(products)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, StoreError> {
        let mut data = self.data.write().await;
        let created = Product {
            id: next_id(&data.products, |p| p.id),
            name: product.name,
            price: product.price,
            image: product.image,
        };
        data.products.push(created.clone());
        Ok(created)
    }

    async fn list_appointments(&self) -> Result<Vec<Appointment>, StoreError> {
        let data = self.data.read().await;
        let mut appointments = data.appointments.clone();
        appointments.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(appointments)
    }

    async fn create_booking(&self, booking: NewBooking) -> Result<Appointment, StoreError> {
        let mut data = self.data.write().await;
        let appointment = Appointment {
            id: next_id(&data.appointments, |a| a.id),
            name: booking.name,
            email: booking.email,
            phone: booking.phone,
            service: booking.service,
            date: booking.date,
            time: booking.time,
        };
        data.appointments.push(appointment.clone());
        Ok(appointment)
    }

    async fn list_orders(&self) -> Result<Vec<Order>, StoreError> {
        let data = self.data.read().await;
        let mut orders = data.orders.clone();
        orders.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        Ok(orders)
    }

    async fn list_cart(&self) -> Result<Vec<CartLine>, StoreError> {
        Ok(self.data.read().await.cart.clone())
    }

    async fn add_to_cart(&self, product_id: i64, quantity: u32) -> Result<CartLine, StoreError> {
        let mut data = self.data.write().await;
        let name = data
            .products
            .iter()
            .find(|p| p.id == product_id)
            .map(|p| p.name.clone())
            .ok_or_else(|| StoreError::NotFound(format!("product {product_id}")))?;

        if let Some(line) = data.cart.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = line.quantity.saturating_add(quantity);
            return Ok(line.clone());
        }

        let line = CartLine {
            product_id,
            name,
            quantity,
        };
        data.cart.push(line.clone());
        Ok(line)
    }

    async fn user_profile(&self) -> Result<UserProfile, StoreError> {
        self.data
            .read()
            .await
            .profile
            .clone()
            .ok_or_else(|| StoreError::NotFound("user profile".to_string()))
    }
}
