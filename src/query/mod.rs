//! Named query cache shared by the page views.
//!
//! Every read goes through a [`QueryCache`] slot. Concurrent reads of the same key
//! share one in-flight fetch; the first successful result is kept until a mutation
//! invalidates the key. Failed fetches are not cached and not retried.
//!
//! Invalidations are broadcast so views that stay open (the admin dashboard)
//! can refresh when something they show has changed.

use std::{
    fmt,
    future::Future,
    sync::{Arc, Mutex, PoisonError},
};

use thiserror::Error;
use tokio::sync::{OnceCell, broadcast};

use crate::{
    models::{Appointment, CartLine, Order, Product, UserProfile},
    repository::StoreError,
};

const EVENT_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Products,
    Appointments,
    Orders,
    Cart,
    UserData,
}

impl QueryKey {
    pub const ALL: [QueryKey; 5] = [
        QueryKey::Products,
        QueryKey::Appointments,
        QueryKey::Orders,
        QueryKey::Cart,
        QueryKey::UserData,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKey::Products => "products",
            QueryKey::Appointments => "appointments",
            QueryKey::Orders => "orders",
            QueryKey::Cart => "cart",
            QueryKey::UserData => "userData",
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("query `{key}` failed: {source}")]
pub struct QueryError {
    pub key: QueryKey,
    #[source]
    pub source: StoreError,
}

type Slot<T> = Arc<OnceCell<Result<T, StoreError>>>;

#[derive(Debug)]
pub struct QueryCache<T> {
    key: QueryKey,
    slot: Mutex<Slot<T>>,
}

impl<T> QueryCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(key: QueryKey) -> Self {
        Self {
            key,
            slot: Mutex::new(Arc::new(OnceCell::new())),
        }
    }

    pub fn key(&self) -> QueryKey {
        self.key
    }

    fn current(&self) -> Slot<T> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the cached value, or runs `fetch` once for all concurrent callers.
    pub async fn fetch<F, Fut>(&self, fetch: F) -> Result<T, QueryError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, StoreError>>,
    {
        let slot = self.current();
        let key = self.key;
        let result = slot
            .get_or_init(|| async move {
                tracing::debug!(query = %key, "fetching");
                fetch().await
            })
            .await
            .clone();

        if let Err(err) = &result {
            tracing::warn!(query = %key, error = %err, "query failed");
            // Forget the failure so the next read fetches again.
            let mut current = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
            if Arc::ptr_eq(&current, &slot) {
                *current = Arc::new(OnceCell::new());
            }
        }

        result.map_err(|source| QueryError { key, source })
    }

    /// Drops the cached value. Reads already in flight finish with the old one.
    pub fn invalidate(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Arc::new(OnceCell::new());
    }

    pub fn is_cached(&self) -> bool {
        matches!(self.current().get(), Some(Ok(_)))
    }
}

/// The caches for every named query, plus the invalidation feed.
#[derive(Debug)]
pub struct QueryClient {
    pub products: QueryCache<Vec<Product>>,
    pub appointments: QueryCache<Vec<Appointment>>,
    pub orders: QueryCache<Vec<Order>>,
    pub cart: QueryCache<Vec<CartLine>>,
    pub user_data: QueryCache<UserProfile>,
    events: broadcast::Sender<QueryKey>,
}

impl QueryClient {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            products: QueryCache::new(QueryKey::Products),
            appointments: QueryCache::new(QueryKey::Appointments),
            orders: QueryCache::new(QueryKey::Orders),
            cart: QueryCache::new(QueryKey::Cart),
            user_data: QueryCache::new(QueryKey::UserData),
            events,
        }
    }

    /// Invalidates `key` and tells every subscriber about it.
    pub fn invalidate(&self, key: QueryKey) {
        match key {
            QueryKey::Products => self.products.invalidate(),
            QueryKey::Appointments => self.appointments.invalidate(),
            QueryKey::Orders => self.orders.invalidate(),
            QueryKey::Cart => self.cart.invalidate(),
            QueryKey::UserData => self.user_data.invalidate(),
        }
        // No subscribers is fine.
        let receivers = self.events.send(key).unwrap_or(0);
        tracing::debug!(query = %key, receivers, "invalidated");
    }

    pub fn subscribe(&self) -> broadcast::Receiver<QueryKey> {
        self.events.subscribe()
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}
