use crate::{error::AppResult, models::Order, state::AppState};

pub async fn list_orders(state: &AppState) -> AppResult<Vec<Order>> {
    let store = state.store.clone();
    let orders = state
        .queries
        .orders
        .fetch(|| async move { store.list_orders().await })
        .await?;
    Ok(orders)
}
