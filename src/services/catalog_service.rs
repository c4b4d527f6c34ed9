use crate::{
    dto::cart::{AddToCartRequest, CartList},
    error::{AppError, AppResult},
    models::{CartLine, NewProduct, Product},
    query::QueryKey,
    state::AppState,
};

pub async fn list_products(state: &AppState) -> AppResult<Vec<Product>> {
    let store = state.store.clone();
    let products = state
        .queries
        .products
        .fetch(|| async move { store.list_products().await })
        .await?;
    Ok(products)
}

pub async fn create_product(state: &AppState, product: NewProduct) -> AppResult<Product> {
    let created = state.store.create_product(product).await?;
    tracing::info!(product_id = created.id, name = %created.name, "product created");
    state.queries.invalidate(QueryKey::Products);
    Ok(created)
}

pub async fn list_cart(state: &AppState) -> AppResult<CartList> {
    let store = state.store.clone();
    let items = state
        .queries
        .cart
        .fetch(|| async move { store.list_cart().await })
        .await?;
    Ok(CartList { items })
}

pub async fn add_to_cart(state: &AppState, payload: AddToCartRequest) -> AppResult<CartLine> {
    if payload.quantity == 0 {
        return Err(AppError::BadRequest(
            "quantity must be greater than 0".to_string(),
        ));
    }

    let line = state
        .store
        .add_to_cart(payload.product_id, payload.quantity)
        .await?;
    tracing::info!(
        product_id = line.product_id,
        quantity = line.quantity,
        "cart updated"
    );
    state.queries.invalidate(QueryKey::Cart);
    Ok(line)
}
