use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::CartLine;

fn one() -> u32 {
    1
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    #[serde(alias = "product_id")]
    pub product_id: i64,
    #[serde(default = "one")]
    pub quantity: u32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartList {
    pub items: Vec<CartLine>,
}

impl CartList {
    /// Total units in the cart. Summed as `u64` since each line may hold up to `u32::MAX`.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }
}
