use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppError, models::NewProduct, models::Product};

/// JSON body of `POST /api/products`. `price` may be a number or a string.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: String,
    #[schema(value_type = f64, example = 19.99)]
    pub price: Decimal,
    pub image: String,
}

impl CreateProductRequest {
    pub fn validate(self) -> Result<NewProduct, AppError> {
        validate_product(&self.name, Some(self.price), &self.image, Vec::new())
    }
}

/// The admin "Add New Product" form, kept as typed so it can be re-rendered.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub image: String,
}

impl ProductForm {
    pub fn validate(&self) -> Result<NewProduct, AppError> {
        let mut errors = Vec::new();
        let price = match self.price.trim() {
            "" => {
                errors.push("Price is required".to_string());
                None
            }
            raw => match raw.parse::<Decimal>() {
                Ok(price) => Some(price),
                Err(_) => {
                    errors.push("Price must be a number".to_string());
                    None
                }
            },
        };
        validate_product(&self.name, price, &self.image, errors)
    }
}

fn validate_product(
    name: &str,
    price: Option<Decimal>,
    image: &str,
    mut errors: Vec<String>,
) -> Result<NewProduct, AppError> {
    let name = name.trim();
    let image = image.trim();

    if name.is_empty() {
        errors.push("Product name is required".to_string());
    }
    if let Some(price) = price {
        if price < Decimal::ZERO {
            errors.push("Price cannot be negative".to_string());
        }
    }
    if image.is_empty() {
        errors.push("Image URL is required".to_string());
    } else if !(image.starts_with("https://") || image.starts_with("http://")) {
        errors.push("Image URL must start with http:// or https://".to_string());
    }

    match price {
        Some(price) if errors.is_empty() => Ok(NewProduct {
            name: name.to_string(),
            price: price.round_dp(2),
            image: image.to_string(),
        }),
        _ => Err(AppError::Validation(errors)),
    }
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}
