use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        bookings::BookingRequest,
        cart::{AddToCartRequest, CartList},
        orders::{AppointmentList, OrderList},
        products::{CreateProductRequest, ProductList},
    },
    models::{Appointment, CartLine, Order, OrderLine, Product, ServiceKind},
    response::{ApiResponse, Meta},
    routes::{appointments, bookings, cart, health, orders, params, products},
    session::ROLE_COOKIE,
};

struct RoleCookieAddon;

impl Modify for RoleCookieAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "role_cookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                ROLE_COOKIE,
                "`user` or `admin`, set by the login pages",
            ))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::create_product,
        appointments::list_appointments,
        orders::list_orders,
        bookings::create_booking,
        cart::cart_list,
        cart::add_to_cart
    ),
    components(
        schemas(
            Product,
            Appointment,
            ServiceKind,
            Order,
            OrderLine,
            CartLine,
            CreateProductRequest,
            BookingRequest,
            AddToCartRequest,
            ProductList,
            AppointmentList,
            OrderList,
            CartList,
            params::Pagination,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<AppointmentList>,
            ApiResponse<OrderList>,
            ApiResponse<CartList>
        )
    ),
    security(
        ("role_cookie" = [])
    ),
    modifiers(&RoleCookieAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Product catalogue"),
        (name = "Appointments", description = "Service bookings"),
        (name = "Orders", description = "Order history"),
        (name = "Cart", description = "Shopping cart"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_api_path() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();
        for path in ["/health", "/api/products", "/api/appointments", "/api/orders", "/api/bookings", "/api/cart"] {
            assert!(paths.iter().any(|p| p == path), "missing {path}");
        }
    }
}
