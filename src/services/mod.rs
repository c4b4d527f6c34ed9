pub mod account_service;
pub mod booking_service;
pub mod catalog_service;
pub mod order_service;
