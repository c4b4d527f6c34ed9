//! Demo data the memory store starts with.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::models::{
    Appointment, Order, OrderLine, OrderSummary, Product, ServiceKind, UpcomingAppointment,
    UserProfile,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
}

fn product(id: i64, name: &str, cents: i64, photo: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        price: Decimal::new(cents, 2),
        image: format!("https://images.unsplash.com/{photo}?w=300&h=300&fit=crop"),
    }
}

pub fn products() -> Vec<Product> {
    vec![
        product(1, "LED Bulb Pack", 1999, "photo-1575908539614-ff89490f4a78"),
        product(2, "Smart Thermostat", 12999, "photo-1567393528677-d6adae7d4a0a"),
        product(3, "Electrical Toolkit", 4999, "photo-1581783898377-1c85bf937427"),
        product(4, "Surge Protector", 2499, "photo-1544281679-d4bb56e54631"),
        product(5, "Wire Stripper", 1499, "photo-1586864387967-d02ef85d93e8"),
        product(6, "Multimeter", 3999, "photo-1589433916287-3b7c4b7d4cb3"),
    ]
}

pub fn appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: 1,
            name: "John Doe".into(),
            email: "john@example.com".into(),
            phone: "0240000001".into(),
            service: ServiceKind::Installation,
            date: date(2024, 3, 15),
            time: time(14, 0),
        },
        Appointment {
            id: 2,
            name: "John Doe".into(),
            email: "john@example.com".into(),
            phone: "0240000001".into(),
            service: ServiceKind::Inspection,
            date: date(2024, 3, 22),
            time: time(10, 0),
        },
    ]
}

pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: 101,
            customer_name: "John Doe".into(),
            products: vec![OrderLine {
                name: "LED Bulb Pack".into(),
                quantity: 2,
            }],
            total: Decimal::new(3998, 2),
            date: date(2024, 2, 28),
        },
        Order {
            id: 102,
            customer_name: "John Doe".into(),
            products: vec![
                OrderLine {
                    name: "Smart Thermostat".into(),
                    quantity: 1,
                },
                OrderLine {
                    name: "Surge Protector".into(),
                    quantity: 1,
                },
            ],
            total: Decimal::new(15498, 2),
            date: date(2024, 3, 5),
        },
    ]
}

pub fn user_profile() -> UserProfile {
    UserProfile {
        name: "John Doe".into(),
        email: "john@example.com".into(),
        upcoming_appointments: vec![
            UpcomingAppointment {
                id: 1,
                service: ServiceKind::Installation.label().into(),
                date: date(2024, 3, 15),
                time: "14:00".into(),
            },
            UpcomingAppointment {
                id: 2,
                service: ServiceKind::Inspection.label().into(),
                date: date(2024, 3, 22),
                time: "10:00".into(),
            },
        ],
        recent_orders: vec![
            OrderSummary {
                id: 101,
                product: "LED Bulb Pack".into(),
                date: date(2024, 2, 28),
                status: "Delivered".into(),
            },
            OrderSummary {
                id: 102,
                product: "Smart Thermostat".into(),
                date: date(2024, 3, 5),
                status: "Shipped".into(),
            },
        ],
    }
}
