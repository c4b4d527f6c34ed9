use std::{fmt, str::FromStr};

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[schema(value_type = String, example = "19.99")]
    pub price: Decimal,
    pub image: String,
}

impl Product {
    pub fn price_label(&self) -> String {
        format_money(self.price)
    }
}

/// Fields of a product before the store assigns it an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub image: String,
}

/// The four bookable services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Installation,
    Repair,
    Inspection,
    Upgrade,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 4] = [
        ServiceKind::Installation,
        ServiceKind::Repair,
        ServiceKind::Inspection,
        ServiceKind::Upgrade,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Installation => "installation",
            ServiceKind::Repair => "repair",
            ServiceKind::Inspection => "inspection",
            ServiceKind::Upgrade => "upgrade",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceKind::Installation => "Electrical Installation",
            ServiceKind::Repair => "Repair and Maintenance",
            ServiceKind::Inspection => "Safety Inspection",
            ServiceKind::Upgrade => "Energy Efficiency Upgrade",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ServiceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s.trim())
            .ok_or_else(|| format!("unknown service `{s}`"))
    }
}

/// A validated booking, ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: ServiceKind,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Appointment {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: ServiceKind,
    #[schema(value_type = String, format = Date)]
    pub date: NaiveDate,
    #[schema(value_type = String, example = "14:00")]
    #[serde(with = "hour_minute")]
    pub time: NaiveTime,
}

impl Appointment {
    pub fn time_label(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub customer_name: String,
    pub products: Vec<OrderLine>,
    #[schema(value_type = String, example = "64.98")]
    pub total: Decimal,
    #[schema(value_type = String, format = Date)]
    pub date: NaiveDate,
}

impl Order {
    pub fn products_label(&self) -> String {
        self.products
            .iter()
            .map(|line| format!("{} (x{})", line.name, line.quantity))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn total_label(&self) -> String {
        format_money(self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: i64,
    pub name: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpcomingAppointment {
    pub id: i64,
    pub service: String,
    #[schema(value_type = String, format = Date)]
    pub date: NaiveDate,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderSummary {
    pub id: i64,
    pub product: String,
    #[schema(value_type = String, format = Date)]
    pub date: NaiveDate,
    pub status: String,
}

/// What the customer dashboard shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub upcoming_appointments: Vec<UpcomingAppointment>,
    pub recent_orders: Vec<OrderSummary>,
}

pub fn format_money(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

mod hour_minute {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw).map_err(serde::de::Error::custom)
    }
}

/// Accepts `HH:MM` as sent by `<input type="time">`, or `HH:MM:SS`.
pub fn parse_time(raw: &str) -> Result<NaiveTime, chrono::ParseError> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M").or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_kind_parses_form_values() {
        assert_eq!("repair".parse::<ServiceKind>(), Ok(ServiceKind::Repair));
        assert_eq!(" upgrade ".parse::<ServiceKind>(), Ok(ServiceKind::Upgrade));
        assert!("plumbing".parse::<ServiceKind>().is_err());
        assert!("".parse::<ServiceKind>().is_err());
    }

    #[test]
    fn money_uses_two_decimals() {
        assert_eq!(format_money(Decimal::new(1999, 2)), "$19.99");
        assert_eq!(format_money(Decimal::new(5, 0)), "$5.00");
    }

    #[test]
    fn order_products_label_lists_quantities() {
        let order = Order {
            id: 1,
            customer_name: "Ama".into(),
            products: vec![
                OrderLine { name: "Multimeter".into(), quantity: 1 },
                OrderLine { name: "Wire Stripper".into(), quantity: 2 },
            ],
            total: Decimal::new(6997, 2),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        assert_eq!(order.products_label(), "Multimeter (x1), Wire Stripper (x2)");
        assert_eq!(order.total_label(), "$69.97");
    }

    #[test]
    fn time_accepts_minutes_and_seconds() {
        assert_eq!(parse_time("14:00").unwrap(), NaiveTime::from_hms_opt(14, 0, 0).unwrap());
        assert_eq!(parse_time("09:30:15").unwrap(), NaiveTime::from_hms_opt(9, 30, 15).unwrap());
        assert!(parse_time("2pm").is_err());
    }
}
