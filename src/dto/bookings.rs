use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    dto::looks_like_email,
    error::AppError,
    models::{NewBooking, ServiceKind, parse_time},
};

/// Booking form fields as submitted, shared by the page form and `POST /api/bookings`.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, ToSchema)]
pub struct BookingRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// One of `installation`, `repair`, `inspection`, `upgrade`
    #[serde(default)]
    pub service: String,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub date: String,
    /// `HH:MM`
    #[serde(default)]
    pub time: String,
}

impl BookingRequest {
    pub fn validate(&self) -> Result<NewBooking, AppError> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push("Name is required".to_string());
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push("Email is required".to_string());
        } else if !looks_like_email(email) {
            errors.push("Email address is not valid".to_string());
        }

        let phone = self.phone.trim();
        if phone.is_empty() {
            errors.push("Phone is required".to_string());
        } else if !phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '(' | ')'))
        {
            errors.push("Phone number may only contain digits, spaces, +, - and parentheses".to_string());
        }

        let service = if self.service.trim().is_empty() {
            errors.push("Please select a service".to_string());
            None
        } else {
            match self.service.parse::<ServiceKind>() {
                Ok(service) => Some(service),
                Err(_) => {
                    errors.push("Please select a valid service".to_string());
                    None
                }
            }
        };

        let date = match self.date.trim() {
            "" => {
                errors.push("Preferred date is required".to_string());
                None
            }
            raw => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.push("Preferred date must be YYYY-MM-DD".to_string());
                    None
                }
            },
        };

        let time = match self.time.trim() {
            "" => {
                errors.push("Preferred time is required".to_string());
                None
            }
            raw => match parse_time(raw) {
                Ok(time) => Some(time),
                Err(_) => {
                    errors.push("Preferred time must be HH:MM".to_string());
                    None
                }
            },
        };

        match (service, date, time) {
            (Some(service), Some(date), Some(time)) if errors.is_empty() => Ok(NewBooking {
                name: name.to_string(),
                email: email.to_string(),
                phone: phone.to_string(),
                service,
                date,
                time,
            }),
            _ => Err(AppError::Validation(errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;

    fn valid() -> BookingRequest {
        BookingRequest {
            name: "Ama Mensah".into(),
            email: "ama@example.com".into(),
            phone: "+233 054 924 7690".into(),
            service: "repair".into(),
            date: "2024-04-10".into(),
            time: "09:30".into(),
        }
    }

    #[test]
    fn valid_request_becomes_a_booking() {
        let booking = valid().validate().unwrap();
        assert_eq!(booking.service, ServiceKind::Repair);
        assert_eq!(booking.date, NaiveDate::from_ymd_opt(2024, 4, 10).unwrap());
        assert_eq!(booking.time, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
    }

    #[test]
    fn empty_request_lists_every_required_field() {
        let errors = BookingRequest::default().validate().unwrap_err().messages();
        assert_eq!(errors.len(), 6);
        assert!(errors.contains(&"Please select a service".to_string()));
    }

    #[test]
    fn rejects_unknown_service_and_bad_formats() {
        let request = BookingRequest {
            service: "plumbing".into(),
            date: "10/04/2024".into(),
            time: "half past nine".into(),
            email: "ama".into(),
            ..valid()
        };
        let errors = request.validate().unwrap_err().messages();
        assert_eq!(
            errors,
            vec![
                "Email address is not valid",
                "Please select a valid service",
                "Preferred date must be YYYY-MM-DD",
                "Preferred time must be HH:MM",
            ]
        );
    }
}
