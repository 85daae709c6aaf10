use serde::Deserialize;

use crate::errors::AppError;

/// Inbound payload as posted by the booking form.
///
/// Every field is optional at the wire level so that a missing required field
/// yields [`AppError::MissingFields`] instead of a serde message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BookingNotificationRequest {
    pub admin_email: Option<String>,
    pub customer_name: Option<String>,
    pub phone_number: Option<String>,
    pub location: Option<String>,
    pub service: Option<String>,
    pub problem_description: Option<String>,
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingNotification {
    pub admin_email: String,
    pub customer_name: String,
    pub phone_number: String,
    pub location: String,
    pub service: String,
    pub problem_description: Option<String>,
    pub preferred_date: Option<String>,
    pub preferred_time: Option<TimeSlot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

impl TimeSlot {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "morning" => Some(TimeSlot::Morning),
            "afternoon" => Some(TimeSlot::Afternoon),
            "evening" => Some(TimeSlot::Evening),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "Morning (8 AM - 12 PM)",
            TimeSlot::Afternoon => "Afternoon (12 PM - 4 PM)",
            TimeSlot::Evening => "Evening (4 PM - 8 PM)",
        }
    }
}

/// Display label for a raw `preferredTime` value. Empty means "omit the field".
pub fn time_label(preferred_time: Option<&str>) -> &'static str {
    preferred_time
        .and_then(TimeSlot::parse)
        .map(|slot| slot.label())
        .unwrap_or("")
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl BookingNotificationRequest {
    pub fn from_json(bytes: &[u8]) -> Result<Self, AppError> {
        serde_json::from_slice(bytes).map_err(|e| AppError::InvalidBody(e.to_string()))
    }

    pub fn validate(self) -> Result<BookingNotification, AppError> {
        let (
            Some(admin_email),
            Some(customer_name),
            Some(phone_number),
            Some(location),
            Some(service),
        ) = (
            non_empty(self.admin_email),
            non_empty(self.customer_name),
            non_empty(self.phone_number),
            non_empty(self.location),
            non_empty(self.service),
        )
        else {
            return Err(AppError::MissingFields);
        };

        Ok(BookingNotification {
            admin_email,
            customer_name,
            phone_number,
            location,
            service,
            problem_description: non_empty(self.problem_description),
            preferred_date: non_empty(self.preferred_date),
            preferred_time: self.preferred_time.as_deref().and_then(TimeSlot::parse),
        })
    }
}
