use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::catalog::{Car, CarClass, GarageLevelSection, TimeOfDay};
use super::recommendation::RecommendationKey;

/// Request captured at the garage entrance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRequest {
    pub entry_time: NaiveDateTime,
    pub model: String,
    pub make_year: u16,
}

impl TicketRequest {
    pub fn new(entry_time: NaiveDateTime, model: impl Into<String>, make_year: u16) -> Self {
        Self {
            entry_time,
            model: model.into(),
            make_year,
        }
    }
}

/// Stay estimate for a single placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyEstimate {
    pub hours: u32,
    pub hourly_rate: Decimal,
}

impl HourlyEstimate {
    pub fn estimated_total(&self) -> Decimal {
        Decimal::from(self.hours) * self.hourly_rate
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub placement: GarageLevelSection,
    pub estimate: HourlyEstimate,
}

/// Ranked placements returned for a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketResponse {
    pub entry_time: NaiveDateTime,
    pub car: Car,
    pub primary: Recommendation,
    pub secondary: Recommendation,
}

impl TicketResponse {
    pub fn recommendations(&self) -> [&Recommendation; 2] {
        [&self.primary, &self.secondary]
    }
}

/// Validation failures raised while producing a ticket. None are retriable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TicketError {
    #[error("model '{model}' is not in the car catalog")]
    UnknownModel { model: String },
    #[error("no recommendation registered for {key} or its 'any' fallback")]
    MissingRecommendation { key: RecommendationKey },
    #[error("no business rule registered for {car_class} cars")]
    MissingRule { car_class: CarClass },
    #[error("decision tree has no branch for {car_class} cars in the {time_of_day} bucket")]
    UnsupportedCarClass {
        car_class: CarClass,
        time_of_day: TimeOfDay,
    },
}
