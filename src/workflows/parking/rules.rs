use std::collections::HashMap;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::catalog::{
    time_of_day_by_hour, time_of_day_legacy, Car, CarClass, GarageLevelSection, TimeOfDay,
};
use super::policy::{
    base_duration_hours, base_hourly_rate, discounted_hourly_rate, min_duration_hours,
};
use super::ticket::TicketError;

/// How a class buckets its entry time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDayClassifier {
    /// Always `Morning`, whatever the timestamp says.
    Legacy,
    ByHour,
}

impl TimeOfDayClassifier {
    pub fn classify(self, entry_time: NaiveDateTime) -> TimeOfDay {
        match self {
            TimeOfDayClassifier::Legacy => time_of_day_legacy(entry_time),
            TimeOfDayClassifier::ByHour => time_of_day_by_hour(entry_time),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationEstimator {
    Base,
    MinimumStay,
}

impl DurationEstimator {
    pub fn estimate(self, time_of_day: TimeOfDay) -> u32 {
        match self {
            DurationEstimator::Base => base_duration_hours(time_of_day),
            DurationEstimator::MinimumStay => min_duration_hours(time_of_day),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateEstimator {
    Base,
    Discounted,
}

impl RateEstimator {
    pub fn hourly_rate(self, placement: GarageLevelSection) -> Decimal {
        match self {
            RateEstimator::Base => base_hourly_rate(placement.level, placement.section),
            RateEstimator::Discounted => {
                discounted_hourly_rate(placement.level, placement.section)
            }
        }
    }
}

/// Per-class bundle of strategies used by the table-driven evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessRule {
    pub classifier: TimeOfDayClassifier,
    pub duration: DurationEstimator,
    pub rate: RateEstimator,
}

impl BusinessRule {
    pub const fn new(
        classifier: TimeOfDayClassifier,
        duration: DurationEstimator,
        rate: RateEstimator,
    ) -> Self {
        Self {
            classifier,
            duration,
            rate,
        }
    }

    /// Standard rule for a class.
    pub const fn standard(car_class: CarClass) -> Self {
        match car_class {
            CarClass::Classic => Self::new(
                TimeOfDayClassifier::ByHour,
                DurationEstimator::Base,
                RateEstimator::Base,
            ),
            CarClass::Luxury => Self::new(
                TimeOfDayClassifier::ByHour,
                DurationEstimator::MinimumStay,
                RateEstimator::Discounted,
            ),
            CarClass::Sport => Self::new(
                TimeOfDayClassifier::Legacy,
                DurationEstimator::Base,
                RateEstimator::Discounted,
            ),
        }
    }
}

/// Frozen registry of rules keyed by car class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessRules {
    rules: HashMap<CarClass, BusinessRule>,
}

impl BusinessRules {
    pub fn builder() -> BusinessRulesBuilder {
        BusinessRulesBuilder::default()
    }

    pub fn standard() -> Self {
        Self::builder().with_standard_rules().build()
    }

    pub fn lookup(&self, car: &Car) -> Result<&BusinessRule, TicketError> {
        let car_class = car.car_class();
        self.rules
            .get(&car_class)
            .ok_or(TicketError::MissingRule { car_class })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct BusinessRulesBuilder {
    rules: HashMap<CarClass, BusinessRule>,
}

impl BusinessRulesBuilder {
    pub fn register(&mut self, car_class: CarClass, rule: BusinessRule) -> &mut Self {
        self.rules.insert(car_class, rule);
        self
    }

    pub fn populate_standard(&mut self) -> &mut Self {
        for car_class in CarClass::ALL {
            self.register(car_class, BusinessRule::standard(car_class));
        }
        self
    }

    pub fn with_standard_rules(mut self) -> Self {
        self.populate_standard();
        self
    }

    pub fn build(self) -> BusinessRules {
        BusinessRules { rules: self.rules }
    }
}
