//! Parking placement and price estimation for vehicles entering the garage.
//!
//! Two evaluators answer the same question: a hardcoded decision tree and a
//! table-driven pipeline backed by per-class business rules. They agree only
//! for some inputs; the divergence is expected.

pub mod catalog;
pub mod evaluation;
pub mod policy;
pub mod recommendation;
pub mod rules;
pub mod ticket;

#[cfg(test)]
mod tests;

pub use catalog::{
    time_of_day_by_hour, time_of_day_legacy, Car, CarClass, CarType, GarageLevel,
    GarageLevelSection, GarageSection, TimeOfDay,
};
pub use evaluation::{
    compare_evaluators, DecisionTreeEvaluator, EvaluationComparison, TableDrivenEvaluator,
    TicketEvaluator,
};
pub use policy::{base_duration_hours, base_hourly_rate, discounted_hourly_rate, min_duration_hours};
pub use recommendation::{RecommendationKey, RecommendationTable, RecommendationTableBuilder, Slot};
pub use rules::{
    BusinessRule, BusinessRules, BusinessRulesBuilder, DurationEstimator, RateEstimator,
    TimeOfDayClassifier,
};
pub use ticket::{HourlyEstimate, Recommendation, TicketError, TicketRequest, TicketResponse};
