use tracing::debug;

use super::super::catalog::{
    time_of_day_legacy, CarClass, GarageLevel, GarageLevelSection, GarageSection, TimeOfDay,
};
use super::super::policy::{base_duration_hours, base_hourly_rate};
use super::super::ticket::{
    HourlyEstimate, Recommendation, TicketError, TicketRequest, TicketResponse,
};
use super::{resolve_car, TicketEvaluator};

/// Hardcoded branch-per-class evaluator. Needs no initialization.
///
/// Always classifies with the legacy classifier and prices with the base
/// duration and base rate, so it only matches the table-driven evaluator for
/// some inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionTreeEvaluator;

impl DecisionTreeEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl TicketEvaluator for DecisionTreeEvaluator {
    fn name(&self) -> &'static str {
        "decision-tree"
    }

    fn evaluate(&self, request: &TicketRequest) -> Result<TicketResponse, TicketError> {
        let car = resolve_car(request)?;
        let car_class = car.car_class();
        let time_of_day = time_of_day_legacy(request.entry_time);

        let (primary, secondary) = placements(car_class, time_of_day)?;
        debug!(%car_class, %time_of_day, %primary, %secondary, "decision tree placements");

        Ok(TicketResponse {
            entry_time: request.entry_time,
            car,
            primary: recommend(primary, time_of_day),
            secondary: recommend(secondary, time_of_day),
        })
    }
}

fn recommend(placement: GarageLevelSection, time_of_day: TimeOfDay) -> Recommendation {
    Recommendation {
        placement,
        estimate: HourlyEstimate {
            hours: base_duration_hours(time_of_day),
            hourly_rate: base_hourly_rate(placement.level, placement.section),
        },
    }
}

fn placements(
    car_class: CarClass,
    time_of_day: TimeOfDay,
) -> Result<(GarageLevelSection, GarageLevelSection), TicketError> {
    use GarageLevel::*;
    use GarageSection::*;

    let at = GarageLevelSection::new;

    let pair = match car_class {
        CarClass::Classic => match time_of_day {
            TimeOfDay::Morning => (at(Level1, Section1), at(Level2, Section1)),
            _ => (at(Level1, Section2), at(Level2, Section2)),
        },
        CarClass::Luxury => match time_of_day {
            TimeOfDay::Morning => (at(Level3, Section1), at(Level2, Section1)),
            TimeOfDay::Afternoon => (at(Level3, Section2), at(Level2, Section2)),
            TimeOfDay::Evening => (at(Level3, Section3), at(Level2, Section3)),
            TimeOfDay::Any => {
                return Err(TicketError::UnsupportedCarClass {
                    car_class,
                    time_of_day,
                })
            }
        },
        CarClass::Sport => match time_of_day {
            TimeOfDay::Evening => (at(Level3, Section3), at(Level2, Section3)),
            _ => (at(Level2, Section2), at(Level3, Section2)),
        },
    };

    Ok(pair)
}
