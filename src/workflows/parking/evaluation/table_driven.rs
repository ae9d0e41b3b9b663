use tracing::debug;

use super::super::catalog::{CarClass, TimeOfDay};
use super::super::recommendation::{RecommendationTable, Slot};
use super::super::rules::{BusinessRule, BusinessRules};
use super::super::ticket::{
    HourlyEstimate, Recommendation, TicketError, TicketRequest, TicketResponse,
};
use super::{resolve_car, TicketEvaluator};

/// Evaluator driven by the business-rule registry and recommendation table.
///
/// Both snapshots are owned and read-only, so a constructed evaluator can be
/// shared across threads without locking.
#[derive(Debug, Clone)]
pub struct TableDrivenEvaluator {
    rules: BusinessRules,
    table: RecommendationTable,
}

impl TableDrivenEvaluator {
    /// Build the standard rule registry and recommendation table.
    pub fn initialize() -> Self {
        let rules = BusinessRules::standard();
        let table = RecommendationTable::standard();
        debug!(
            rules = rules.len(),
            placements = table.len(),
            "initialized table-driven evaluator"
        );
        Self::new(rules, table)
    }

    pub fn new(rules: BusinessRules, table: RecommendationTable) -> Self {
        Self { rules, table }
    }

    pub fn rules(&self) -> &BusinessRules {
        &self.rules
    }

    pub fn table(&self) -> &RecommendationTable {
        &self.table
    }

    fn recommend(
        &self,
        rule: &BusinessRule,
        car_class: CarClass,
        time_of_day: TimeOfDay,
        slot: Slot,
    ) -> Result<Recommendation, TicketError> {
        let placement = self.table.get(car_class, time_of_day, slot)?;
        Ok(Recommendation {
            placement,
            estimate: HourlyEstimate {
                hours: rule.duration.estimate(time_of_day),
                hourly_rate: rule.rate.hourly_rate(placement),
            },
        })
    }
}

impl TicketEvaluator for TableDrivenEvaluator {
    fn name(&self) -> &'static str {
        "table-driven"
    }

    fn evaluate(&self, request: &TicketRequest) -> Result<TicketResponse, TicketError> {
        let car = resolve_car(request)?;
        let car_class = car.car_class();
        let rule = self.rules.lookup(&car)?;
        let time_of_day = rule.classifier.classify(request.entry_time);
        debug!(%car_class, %time_of_day, ?rule, "applying business rule");

        let primary = self.recommend(rule, car_class, time_of_day, Slot::FIRST)?;
        let secondary = self.recommend(rule, car_class, time_of_day, Slot::SECOND)?;

        Ok(TicketResponse {
            entry_time: request.entry_time,
            car,
            primary,
            secondary,
        })
    }
}
