mod decision_tree;
mod table_driven;

pub use decision_tree::DecisionTreeEvaluator;
pub use table_driven::TableDrivenEvaluator;

use serde::Serialize;
use tracing::debug;

use super::catalog::{Car, CarType};
use super::ticket::{TicketError, TicketRequest, TicketResponse};
use super::recommendation::Slot;

/// Single-pass pipeline turning a request into two ranked recommendations.
pub trait TicketEvaluator: Send + Sync {
    fn name(&self) -> &'static str;

    fn evaluate(&self, request: &TicketRequest) -> Result<TicketResponse, TicketError>;
}

/// Shared first step of both pipelines: model name to car.
pub(crate) fn resolve_car(request: &TicketRequest) -> Result<Car, TicketError> {
    let car_type = CarType::resolve(&request.model)?;
    let car = Car::new(car_type, request.make_year);
    debug!(
        model = %request.model,
        car_type = %car_type,
        car_class = %car.car_class(),
        "resolved car"
    );
    Ok(car)
}

/// Side-by-side run of two evaluators on one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationComparison {
    pub left: &'static str,
    pub right: &'static str,
    pub left_response: TicketResponse,
    pub right_response: TicketResponse,
    pub diverging_slots: Vec<Slot>,
}

impl EvaluationComparison {
    pub fn agrees(&self) -> bool {
        self.left_response == self.right_response
    }
}

/// Run both evaluators; the first error from either side is returned.
pub fn compare_evaluators(
    request: &TicketRequest,
    left: &dyn TicketEvaluator,
    right: &dyn TicketEvaluator,
) -> Result<EvaluationComparison, TicketError> {
    let left_response = left.evaluate(request)?;
    let right_response = right.evaluate(request)?;

    let mut diverging_slots = Vec::new();
    if left_response.primary != right_response.primary {
        diverging_slots.push(Slot::FIRST);
    }
    if left_response.secondary != right_response.secondary {
        diverging_slots.push(Slot::SECOND);
    }

    Ok(EvaluationComparison {
        left: left.name(),
        right: right.name(),
        left_response,
        right_response,
        diverging_slots,
    })
}
