use chrono::{NaiveDate, NaiveDateTime};
use garage_advisor::workflows::parking::{
    compare_evaluators, CarClass, CarType, DecisionTreeEvaluator, GarageLevel,
    GarageLevelSection, GarageSection, Slot, TableDrivenEvaluator, TicketError, TicketEvaluator,
    TicketRequest,
};
use rust_decimal_macros::dec;

fn entry(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2013, 1, 18)
        .expect("valid entry date")
        .and_hms_opt(hour, minute, 0)
        .expect("valid entry time")
}

#[test]
fn reference_request_produces_identical_tickets() {
    let request = TicketRequest::new(entry(1, 30), "pirate", 1902);

    let tree = DecisionTreeEvaluator::new();
    let table = TableDrivenEvaluator::initialize();
    let comparison = compare_evaluators(&request, &tree, &table).expect("both evaluators succeed");

    assert!(comparison.agrees(), "01:30 is morning for both classifiers");

    let ticket = comparison.right_response;
    assert_eq!(ticket.entry_time, request.entry_time);
    assert_eq!(ticket.car.car_type, CarType::Oldsmobile);
    assert_eq!(ticket.car.make_year, 1902);
    assert_eq!(
        ticket.primary.placement,
        GarageLevelSection::new(GarageLevel::Level1, GarageSection::Section1)
    );
    assert_eq!(
        ticket.secondary.placement,
        GarageLevelSection::new(GarageLevel::Level2, GarageSection::Section1)
    );
    for recommendation in ticket.recommendations() {
        assert_eq!(recommendation.estimate.hours, 8);
        assert_eq!(recommendation.estimate.hourly_rate, dec!(5.00));
        assert_eq!(recommendation.estimate.estimated_total(), dec!(40.00));
    }
}

#[test]
fn evening_entry_keeps_the_known_divergence() {
    let request = TicketRequest::new(entry(20, 0), "pirate", 1902);

    let comparison = compare_evaluators(
        &request,
        &DecisionTreeEvaluator::new(),
        &TableDrivenEvaluator::initialize(),
    )
    .expect("both evaluators succeed");

    assert!(!comparison.agrees());
    assert_eq!(comparison.diverging_slots, vec![Slot::FIRST, Slot::SECOND]);
    assert_eq!(comparison.left_response.primary.estimate.hours, 8);
    assert_eq!(comparison.right_response.primary.estimate.hours, 12);
    assert_eq!(
        comparison.right_response.primary.placement,
        GarageLevelSection::new(GarageLevel::Level1, GarageSection::Section2)
    );
}

#[test]
fn every_catalogued_model_gets_a_ticket_at_every_hour() {
    let tree = DecisionTreeEvaluator::new();
    let table = TableDrivenEvaluator::initialize();

    for car_type in CarType::ALL {
        for model in car_type.models() {
            for hour in 0..24 {
                let request = TicketRequest::new(entry(hour, 15), *model, 2001);
                let from_tree = tree.evaluate(&request).expect("tree covers catalog");
                let from_table = table.evaluate(&request).expect("table covers catalog");
                assert_eq!(from_tree.car, from_table.car);
                assert!(from_table.primary.estimate.hours >= 1);
                if car_type.car_class() == CarClass::Luxury {
                    assert!(from_table.primary.estimate.hours >= 2);
                }
            }
        }
    }
}

#[test]
fn tickets_serialize_for_downstream_consumers() {
    let request = TicketRequest::new(entry(14, 0), "continental", 2004);
    let ticket = TableDrivenEvaluator::initialize()
        .evaluate(&request)
        .expect("luxury ticket");

    let json = serde_json::to_value(&ticket).expect("ticket serializes");
    assert_eq!(json["car"]["car_type"], "bentley");
    assert_eq!(json["primary"]["placement"]["level"], "level3");
    assert_eq!(json["primary"]["estimate"]["hours"], 2);
}

#[test]
fn unknown_model_is_reported_to_the_caller() {
    let request = TicketRequest::new(entry(9, 0), "tesla model s", 2020);
    let err = TableDrivenEvaluator::initialize()
        .evaluate(&request)
        .expect_err("tesla is not catalogued");

    assert!(matches!(err, TicketError::UnknownModel { ref model } if model == "tesla model s"));
    assert_eq!(err.to_string(), "model 'tesla model s' is not in the car catalog");
}
