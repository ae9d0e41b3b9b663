use super::common::*;
use crate::workflows::parking::catalog::{Car, CarClass, CarType, TimeOfDay};
use crate::workflows::parking::rules::{
    BusinessRule, BusinessRules, DurationEstimator, RateEstimator, TimeOfDayClassifier,
};
use crate::workflows::parking::ticket::TicketError;

#[test]
fn standard_registry_covers_every_class() {
    let rules = BusinessRules::standard();
    assert_eq!(rules.len(), CarClass::ALL.len());

    let classic = rules
        .lookup(&Car::new(CarType::Oldsmobile, 1902))
        .expect("classic rule");
    assert_eq!(
        *classic,
        BusinessRule::new(
            TimeOfDayClassifier::ByHour,
            DurationEstimator::Base,
            RateEstimator::Base
        )
    );

    let luxury = rules
        .lookup(&Car::new(CarType::Bentley, 1998))
        .expect("luxury rule");
    assert_eq!(luxury.duration, DurationEstimator::MinimumStay);
    assert_eq!(luxury.rate, RateEstimator::Discounted);

    let sport = rules
        .lookup(&Car::new(CarType::Ferrari, 1987))
        .expect("sport rule");
    assert_eq!(sport.classifier, TimeOfDayClassifier::Legacy);
    assert_eq!(sport.rate, RateEstimator::Discounted);
}

#[test]
fn lookup_without_registration_is_an_error() {
    let mut builder = BusinessRules::builder();
    builder.register(CarClass::Sport, BusinessRule::standard(CarClass::Sport));
    let rules = builder.build();

    let err = rules
        .lookup(&Car::new(CarType::Cadillac, 1959))
        .expect_err("luxury never registered");
    assert_eq!(
        err,
        TicketError::MissingRule {
            car_class: CarClass::Luxury
        }
    );
}

#[test]
fn strategies_dispatch_to_policy_functions() {
    assert_eq!(
        TimeOfDayClassifier::Legacy.classify(entry_at(20, 0)),
        TimeOfDay::Morning
    );
    assert_eq!(
        TimeOfDayClassifier::ByHour.classify(entry_at(20, 0)),
        TimeOfDay::Evening
    );
    assert_eq!(DurationEstimator::Base.estimate(TimeOfDay::Any), 1);
    assert_eq!(DurationEstimator::MinimumStay.estimate(TimeOfDay::Any), 2);
    assert_eq!(
        RateEstimator::Discounted.hourly_rate(spot(3, 3)),
        rust_decimal_macros::dec!(8.50)
    );
}

#[test]
fn registering_standard_rules_twice_changes_nothing() {
    let mut builder = BusinessRules::builder();
    builder.populate_standard().populate_standard();
    assert_eq!(builder.build(), BusinessRules::standard());
}
