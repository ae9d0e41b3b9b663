use super::common::*;
use crate::workflows::parking::catalog::{
    bucket_hour, time_of_day_by_hour, time_of_day_legacy, Car, CarClass, CarType, TimeOfDay,
};
use crate::workflows::parking::ticket::TicketError;

#[test]
fn every_catalog_model_resolves_to_its_declaring_type() {
    for car_type in CarType::ALL {
        for model in car_type.models() {
            let resolved = CarType::resolve(model).expect("catalog model resolves");
            assert_eq!(resolved, car_type, "model '{model}' resolved elsewhere");
        }
    }
}

#[test]
fn pirate_is_a_classic_oldsmobile() {
    let car_type = CarType::resolve("pirate").expect("pirate is catalogued");
    assert_eq!(car_type, CarType::Oldsmobile);
    assert_eq!(Car::new(car_type, 1902).car_class(), CarClass::Classic);
}

#[test]
fn unknown_models_are_rejected() {
    let err = CarType::resolve("tesla model s").expect_err("not catalogued");
    assert_eq!(
        err,
        TicketError::UnknownModel {
            model: "tesla model s".to_string()
        }
    );
}

#[test]
fn model_lookup_is_case_sensitive() {
    assert!(CarType::resolve("Pirate").is_err());
    assert!(CarType::resolve(" pirate").is_err());
}

#[test]
fn legacy_classifier_ignores_the_clock() {
    for hour in [0, 6, 12, 17, 18, 23] {
        assert_eq!(time_of_day_legacy(entry_at(hour, 0)), TimeOfDay::Morning);
    }
}

#[test]
fn hour_classifier_buckets_the_day() {
    assert_eq!(time_of_day_by_hour(entry_at(1, 30)), TimeOfDay::Morning);
    assert_eq!(time_of_day_by_hour(entry_at(11, 59)), TimeOfDay::Morning);
    assert_eq!(time_of_day_by_hour(entry_at(12, 0)), TimeOfDay::Afternoon);
    assert_eq!(time_of_day_by_hour(entry_at(17, 59)), TimeOfDay::Afternoon);
    assert_eq!(time_of_day_by_hour(entry_at(18, 0)), TimeOfDay::Evening);
    assert_eq!(time_of_day_by_hour(entry_at(23, 59)), TimeOfDay::Evening);
}

#[test]
fn out_of_range_hours_land_in_the_wildcard_bucket() {
    assert_eq!(bucket_hour(24), TimeOfDay::Evening);
    assert_eq!(bucket_hour(25), TimeOfDay::Any);
}
