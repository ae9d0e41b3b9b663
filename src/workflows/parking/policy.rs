use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::catalog::{GarageLevel, GarageSection, TimeOfDay};

/// Floor applied by the minimum-stay estimator.
pub const MINIMUM_STAY_HOURS: u32 = 2;

/// Multiplier applied by the discounted rate estimator.
pub const DISCOUNT_FACTOR: Decimal = dec!(0.85);

/// Expected stay in whole hours for a time-of-day bucket.
pub fn base_duration_hours(time_of_day: TimeOfDay) -> u32 {
    match time_of_day {
        TimeOfDay::Afternoon => 2,
        TimeOfDay::Morning => 8,
        TimeOfDay::Evening => 12,
        _ => 1,
    }
}

pub fn min_duration_hours(time_of_day: TimeOfDay) -> u32 {
    base_duration_hours(time_of_day).max(MINIMUM_STAY_HOURS)
}

/// Hourly price for a placement.
pub fn base_hourly_rate(level: GarageLevel, section: GarageSection) -> Decimal {
    match (level, section) {
        (GarageLevel::Level1, GarageSection::Section1) => dec!(5.00),
        (GarageLevel::Level1, _) => dec!(7.00),
        (GarageLevel::Level2, GarageSection::Section3) => dec!(10.00),
        (GarageLevel::Level2, _) => dec!(5.00),
        (GarageLevel::Level3, _) => dec!(10.00),
    }
}

/// Base rate scaled by [`DISCOUNT_FACTOR`], unrounded.
pub fn discounted_hourly_rate(level: GarageLevel, section: GarageSection) -> Decimal {
    base_hourly_rate(level, section) * DISCOUNT_FACTOR
}
