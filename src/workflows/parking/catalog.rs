use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ticket::TicketError;

/// Coarse category driving placement and pricing rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarClass {
    Luxury,
    Sport,
    Classic,
}

impl CarClass {
    pub const ALL: [CarClass; 3] = [CarClass::Luxury, CarClass::Sport, CarClass::Classic];

    pub const fn label(self) -> &'static str {
        match self {
            CarClass::Luxury => "luxury",
            CarClass::Sport => "sport",
            CarClass::Classic => "classic",
        }
    }
}

impl fmt::Display for CarClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Manufacturer families known to the garage. Declaration order is lookup order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarType {
    Oldsmobile,
    Packard,
    Cadillac,
    Bentley,
    Porsche,
    Ferrari,
}

impl CarType {
    pub const ALL: [CarType; 6] = [
        CarType::Oldsmobile,
        CarType::Packard,
        CarType::Cadillac,
        CarType::Bentley,
        CarType::Porsche,
        CarType::Ferrari,
    ];

    pub const fn car_class(self) -> CarClass {
        match self {
            CarType::Oldsmobile | CarType::Packard => CarClass::Classic,
            CarType::Cadillac | CarType::Bentley => CarClass::Luxury,
            CarType::Porsche | CarType::Ferrari => CarClass::Sport,
        }
    }

    /// Lowercase model names claimed by this type.
    pub const fn models(self) -> &'static [&'static str] {
        match self {
            CarType::Oldsmobile => &["pirate", "cutlass", "toronado", "delta 88"],
            CarType::Packard => &["clipper", "caribbean", "super eight"],
            CarType::Cadillac => &["eldorado", "escalade", "fleetwood"],
            CarType::Bentley => &["continental", "mulsanne", "arnage"],
            CarType::Porsche => &["911", "cayman", "boxster"],
            CarType::Ferrari => &["testarossa", "f40", "enzo"],
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CarType::Oldsmobile => "oldsmobile",
            CarType::Packard => "packard",
            CarType::Cadillac => "cadillac",
            CarType::Bentley => "bentley",
            CarType::Porsche => "porsche",
            CarType::Ferrari => "ferrari",
        }
    }

    /// Find the type that claims `model`. Matching is exact and case-sensitive;
    /// the first type in declaration order wins.
    pub fn resolve(model: &str) -> Result<CarType, TicketError> {
        CarType::ALL
            .into_iter()
            .find(|car_type| car_type.models().iter().any(|known| *known == model))
            .ok_or_else(|| TicketError::UnknownModel {
                model: model.to_string(),
            })
    }
}

impl fmt::Display for CarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Discretized period of day used as a rule-lookup key.
///
/// `Any` is the wildcard bucket; classifiers never produce it, the
/// recommendation table falls back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Any,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Any,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Any => "any",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Legacy classifier: ignores the timestamp and always answers `Morning`.
pub fn time_of_day_legacy(_entry_time: NaiveDateTime) -> TimeOfDay {
    TimeOfDay::Morning
}

/// Hour-range classifier on a 24-hour clock.
pub fn time_of_day_by_hour(entry_time: NaiveDateTime) -> TimeOfDay {
    bucket_hour(entry_time.hour())
}

pub(crate) fn bucket_hour(hour: u32) -> TimeOfDay {
    match hour {
        0..=11 => TimeOfDay::Morning,
        12..=17 => TimeOfDay::Afternoon,
        18..=24 => TimeOfDay::Evening,
        _ => TimeOfDay::Any,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GarageLevel {
    Level1,
    Level2,
    Level3,
}

impl GarageLevel {
    pub const ALL: [GarageLevel; 3] = [
        GarageLevel::Level1,
        GarageLevel::Level2,
        GarageLevel::Level3,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            GarageLevel::Level1 => "L1",
            GarageLevel::Level2 => "L2",
            GarageLevel::Level3 => "L3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GarageSection {
    Section1,
    Section2,
    Section3,
}

impl GarageSection {
    pub const ALL: [GarageSection; 3] = [
        GarageSection::Section1,
        GarageSection::Section2,
        GarageSection::Section3,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            GarageSection::Section1 => "S1",
            GarageSection::Section2 => "S2",
            GarageSection::Section3 => "S3",
        }
    }
}

/// Physical placement coordinates within the garage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GarageLevelSection {
    pub level: GarageLevel,
    pub section: GarageSection,
}

impl GarageLevelSection {
    pub const fn new(level: GarageLevel, section: GarageSection) -> Self {
        Self { level, section }
    }
}

impl fmt::Display for GarageLevelSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.level.label(), self.section.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Car {
    pub car_type: CarType,
    pub make_year: u16,
}

impl Car {
    pub const fn new(car_type: CarType, make_year: u16) -> Self {
        Self {
            car_type,
            make_year,
        }
    }

    pub const fn car_class(&self) -> CarClass {
        self.car_type.car_class()
    }
}
