use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::CarClass::{self, *};
use super::catalog::GarageLevel::{self, *};
use super::catalog::GarageSection::{self, *};
use super::catalog::GarageLevelSection;
use super::catalog::TimeOfDay::{self, *};
use super::ticket::TicketError;

/// Rank of a recommendation within a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot(pub u8);

impl Slot {
    pub const FIRST: Slot = Slot(1);
    pub const SECOND: Slot = Slot(2);
}

/// Composite lookup key for the recommendation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecommendationKey {
    pub car_class: CarClass,
    pub time_of_day: TimeOfDay,
    pub slot: Slot,
}

impl RecommendationKey {
    pub const fn new(car_class: CarClass, time_of_day: TimeOfDay, slot: Slot) -> Self {
        Self {
            car_class,
            time_of_day,
            slot,
        }
    }

    /// Same class and slot in the wildcard bucket.
    pub const fn fallback(self) -> Self {
        Self::new(self.car_class, TimeOfDay::Any, self.slot)
    }
}

impl fmt::Display for RecommendationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, slot {})",
            self.car_class, self.time_of_day, self.slot.0
        )
    }
}

type Entry = (CarClass, TimeOfDay, Slot, GarageLevelSection);

const fn at(level: GarageLevel, section: GarageSection) -> GarageLevelSection {
    GarageLevelSection::new(level, section)
}

const STANDARD_ENTRIES: [Entry; 14] = [
    (Classic, Morning, Slot::FIRST, at(Level1, Section1)),
    (Classic, Morning, Slot::SECOND, at(Level2, Section1)),
    (Classic, Any, Slot::FIRST, at(Level1, Section2)),
    (Classic, Any, Slot::SECOND, at(Level2, Section2)),
    (Luxury, Morning, Slot::FIRST, at(Level3, Section1)),
    (Luxury, Morning, Slot::SECOND, at(Level2, Section1)),
    (Luxury, Afternoon, Slot::FIRST, at(Level3, Section2)),
    (Luxury, Afternoon, Slot::SECOND, at(Level2, Section2)),
    (Luxury, Evening, Slot::FIRST, at(Level3, Section3)),
    (Luxury, Evening, Slot::SECOND, at(Level2, Section3)),
    (Sport, Evening, Slot::FIRST, at(Level3, Section3)),
    (Sport, Evening, Slot::SECOND, at(Level2, Section3)),
    (Sport, Any, Slot::FIRST, at(Level2, Section2)),
    (Sport, Any, Slot::SECOND, at(Level3, Section2)),
];

/// Frozen placement lookup keyed by [`RecommendationKey`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationTable {
    entries: HashMap<RecommendationKey, GarageLevelSection>,
}

impl RecommendationTable {
    pub fn builder() -> RecommendationTableBuilder {
        RecommendationTableBuilder::default()
    }

    /// Table populated with the garage's reference placements.
    pub fn standard() -> Self {
        Self::builder().with_standard_entries().build()
    }

    /// Exact match first, then the `Any` bucket for the same class and slot.
    pub fn get(
        &self,
        car_class: CarClass,
        time_of_day: TimeOfDay,
        slot: Slot,
    ) -> Result<GarageLevelSection, TicketError> {
        let key = RecommendationKey::new(car_class, time_of_day, slot);
        if let Some(placement) = self.entries.get(&key) {
            return Ok(*placement);
        }

        let fallback = key.fallback();
        match self.entries.get(&fallback) {
            Some(placement) => {
                debug!(%key, %placement, "no exact placement, using wildcard bucket");
                Ok(*placement)
            }
            None => Err(TicketError::MissingRecommendation { key }),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Mutable staging area used only while the table is being populated.
#[derive(Debug, Default)]
pub struct RecommendationTableBuilder {
    entries: HashMap<RecommendationKey, GarageLevelSection>,
}

impl RecommendationTableBuilder {
    /// Later writes to the same key replace earlier ones.
    pub fn put(
        &mut self,
        car_class: CarClass,
        time_of_day: TimeOfDay,
        slot: Slot,
        placement: GarageLevelSection,
    ) -> &mut Self {
        self.entries
            .insert(RecommendationKey::new(car_class, time_of_day, slot), placement);
        self
    }

    pub fn populate_standard(&mut self) -> &mut Self {
        for (car_class, time_of_day, slot, placement) in STANDARD_ENTRIES {
            self.put(car_class, time_of_day, slot, placement);
        }
        self
    }

    pub fn with_standard_entries(mut self) -> Self {
        self.populate_standard();
        self
    }

    pub fn build(self) -> RecommendationTable {
        RecommendationTable {
            entries: self.entries,
        }
    }
}
