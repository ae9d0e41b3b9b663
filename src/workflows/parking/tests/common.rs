use chrono::{NaiveDate, NaiveDateTime};

use crate::workflows::parking::catalog::{GarageLevel, GarageLevelSection, GarageSection};
use crate::workflows::parking::ticket::TicketRequest;

pub(super) fn entry_at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2013, 1, 18)
        .expect("valid date")
        .and_hms_opt(hour, minute, 0)
        .expect("valid time")
}

pub(super) fn request(model: &str, hour: u32) -> TicketRequest {
    TicketRequest::new(entry_at(hour, 30), model, 1902)
}

pub(super) fn pirate_request(hour: u32) -> TicketRequest {
    request("pirate", hour)
}

pub(super) fn spot(level: u8, section: u8) -> GarageLevelSection {
    let level = match level {
        1 => GarageLevel::Level1,
        2 => GarageLevel::Level2,
        3 => GarageLevel::Level3,
        other => panic!("no garage level {other}"),
    };
    let section = match section {
        1 => GarageSection::Section1,
        2 => GarageSection::Section2,
        3 => GarageSection::Section3,
        other => panic!("no garage section {other}"),
    };
    GarageLevelSection::new(level, section)
}
