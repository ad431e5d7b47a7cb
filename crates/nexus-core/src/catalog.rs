use chrono::{Duration, Local, NaiveDate};
use once_cell::sync::Lazy;
use serde::Serialize;

/// A bookable offering from the service menu, with its display price tag.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceOffering {
    pub name: String,
    pub price: String,
}

/// The built-in service menu.
pub static SERVICES: Lazy<Vec<ServiceOffering>> = Lazy::new(|| {
    vec![
        ServiceOffering {
            name: "Essential Session".to_string(),
            price: "$65".to_string(),
        },
        ServiceOffering {
            name: "Full Grooming".to_string(),
            price: "$95".to_string(),
        },
    ]
});

/// The four bookable times of day. Advisory only: the stores do not check
/// a slot against this list, and nothing prevents double-booking.
pub const TIME_SLOTS: [&str; 4] = ["09:00", "12:00", "15:00", "17:00"];

pub fn find_service(name: &str) -> Option<&'static ServiceOffering> {
    SERVICES.iter().find(|s| s.name == name)
}

/// Short-form dates for the next seven days, starting today.
pub fn available_dates() -> Vec<String> {
    dates_from(Local::now().date_naive())
}

/// Seven short-form dates ("Jan 5") starting at `start`.
pub fn dates_from(start: NaiveDate) -> Vec<String> {
    (0..7)
        .map(|i| (start + Duration::days(i)).format("%b %-d").to_string())
        .collect()
}
