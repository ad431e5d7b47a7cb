use serde::{Deserialize, Serialize};

/// A reserved grooming appointment, as stored in the vault.
///
/// `price` is the display price tag ("$95"), not a currency value, and both
/// `date` and `time` are the short-form strings the slot picker produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub service: String,
    pub price: String,
    pub date: String,
    pub time: String,
}

impl Booking {
    pub fn new(id: i64, service: String, price: String, date: String, time: String) -> Self {
        Self {
            id,
            service,
            price,
            date,
            time,
        }
    }
}
