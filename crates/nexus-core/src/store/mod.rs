pub mod bookings;
pub mod pets;

pub use bookings::BookingStore;
pub use pets::PetRoster;

use chrono::Utc;

/// Millisecond-timestamp id, bumped past the collection's current maximum
/// so two creates in the same millisecond still get distinct ids.
fn fresh_id(existing: impl Iterator<Item = i64>) -> i64 {
    let now = Utc::now().timestamp_millis();
    match existing.max() {
        Some(max) if now <= max => max + 1,
        _ => now,
    }
}
