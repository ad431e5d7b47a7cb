use crate::error::Result;
use crate::models::Booking;
use crate::storage::{Storage, BOOKINGS_KEY};

/// In-memory booking history ("vault"), newest first.
///
/// Every mutation writes the full collection back through the storage
/// adapter, so the durable and in-memory views never diverge after a
/// completed call.
pub struct BookingStore {
    items: Vec<Booking>,
}

impl BookingStore {
    pub fn load(storage: &Storage) -> Result<Self> {
        Ok(Self {
            items: storage.load(BOOKINGS_KEY)?,
        })
    }

    pub fn all(&self) -> &[Booking] {
        &self.items
    }

    pub fn get(&self, id: i64) -> Option<&Booking> {
        self.items.iter().find(|b| b.id == id)
    }

    /// Reserve a slot for a service.
    ///
    /// Declines with `None` (nothing mutated or persisted) when `date` or
    /// `time` is empty.
    pub fn create(
        &mut self,
        storage: &Storage,
        service: &str,
        price: &str,
        date: &str,
        time: &str,
    ) -> Result<Option<Booking>> {
        if date.is_empty() || time.is_empty() {
            return Ok(None);
        }
        let booking = Booking::new(
            super::fresh_id(self.items.iter().map(|b| b.id)),
            service.to_string(),
            price.to_string(),
            date.to_string(),
            time.to_string(),
        );
        self.items.insert(0, booking.clone());
        storage.save(BOOKINGS_KEY, &self.items)?;
        log::debug!("booking {} created for {}", booking.id, booking.service);
        Ok(Some(booking))
    }

    /// Move an existing booking to a new slot.
    ///
    /// Service and price are fixed at creation and are not touched. Returns
    /// `None` on an unknown id, or when `date` or `time` is empty.
    pub fn update(
        &mut self,
        storage: &Storage,
        id: i64,
        date: &str,
        time: &str,
    ) -> Result<Option<Booking>> {
        if date.is_empty() || time.is_empty() {
            return Ok(None);
        }
        let Some(booking) = self.items.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };
        booking.date = date.to_string();
        booking.time = time.to_string();
        let updated = booking.clone();
        storage.save(BOOKINGS_KEY, &self.items)?;
        log::debug!("booking {} moved to {} {}", id, updated.date, updated.time);
        Ok(Some(updated))
    }

    /// Remove a booking. Returns whether anything was removed; an unknown
    /// id leaves the stored collection untouched.
    pub fn delete(&mut self, storage: &Storage, id: i64) -> Result<bool> {
        let before = self.items.len();
        self.items.retain(|b| b.id != id);
        if self.items.len() == before {
            return Ok(false);
        }
        storage.save(BOOKINGS_KEY, &self.items)?;
        log::debug!("booking {} removed", id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (Storage, BookingStore) {
        let storage = Storage::open_in_memory().unwrap();
        let bookings = BookingStore::load(&storage).unwrap();
        (storage, bookings)
    }

    #[test]
    fn test_create_assigns_unique_ids_and_grows_by_one() {
        let (storage, mut bookings) = store();
        let mut seen = Vec::new();
        for i in 0..5 {
            let b = bookings
                .create(&storage, "Full Grooming", "$95", "Jan 5", "12:00")
                .unwrap()
                .unwrap();
            assert!(!seen.contains(&b.id));
            seen.push(b.id);
            assert_eq!(bookings.all().len(), i + 1);
        }
    }

    #[test]
    fn test_create_prepends_newest_first() {
        let (storage, mut bookings) = store();
        bookings
            .create(&storage, "Essential Session", "$65", "Jan 5", "09:00")
            .unwrap();
        bookings
            .create(&storage, "Full Grooming", "$95", "Jan 6", "12:00")
            .unwrap();

        assert_eq!(bookings.all()[0].service, "Full Grooming");
        assert_eq!(bookings.all()[1].service, "Essential Session");
    }

    #[test]
    fn test_create_without_slot_is_a_noop() {
        let (storage, mut bookings) = store();
        assert!(bookings
            .create(&storage, "Full Grooming", "$95", "", "12:00")
            .unwrap()
            .is_none());
        assert!(bookings
            .create(&storage, "Full Grooming", "$95", "Jan 5", "")
            .unwrap()
            .is_none());
        assert!(bookings.all().is_empty());
        assert!(storage.read_raw(BOOKINGS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_update_replaces_slot_only() {
        let (storage, mut bookings) = store();
        let b = bookings
            .create(&storage, "Full Grooming", "$95", "Jan 5", "12:00")
            .unwrap()
            .unwrap();

        let updated = bookings
            .update(&storage, b.id, "Jan 6", "15:00")
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, b.id);
        assert_eq!(updated.service, "Full Grooming");
        assert_eq!(updated.price, "$95");
        assert_eq!(updated.date, "Jan 6");
        assert_eq!(updated.time, "15:00");
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let (storage, mut bookings) = store();
        assert!(bookings.update(&storage, 42, "Jan 6", "15:00").unwrap().is_none());
    }

    #[test]
    fn test_delete_reports_whether_anything_was_removed() {
        let (storage, mut bookings) = store();
        let b = bookings
            .create(&storage, "Full Grooming", "$95", "Jan 5", "12:00")
            .unwrap()
            .unwrap();

        assert!(bookings.delete(&storage, b.id).unwrap());
        assert!(!bookings.delete(&storage, b.id).unwrap());
        assert!(bookings.all().is_empty());
    }
}
