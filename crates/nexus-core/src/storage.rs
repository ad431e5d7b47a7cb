use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Key under which the booking history ("vault") is stored.
pub const BOOKINGS_KEY: &str = "nexus_vault_data";

/// Key under which the pet roster is stored.
pub const PETS_KEY: &str = "nexus_pet_data";

/// Synchronous key-value persistence for the portal.
///
/// Each collection lives as a single JSON-array value under a fixed key;
/// a write replaces the whole value, so there is no partial-write state to
/// recover from. Corrupt values are handled by `load`: the bad value is
/// logged and *all* portal keys are cleared, leaving empty collections.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Open (or create) the portal store at the given path.
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        create_table(&conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        create_table(&conn)?;
        Ok(Self { conn })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Load the collection stored under `key`.
    ///
    /// A missing key yields an empty collection. A value that does not
    /// deserialize as a JSON array of `T` is treated as corruption: every
    /// portal key is cleared and an empty collection is returned.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let Some(text) = self.read_raw(key)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&text) {
            Ok(items) => Ok(items),
            Err(e) => {
                log::warn!("unreadable value under '{}', discarding stored portal data: {}", key, e);
                self.clear_all()?;
                Ok(Vec::new())
            }
        }
    }

    /// Serialize the full collection and store it under `key`, replacing
    /// any prior value.
    pub fn save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let text = serde_json::to_string(items)?;
        self.write_raw(key, &text)
    }

    /// Read the raw stored text for a key, if any.
    pub fn read_raw(&self, key: &str) -> Result<Option<String>> {
        let result = self.conn.query_row(
            "SELECT value FROM portal_store WHERE key = ?1",
            params![key],
            |row| row.get(0),
        );
        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write raw text under a key, replacing any prior value.
    pub fn write_raw(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO portal_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    /// Delete everything the portal has stored, across all keys.
    pub fn clear_all(&self) -> Result<()> {
        self.conn.execute("DELETE FROM portal_store", [])?;
        Ok(())
    }
}

fn create_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS portal_store (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );",
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Booking;

    #[test]
    fn test_load_missing_key_is_empty() {
        let storage = Storage::open_in_memory().unwrap();
        let bookings: Vec<Booking> = storage.load(BOOKINGS_KEY).unwrap();
        assert!(bookings.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let storage = Storage::open_in_memory().unwrap();
        let bookings = vec![Booking::new(
            1,
            "Full Grooming".to_string(),
            "$95".to_string(),
            "Jan 5".to_string(),
            "12:00".to_string(),
        )];
        storage.save(BOOKINGS_KEY, &bookings).unwrap();

        let loaded: Vec<Booking> = storage.load(BOOKINGS_KEY).unwrap();
        assert_eq!(loaded, bookings);
    }

    #[test]
    fn test_save_replaces_prior_value() {
        let storage = Storage::open_in_memory().unwrap();
        storage.write_raw(BOOKINGS_KEY, "[]").unwrap();
        let bookings = vec![Booking::new(
            2,
            "Essential Session".to_string(),
            "$65".to_string(),
            "Jan 6".to_string(),
            "09:00".to_string(),
        )];
        storage.save(BOOKINGS_KEY, &bookings).unwrap();

        let raw = storage.read_raw(BOOKINGS_KEY).unwrap().unwrap();
        assert_eq!(raw, serde_json::to_string(&bookings).unwrap());
    }

    #[test]
    fn test_corrupt_value_clears_every_key() {
        let storage = Storage::open_in_memory().unwrap();
        storage.write_raw(PETS_KEY, r#"[{"id":1,"name":"Biscuit","breed":"","notes":""}]"#).unwrap();
        storage.write_raw(BOOKINGS_KEY, "definitely not json").unwrap();

        let bookings: Vec<Booking> = storage.load(BOOKINGS_KEY).unwrap();
        assert!(bookings.is_empty());
        assert!(storage.read_raw(BOOKINGS_KEY).unwrap().is_none());
        assert!(storage.read_raw(PETS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_wrong_shape_is_corruption() {
        let storage = Storage::open_in_memory().unwrap();
        storage.write_raw(BOOKINGS_KEY, r#"{"not":"an array"}"#).unwrap();

        let bookings: Vec<Booking> = storage.load(BOOKINGS_KEY).unwrap();
        assert!(bookings.is_empty());
        assert!(storage.read_raw(BOOKINGS_KEY).unwrap().is_none());
    }
}
