use crate::config::PortalConfig;
use crate::error::Result;
use crate::models::{Booking, Pet};
use crate::storage::Storage;
use crate::store::{BookingStore, PetRoster};

/// Root composition of the portal: one storage adapter and the two stores,
/// constructed once at startup and handed to whatever frontend drives it.
pub struct Portal {
    config: PortalConfig,
    storage: Storage,
    bookings: BookingStore,
    pets: PetRoster,
}

impl Portal {
    /// Open the portal against an on-disk store.
    pub fn open(path: &str, config: PortalConfig) -> Result<Self> {
        Self::compose(Storage::open(path)?, config)
    }

    /// Open the portal against an in-memory store (for testing).
    pub fn open_in_memory(config: PortalConfig) -> Result<Self> {
        Self::compose(Storage::open_in_memory()?, config)
    }

    fn compose(storage: Storage, config: PortalConfig) -> Result<Self> {
        let bookings = BookingStore::load(&storage)?;
        let pets = PetRoster::load(&storage)?;
        Ok(Self {
            config,
            storage,
            bookings,
            pets,
        })
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    // ── Vault ──

    pub fn bookings(&self) -> &[Booking] {
        self.bookings.all()
    }

    pub fn booking(&self, id: i64) -> Option<&Booking> {
        self.bookings.get(id)
    }

    pub fn book(&mut self, service: &str, price: &str, date: &str, time: &str) -> Result<Option<Booking>> {
        self.bookings.create(&self.storage, service, price, date, time)
    }

    pub fn reschedule(&mut self, id: i64, date: &str, time: &str) -> Result<Option<Booking>> {
        self.bookings.update(&self.storage, id, date, time)
    }

    pub fn cancel(&mut self, id: i64) -> Result<bool> {
        self.bookings.delete(&self.storage, id)
    }

    // ── Family ──

    pub fn pets(&self) -> &[Pet] {
        self.pets.all()
    }

    pub fn pet(&self, id: i64) -> Option<&Pet> {
        self.pets.get(id)
    }

    pub fn add_pet(&mut self, name: &str, breed: &str, notes: &str) -> Result<Option<Pet>> {
        self.pets.create(&self.storage, name, breed, notes)
    }

    pub fn update_pet(&mut self, id: i64, name: &str, breed: &str, notes: &str) -> Result<Option<Pet>> {
        self.pets.update(&self.storage, id, name, breed, notes)
    }

    pub fn remove_pet(&mut self, id: i64) -> Result<bool> {
        self.pets.delete(&self.storage, id)
    }

    /// Wipe all stored portal data and empty both in-memory collections.
    pub fn reset(&mut self) -> Result<()> {
        self.storage.clear_all()?;
        self.bookings = BookingStore::load(&self.storage)?;
        self.pets = PetRoster::load(&self.storage)?;
        Ok(())
    }
}
