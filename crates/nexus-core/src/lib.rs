pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod portal;
pub mod storage;
pub mod store;

pub use catalog::{available_dates, find_service, ServiceOffering, SERVICES, TIME_SLOTS};
pub use config::PortalConfig;
pub use error::{NexusError, Result};
pub use models::{Booking, Pet};
pub use portal::Portal;
pub use storage::{Storage, BOOKINGS_KEY, PETS_KEY};
pub use store::{BookingStore, PetRoster};
