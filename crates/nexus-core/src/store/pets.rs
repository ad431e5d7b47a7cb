use crate::error::Result;
use crate::models::Pet;
use crate::storage::{Storage, PETS_KEY};

/// In-memory pet roster ("family"), newest first.
///
/// Same contract as the booking store: every mutation persists the full
/// collection, and a missing required field declines the operation.
pub struct PetRoster {
    items: Vec<Pet>,
}

impl PetRoster {
    pub fn load(storage: &Storage) -> Result<Self> {
        Ok(Self {
            items: storage.load(PETS_KEY)?,
        })
    }

    pub fn all(&self) -> &[Pet] {
        &self.items
    }

    pub fn get(&self, id: i64) -> Option<&Pet> {
        self.items.iter().find(|p| p.id == id)
    }

    /// Add a pet to the roster. Declines with `None` when `name` is empty.
    pub fn create(
        &mut self,
        storage: &Storage,
        name: &str,
        breed: &str,
        notes: &str,
    ) -> Result<Option<Pet>> {
        if name.is_empty() {
            return Ok(None);
        }
        let pet = Pet::new(
            super::fresh_id(self.items.iter().map(|p| p.id)),
            name.to_string(),
            breed.to_string(),
            notes.to_string(),
        );
        self.items.insert(0, pet.clone());
        storage.save(PETS_KEY, &self.items)?;
        log::debug!("pet {} added to the roster", pet.id);
        Ok(Some(pet))
    }

    /// Replace a pet's profile fields. Returns `None` on an unknown id, or
    /// when `name` is empty.
    pub fn update(
        &mut self,
        storage: &Storage,
        id: i64,
        name: &str,
        breed: &str,
        notes: &str,
    ) -> Result<Option<Pet>> {
        if name.is_empty() {
            return Ok(None);
        }
        let Some(pet) = self.items.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        pet.name = name.to_string();
        pet.breed = breed.to_string();
        pet.notes = notes.to_string();
        let updated = pet.clone();
        storage.save(PETS_KEY, &self.items)?;
        Ok(Some(updated))
    }

    /// Remove a pet. Returns whether anything was removed.
    pub fn delete(&mut self, storage: &Storage, id: i64) -> Result<bool> {
        let before = self.items.len();
        self.items.retain(|p| p.id != id);
        if self.items.len() == before {
            return Ok(false);
        }
        storage.save(PETS_KEY, &self.items)?;
        log::debug!("pet {} removed from the roster", id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> (Storage, PetRoster) {
        let storage = Storage::open_in_memory().unwrap();
        let pets = PetRoster::load(&storage).unwrap();
        (storage, pets)
    }

    #[test]
    fn test_create_requires_a_name() {
        let (storage, mut pets) = roster();
        assert!(pets.create(&storage, "", "", "").unwrap().is_none());
        assert!(pets.all().is_empty());
        assert!(storage.read_raw(PETS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_create_and_list_newest_first() {
        let (storage, mut pets) = roster();
        pets.create(&storage, "Biscuit", "Corgi", "").unwrap();
        pets.create(&storage, "Mochi", "Shiba Inu", "nervous around clippers")
            .unwrap();

        let all = pets.all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Mochi");
        assert_eq!(all[1].name, "Biscuit");
    }

    #[test]
    fn test_update_replaces_all_profile_fields() {
        let (storage, mut pets) = roster();
        let pet = pets.create(&storage, "Biscuit", "Corgi", "").unwrap().unwrap();

        let updated = pets
            .update(&storage, pet.id, "Biscuit", "Pembroke Corgi", "double coat")
            .unwrap()
            .unwrap();
        assert_eq!(updated.breed, "Pembroke Corgi");
        assert_eq!(updated.notes, "double coat");
        assert_eq!(pets.all().len(), 1);
    }

    #[test]
    fn test_update_with_empty_name_is_declined() {
        let (storage, mut pets) = roster();
        let pet = pets.create(&storage, "Biscuit", "Corgi", "").unwrap().unwrap();

        assert!(pets.update(&storage, pet.id, "", "Corgi", "").unwrap().is_none());
        assert_eq!(pets.get(pet.id).unwrap().name, "Biscuit");
    }

    #[test]
    fn test_delete_unknown_id_is_a_noop() {
        let (storage, mut pets) = roster();
        pets.create(&storage, "Biscuit", "Corgi", "").unwrap();
        let stored = storage.read_raw(PETS_KEY).unwrap();

        assert!(!pets.delete(&storage, 42).unwrap());
        assert_eq!(storage.read_raw(PETS_KEY).unwrap(), stored);
    }
}
