use serde::{Deserialize, Serialize};

/// A pet profile in the family roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub breed: String,
    pub notes: String,
}

impl Pet {
    pub fn new(id: i64, name: String, breed: String, notes: String) -> Self {
        Self {
            id,
            name,
            breed,
            notes,
        }
    }
}
