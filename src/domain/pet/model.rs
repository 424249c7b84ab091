use std::fmt;

use serde::{Serialize, Deserialize};

use crate::domain::owner::model::Owner;

/// Kind of animal, e.g. "Dog". Compared exactly as stored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PetType(String);

impl PetType {
    pub fn new(name: impl Into<String>) -> Self {
        PetType(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum PetOwner {
    Assigned(Owner),
    Unassigned,
}

impl PetOwner {
    pub fn as_owner(&self) -> Option<&Owner> {
        match self {
            PetOwner::Assigned(owner) => Some(owner),
            PetOwner::Unassigned => None,
        }
    }
}

impl From<Option<Owner>> for PetOwner {
    fn from(owner: Option<Owner>) -> Self {
        match owner {
            Some(owner) => PetOwner::Assigned(owner),
            None => PetOwner::Unassigned,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Pet {
    pub identification_number: String,
    pub name: Option<String>,
    pub pet_type: PetType,
    pub owner: PetOwner,
}

impl Pet {
    pub fn new(
        identification_number: String,
        name: Option<String>,
        pet_type: PetType,
        owner: PetOwner,
    ) -> Self {
        Pet {
            identification_number,
            name,
            pet_type,
            owner,
        }
    }

    pub fn owner(&self) -> Option<&Owner> {
        self.owner.as_owner()
    }
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} '{}' ({})", self.pet_type, name, self.identification_number),
            None => write!(f, "{} ({})", self.pet_type, self.identification_number),
        }
    }
}
