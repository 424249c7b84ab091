use serde::{Deserialize, Serialize};

/// Names which related fields a repository loads alongside an entity.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    /// The entity's own fields. Related entities come back as references.
    Local,
    /// A pet together with its full owner record.
    PetWithOwnerAndType,
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Local => "_local",
            View::PetWithOwnerAndType => "pet-with-owner-and-type",
        }
    }

    pub fn loads_owner(&self) -> bool {
        matches!(self, View::PetWithOwnerAndType)
    }
}
