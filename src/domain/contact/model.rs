use std::fmt;

use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContactType {
    Telephone,
    Email,
    Address,
}

impl ContactType {
    /// Channels in the order they are tried.
    pub const PRIORITY: [ContactType; 3] = [
        ContactType::Telephone,
        ContactType::Email,
        ContactType::Address,
    ];
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    #[serde(rename = "type")]
    pub contact_type: ContactType,
    pub value: String,
}

impl Contact {
    pub fn new(contact_type: ContactType, value: impl Into<String>) -> Self {
        Contact {
            contact_type,
            value: value.into(),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.contact_type, self.value)
    }
}
