use serde::{Serialize, Deserialize};

use crate::domain::pet::model::PetType;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DiseaseWarningRequest {
    pub pet_type: PetType,
    pub disease: String,
    pub city: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiseaseWarningSummary {
    /// Warnings handed to the mail queue; not a delivery count.
    pub requested: usize,
}
