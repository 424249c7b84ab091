use log::{debug, info};
use serde_json::{Map, Value};

use crate::domain::contact::resolver::is_available;
use crate::domain::disease::model::DiseaseWarningRequest;
use crate::domain::email::{model::EmailInfo, service::EmailDispatcher};
use crate::domain::pet::{model::{Pet, PetType}, repository::{PetQuery, PetRepository}};
use crate::domain::view::View;
use crate::utils::errors::ApiError;

pub const DISEASE_WARNING_TEMPLATE: &str = "templates/disease-warning-mailing.txt";

pub fn warning_subject(disease: &str, city: &str) -> String {
    format!("Warning about {} in the Area of {}", disease, city)
}

pub struct DiseaseNotifier<P, D> {
    pets: P,
    mailer: D,
}

impl<P: PetRepository, D: EmailDispatcher> DiseaseNotifier<P, D> {
    pub fn new(pets: P, mailer: D) -> Self {
        Self { pets, mailer }
    }

    pub async fn warn(&self, request: &DiseaseWarningRequest) -> Result<usize, ApiError> {
        self.warn_about_disease(&request.pet_type, &request.disease, &request.city).await
    }

    /// Queues a warning for every owner of a `pet_type` in `city` that has a
    /// usable email address.
    ///
    /// Returns how many warnings were *requested*. Delivery happens later and
    /// its outcome is not reflected here.
    pub async fn warn_about_disease(&self, pet_type: &PetType, disease: &str, city: &str) -> Result<usize, ApiError> {
        debug!(
            "Disease warnings should be sent out for pet type: {}, disease: {} in the area of {}",
            pet_type, disease, city
        );

        let pets_in_disease_city = self.find_pets_in_disease_city(pet_type, city).await?;
        let pets_with_email = filter_pets_with_valid_owner_email(pets_in_disease_city);

        debug!("Possible pets in danger: {:?}", pets_with_email.iter().map(|(pet, _)| pet.to_string()).collect::<Vec<_>>());

        for (pet, recipient) in &pets_with_email {
            self.send_email_to_pet_owner(pet, recipient, disease, city)?;
        }
        let informed = pets_with_email.len();

        info!("Summary: disease warning requested for {} pet(s) in {}", informed, city);

        Ok(informed)
    }

    async fn find_pets_in_disease_city(&self, pet_type: &PetType, city: &str) -> Result<Vec<Pet>, ApiError> {
        let query = PetQuery::OwnerCityAndType {
            owner_city: city.to_string(),
            pet_type: pet_type.clone(),
        };
        self.pets.load(&query, View::PetWithOwnerAndType).await
    }

    fn send_email_to_pet_owner(&self, pet: &Pet, recipient: &str, disease: &str, city: &str) -> Result<(), ApiError> {
        let email = EmailInfo::new(
            recipient,
            warning_subject(disease, city),
            DISEASE_WARNING_TEMPLATE,
            template_params(pet, disease, city)?,
        );

        self.mailer.send_email_async(email)?;

        debug!("Disease warning email queued to {} for pet {}", recipient, pet);
        Ok(())
    }
}

/// Keeps pets whose owner has a non-blank email, paired with that email.
fn filter_pets_with_valid_owner_email(pets: Vec<Pet>) -> Vec<(Pet, String)> {
    pets.into_iter()
        .filter_map(|pet| {
            let email = pet.owner()?.email.clone().filter(|email| is_available(email))?;
            Some((pet, email))
        })
        .collect()
}

fn template_params(pet: &Pet, disease: &str, city: &str) -> Result<Map<String, Value>, ApiError> {
    let to_value = |value: serde_json::Result<Value>| {
        value.map_err(|e| ApiError::InternalServerError(format!("Failed to build template parameters: {}", e)))
    };

    let mut params = Map::new();
    params.insert("owner".to_string(), to_value(serde_json::to_value(pet.owner()))?);
    params.insert("pet".to_string(), to_value(serde_json::to_value(pet))?);
    params.insert("disease".to_string(), Value::String(disease.to_string()));
    params.insert("city".to_string(), Value::String(city.to_string()));
    Ok(params)
}
