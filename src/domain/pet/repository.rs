use std::sync::Arc;

use async_trait::async_trait;
use crate::{domain::{pet::model::{Pet, PetType}, view::View}, utils::errors::ApiError};

/// Named-parameter pet queries understood by every [`PetRepository`].
#[derive(Clone, Debug, PartialEq)]
pub enum PetQuery {
    /// Pets of `pet_type` whose owner lives in `owner_city`.
    OwnerCityAndType { owner_city: String, pet_type: PetType },
    IdentificationNumber(String),
}

#[async_trait]
pub trait PetRepository: Send + Sync {
    async fn load(&self, query: &PetQuery, view: View) -> Result<Vec<Pet>, ApiError>;
}

#[async_trait]
impl<T: PetRepository + ?Sized> PetRepository for Arc<T> {
    async fn load(&self, query: &PetQuery, view: View) -> Result<Vec<Pet>, ApiError> {
        (**self).load(query, view).await
    }
}
