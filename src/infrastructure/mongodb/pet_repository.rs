use std::collections::HashMap;

use async_trait::async_trait;
use futures::StreamExt;
use log::debug;
use mongodb::bson::{doc, Document};
use mongodb::bson::oid::ObjectId;
use serde::{Serialize, Deserialize};

use crate::domain::owner::model::Owner;
use crate::domain::pet::model::{Pet, PetOwner, PetType};
use crate::domain::pet::repository::{PetQuery, PetRepository};
use crate::domain::view::View;
use crate::infrastructure::database::mongo_context::MongoContext;
use crate::infrastructure::mongodb::owner_repository::OWNERS_COLLECTION;
use crate::utils::errors::ApiError;

pub const PETS_COLLECTION: &str = "pets";

/// Stored shape of a pet; the owner is kept as an id.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PetDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub identification_number: String,
    pub name: Option<String>,
    pub pet_type: PetType,
    pub owner_id: Option<ObjectId>,
}

pub struct MongoPetRepository {
    pets: mongodb::Collection<PetDocument>,
    owners: mongodb::Collection<Owner>
}

impl MongoPetRepository {
    pub fn new(context: &MongoContext) -> Self {
        Self {
            pets: context.collection(PETS_COLLECTION),
            owners: context.collection(OWNERS_COLLECTION)
        }
    }

    async fn find_pets(&self, filter: Document) -> Result<Vec<PetDocument>, ApiError> {
        let mut cursor = self.pets.find(filter).await?;
        let mut pets = Vec::new();

        while let Some(doc) = cursor.next().await {
            match doc {
                Ok(pet) => pets.push(pet),
                Err(e) => return Err(ApiError::MongoError(e)),
            }
        }
        Ok(pets)
    }

    async fn find_owners(&self, filter: Document) -> Result<HashMap<ObjectId, Owner>, ApiError> {
        let mut cursor = self.owners.find(filter).await?;
        let mut owners = HashMap::new();

        while let Some(doc) = cursor.next().await {
            match doc {
                Ok(owner) => {
                    if let Some(id) = owner.id {
                        owners.insert(id, owner);
                    }
                },
                Err(e) => return Err(ApiError::MongoError(e)),
            }
        }
        Ok(owners)
    }

    async fn find_owners_of(&self, pets: &[PetDocument]) -> Result<HashMap<ObjectId, Owner>, ApiError> {
        let ids: Vec<ObjectId> = pets.iter().filter_map(|pet| pet.owner_id).collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        self.find_owners(doc! { "_id": { "$in": ids } }).await
    }
}

#[async_trait]
impl PetRepository for MongoPetRepository {

    async fn load(&self, query: &PetQuery, view: View) -> Result<Vec<Pet>, ApiError> {
        debug!("Loading pets {:?} with view {}", query, view.name());

        match query {
            PetQuery::OwnerCityAndType { owner_city, pet_type } => {
                let owners = self.find_owners(doc! { "city": owner_city.as_str() }).await?;
                if owners.is_empty() {
                    return Ok(Vec::new());
                }

                let owner_ids: Vec<ObjectId> = owners.keys().copied().collect();
                let pets = self.find_pets(doc! {
                    "pet_type": pet_type.as_str(),
                    "owner_id": { "$in": owner_ids }
                }).await?;

                Ok(assemble_pets(pets, &owners, view))
            },
            PetQuery::IdentificationNumber(identification_number) => {
                let pets = self.find_pets(doc! { "identification_number": identification_number.as_str() }).await?;
                let owners = if view.loads_owner() {
                    self.find_owners_of(&pets).await?
                } else {
                    HashMap::new()
                };

                Ok(assemble_pets(pets, &owners, view))
            }
        }
    }
}

/// Attaches owners to stored pets according to `view`. Owners that are not
/// requested by the view, or that no longer exist, are attached as references.
fn assemble_pets(pets: Vec<PetDocument>, owners: &HashMap<ObjectId, Owner>, view: View) -> Vec<Pet> {
    pets.into_iter()
        .map(|pet| {
            let owner = match pet.owner_id {
                None => PetOwner::Unassigned,
                Some(id) if view.loads_owner() => {
                    PetOwner::Assigned(owners.get(&id).cloned().unwrap_or_else(|| Owner::reference(id)))
                },
                Some(id) => PetOwner::Assigned(Owner::reference(id)),
            };
            Pet::new(pet.identification_number, pet.name, pet.pet_type, owner)
        })
        .collect()
}
