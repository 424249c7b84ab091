use async_trait::async_trait;
use mongodb::bson::doc;

use crate::domain::owner::{model::Owner, repository::OwnerRepository};
use crate::domain::view::View;
use crate::infrastructure::database::mongo_context::MongoContext;
use crate::utils::errors::ApiError;

pub const OWNERS_COLLECTION: &str = "owners";

pub struct MongoOwnerRepository {
    owners: mongodb::Collection<Owner>
}

impl MongoOwnerRepository {
    pub fn new(context: &MongoContext) -> Self {
        Self {
            owners: context.collection(OWNERS_COLLECTION)
        }
    }
}

#[async_trait]
impl OwnerRepository for MongoOwnerRepository {

    // Owners have no relations, so every view loads the whole document.
    async fn reload(&self, owner: &Owner, _view: View) -> Result<Option<Owner>, ApiError> {
        let Some(id) = owner.id else {
            return Ok(None);
        };

        match self.owners.find_one(doc! { "_id": id }).await {
            Ok(owner) => Ok(owner),
            Err(e) => Err(ApiError::MongoError(e))
        }
    }
}
