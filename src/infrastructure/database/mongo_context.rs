use std::sync::LazyLock;

use log::{error, info};
use serde::{Deserialize, Serialize};
use mongodb::{options::ClientOptions, Client, Collection, Database};
use regex::Regex;

use crate::utils::errors::ApiError;

static MONGO_URI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^mongodb(\+srv)?://([^/\s]+)(/.*)?$").expect("MongoDB URI pattern is valid")
});

#[derive(Clone, Debug)]
pub struct MongoContext {
    db: Database
}

impl MongoContext {

    pub async fn init(uri: &str, db_name: &str) -> Result<MongoContext, ApiError> {
        Self::validate_mongo_uri(uri)?;

        let mut client_options = ClientOptions::parse(uri).await?;
        client_options.app_name = Some("PetClinic".to_string());

        let client = Client::with_options(client_options)?;

        // list_database_names forces a round trip, so a dead server fails here
        client.list_database_names()
            .await
            .map_err(|e| {
                error!("Failed to connect to MongoDB: {}", e);
                e
            })?;

        let db = client.database(db_name);
        info!("Connected to MongoDB database: {}", db_name);

        Ok(MongoContext { db })
    }

    pub fn collection<T>(&self, name: &str) -> Collection<T>
    where
        T: Send + Sync + Unpin + for<'de> Deserialize<'de> + Serialize,
    {
        self.db.collection::<T>(name)
    }

    fn validate_mongo_uri(uri: &str) -> Result<(), ApiError> {
        let trimmed_uri = uri.trim();
        if trimmed_uri.is_empty() {
            return Err(ApiError::InvalidData("Invalid MongoDB URI: cannot be empty or whitespace".to_string()));
        }

        let host_part = trimmed_uri.strip_prefix("mongodb+srv://")
            .or_else(|| trimmed_uri.strip_prefix("mongodb://"))
            .ok_or_else(|| ApiError::InvalidData(format!(
                "Invalid MongoDB URI: must start with 'mongodb://' or 'mongodb+srv://'. Got: {}", uri
            )))?;

        if host_part.trim().is_empty() {
            return Err(ApiError::InvalidData("Invalid MongoDB URI: missing host after protocol".to_string()));
        }

        if uri.contains(char::is_whitespace) {
            return Err(ApiError::InvalidData("Invalid MongoDB URI: cannot contain whitespace".to_string()));
        }

        if !MONGO_URI.is_match(trimmed_uri) {
            return Err(ApiError::InvalidData(format!(
                "Invalid MongoDB URI format. Expected mongodb://host[:port][/database] or mongodb+srv://host[/database]. Got: {}", uri
            )));
        }

        Ok(())
    }

}
