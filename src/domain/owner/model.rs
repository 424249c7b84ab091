use serde::{Serialize, Deserialize};
use mongodb::bson::oid::ObjectId;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Owner {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub city: Option<String>,
    pub telephone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl Owner {

    /// An id-only handle; its fields have to be reloaded before use.
    pub fn reference(id: ObjectId) -> Self {
        Owner {
            id: Some(id),
            ..Owner::default()
        }
    }
}
