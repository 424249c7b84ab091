use std::sync::Arc;

use crate::domain::{email::service::EmailDispatcher, message::formatter::MessageFormatter, owner::repository::OwnerRepository, pet::repository::PetRepository};

#[derive(Clone)]
pub struct AppState {
    pub pets: Arc<dyn PetRepository>,
    pub owners: Arc<dyn OwnerRepository>,
    pub mail_queue: Arc<dyn EmailDispatcher>,
    pub messages: Arc<dyn MessageFormatter>
}
