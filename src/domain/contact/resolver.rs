//! Picks the best way to reach a pet's owner.
//!
//! Channels are tried in [`ContactType::PRIORITY`] order and the first one
//! with a non-blank value wins.

use log::{debug, info};

use crate::domain::contact::model::{Contact, ContactType};
use crate::domain::message::formatter::MessageFormatter;
use crate::domain::owner::{model::Owner, repository::OwnerRepository};
use crate::domain::pet::model::{Pet, PetOwner};
use crate::domain::view::View;
use crate::utils::errors::ApiError;

pub const OWNER_ADDRESS_FORMAT: &str = "ownerAddressFormat";

/// Present and holding at least one non-whitespace character.
pub fn is_available(value: &str) -> bool {
    !value.trim().is_empty()
}

pub struct ContactResolver<O, F> {
    owners: O,
    messages: F,
}

impl<O: OwnerRepository, F: MessageFormatter> ContactResolver<O, F> {
    pub fn new(owners: O, messages: F) -> Self {
        Self { owners, messages }
    }

    pub async fn find_contact(&self, pet: &Pet) -> Result<Option<Contact>, ApiError> {
        let pet_id = &pet.identification_number;
        debug!("[pet {}] Searching contact for pet", pet_id);

        let Some(owner) = self.load_owner_for(pet).await? else {
            debug!("[pet {}] No owner to contact", pet_id);
            return Ok(None);
        };
        debug!("[pet {}] Found owner: {:?}", pet_id, owner);

        for contact_type in ContactType::PRIORITY {
            let value = self.channel_value(contact_type, &owner)?;
            if let Some(value) = value.filter(|value| is_available(value)) {
                let contact = Contact::new(contact_type, value);
                info!("[pet {}] Contact created: {}", pet_id, contact);
                return Ok(Some(contact));
            }
        }

        debug!("[pet {}] Owner has no usable contact channel", pet_id);
        Ok(None)
    }

    fn channel_value(&self, contact_type: ContactType, owner: &Owner) -> Result<Option<String>, ApiError> {
        match contact_type {
            ContactType::Telephone => Ok(owner.telephone.clone()),
            ContactType::Email => Ok(owner.email.clone()),
            ContactType::Address => {
                // without a street there is no postal address, whatever the template adds
                if !owner.address.as_deref().is_some_and(is_available) {
                    return Ok(None);
                }
                self.format_owner_address(owner).map(Some)
            },
        }
    }

    fn format_owner_address(&self, owner: &Owner) -> Result<String, ApiError> {
        let field = |value: &Option<String>| value.as_deref().unwrap_or("").to_string();
        let args = [
            field(&owner.first_name),
            field(&owner.last_name),
            field(&owner.address),
            field(&owner.city),
        ];
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.messages.format_message(OWNER_ADDRESS_FORMAT, &args)
    }

    async fn load_owner_for(&self, pet: &Pet) -> Result<Option<Owner>, ApiError> {
        match &pet.owner {
            PetOwner::Unassigned => Ok(None),
            PetOwner::Assigned(owner) => self.owners.reload(owner, View::Local).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mongodb::bson::oid::ObjectId;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use crate::domain::pet::model::PetType;

    // Serves owners from memory and records what was reloaded.
    #[derive(Clone, Default)]
    struct FakeOwnerRepository {
        owners: HashMap<ObjectId, Owner>,
        reloads: Arc<Mutex<Vec<(Option<ObjectId>, View)>>>,
    }

    impl FakeOwnerRepository {
        fn with(owner: Owner) -> Self {
            let mut repo = Self::default();
            repo.owners.insert(owner.id.unwrap(), owner);
            repo
        }

        fn reload_count(&self) -> usize {
            self.reloads.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl OwnerRepository for FakeOwnerRepository {
        async fn reload(&self, owner: &Owner, view: View) -> Result<Option<Owner>, ApiError> {
            self.reloads.lock().unwrap().push((owner.id, view));
            Ok(owner.id.and_then(|id| self.owners.get(&id).cloned()))
        }
    }

    struct FailingOwnerRepository;

    #[async_trait]
    impl OwnerRepository for FailingOwnerRepository {
        async fn reload(&self, _owner: &Owner, _view: View) -> Result<Option<Owner>, ApiError> {
            Err(ApiError::InternalServerError("store unavailable".to_string()))
        }
    }

    // Formats "{0} {1}, {2}, {3}" and records every call.
    #[derive(Clone, Default)]
    struct FakeFormatter {
        calls: Arc<Mutex<Vec<(String, Vec<String>)>>>,
    }

    impl FakeFormatter {
        fn calls(&self) -> Vec<(String, Vec<String>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl MessageFormatter for FakeFormatter {
        fn format_message(&self, key: &str, args: &[&str]) -> Result<String, ApiError> {
            self.calls.lock().unwrap().push((
                key.to_string(),
                args.iter().map(|arg| arg.to_string()).collect(),
            ));
            Ok(format!("{} {}, {}, {}", args[0], args[1], args[2], args[3]))
        }
    }

    fn owner(telephone: Option<&str>, email: Option<&str>, address: Option<&str>) -> Owner {
        Owner {
            id: Some(ObjectId::new()),
            first_name: Some("Jane".to_string()),
            last_name: Some("Doe".to_string()),
            city: Some("Springfield".to_string()),
            telephone: telephone.map(str::to_string),
            email: email.map(str::to_string),
            address: address.map(str::to_string),
        }
    }

    fn pet_of(owner: &Owner) -> Pet {
        // the pet only holds a stale reference; the resolver must reload it
        Pet::new(
            "4711".to_string(),
            Some("Rex".to_string()),
            PetType::new("Dog"),
            PetOwner::Assigned(Owner::reference(owner.id.unwrap())),
        )
    }

    #[tokio::test]
    async fn test_telephone_wins_over_other_channels() {
        let owner = owner(Some("555-1234"), Some(""), Some("12 Elm St"));
        let formatter = FakeFormatter::default();
        let resolver = ContactResolver::new(FakeOwnerRepository::with(owner.clone()), formatter.clone());

        let contact = resolver.find_contact(&pet_of(&owner)).await.unwrap();

        assert_eq!(contact, Some(Contact::new(ContactType::Telephone, "555-1234")));
        assert!(formatter.calls().is_empty());
    }

    #[tokio::test]
    async fn test_email_used_when_telephone_blank() {
        let owner = owner(Some(""), Some("a@b.com"), Some("12 Elm St"));
        let resolver = ContactResolver::new(FakeOwnerRepository::with(owner.clone()), FakeFormatter::default());

        let contact = resolver.find_contact(&pet_of(&owner)).await.unwrap();

        assert_eq!(contact, Some(Contact::new(ContactType::Email, "a@b.com")));
    }

    #[tokio::test]
    async fn test_whitespace_telephone_counts_as_blank() {
        let owner = owner(Some("   \t"), Some("a@b.com"), None);
        let resolver = ContactResolver::new(FakeOwnerRepository::with(owner.clone()), FakeFormatter::default());

        let contact = resolver.find_contact(&pet_of(&owner)).await.unwrap();

        assert_eq!(contact.map(|c| c.contact_type), Some(ContactType::Email));
    }

    #[tokio::test]
    async fn test_address_used_as_last_resort() {
        let owner = owner(Some(""), Some(""), Some("12 Elm St"));
        let formatter = FakeFormatter::default();
        let resolver = ContactResolver::new(FakeOwnerRepository::with(owner.clone()), formatter.clone());

        let contact = resolver.find_contact(&pet_of(&owner)).await.unwrap();

        assert_eq!(
            contact,
            Some(Contact::new(ContactType::Address, "Jane Doe, 12 Elm St, Springfield"))
        );
        let calls = formatter.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, OWNER_ADDRESS_FORMAT);
        assert_eq!(calls[0].1, vec!["Jane", "Doe", "12 Elm St", "Springfield"]);
    }

    #[tokio::test]
    async fn test_address_formatted_from_fresh_owner_record() {
        let owner = owner(None, None, Some("12 Elm St"));
        let formatter = FakeFormatter::default();
        let repo = FakeOwnerRepository::with(owner.clone());
        let resolver = ContactResolver::new(repo.clone(), formatter.clone());

        resolver.find_contact(&pet_of(&owner)).await.unwrap();

        assert_eq!(repo.reload_count(), 1);
        assert_eq!(repo.reloads.lock().unwrap()[0], (owner.id, View::Local));
    }

    #[tokio::test]
    async fn test_no_contact_when_all_fields_blank() {
        let owner = Owner {
            id: Some(ObjectId::new()),
            telephone: Some(" ".to_string()),
            email: Some("".to_string()),
            ..Owner::default()
        };
        let resolver = ContactResolver::new(FakeOwnerRepository::with(owner.clone()), FakeFormatter::default());

        let contact = resolver.find_contact(&pet_of(&owner)).await.unwrap();

        assert_eq!(contact, None);
    }

    #[tokio::test]
    async fn test_no_postal_address_without_street() {
        let owner = owner(Some(""), Some(""), Some("  "));
        let formatter = FakeFormatter::default();
        let resolver = ContactResolver::new(FakeOwnerRepository::with(owner.clone()), formatter.clone());

        let contact = resolver.find_contact(&pet_of(&owner)).await.unwrap();

        assert_eq!(contact, None);
        assert!(formatter.calls().is_empty());
    }

    #[tokio::test]
    async fn test_builtin_bundle_never_yields_placeholder_address() {
        use crate::infrastructure::i18n::message_bundle::MessageBundle;

        let owner = owner(Some(""), Some(""), Some(""));
        let resolver = ContactResolver::new(FakeOwnerRepository::with(owner.clone()), MessageBundle::builtin());

        let contact = resolver.find_contact(&pet_of(&owner)).await.unwrap();

        assert_eq!(contact, None);
    }

    #[tokio::test]
    async fn test_no_contact_for_pet_without_owner() {
        let repo = FakeOwnerRepository::default();
        let resolver = ContactResolver::new(repo.clone(), FakeFormatter::default());
        let pet = Pet::new("4711".to_string(), None, PetType::new("Cat"), PetOwner::Unassigned);

        let contact = resolver.find_contact(&pet).await.unwrap();

        assert_eq!(contact, None);
        assert_eq!(repo.reload_count(), 0);
    }

    #[tokio::test]
    async fn test_no_contact_when_owner_vanished() {
        let gone = owner(Some("555-1234"), None, None);
        let resolver = ContactResolver::new(FakeOwnerRepository::default(), FakeFormatter::default());

        let contact = resolver.find_contact(&pet_of(&gone)).await.unwrap();

        assert_eq!(contact, None);
    }

    #[tokio::test]
    async fn test_store_errors_propagate() {
        let owner = owner(Some("555-1234"), None, None);
        let resolver = ContactResolver::new(FailingOwnerRepository, FakeFormatter::default());

        let result = resolver.find_contact(&pet_of(&owner)).await;

        assert!(matches!(result, Err(ApiError::InternalServerError(_))));
    }

    #[test]
    fn test_is_available() {
        assert!(is_available("x"));
        assert!(is_available(" a@b.com "));
        assert!(!is_available(""));
        assert!(!is_available(" \n\t"));
    }
}
