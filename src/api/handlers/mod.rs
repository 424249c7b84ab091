pub mod contact_handlers;
pub mod disease_handlers;
