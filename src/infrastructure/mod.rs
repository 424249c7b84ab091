pub mod database;
pub mod mongodb;
pub mod smtp;
pub mod templates;
pub mod i18n;

pub use database::mongo_context;
pub use smtp::{email_service, mail_queue};
