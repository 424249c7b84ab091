pub mod model;
pub mod service;

pub use model::{Email, EmailInfo};
pub use service::{EmailDispatcher, EmailService};
