pub mod model;
pub mod resolver;

pub use model::{Contact, ContactType};
pub use resolver::ContactResolver;
