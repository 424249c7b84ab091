pub mod view;
pub mod owner;
pub mod pet;
pub mod contact;
pub mod disease;
pub mod email;
pub mod message;

pub use view::View;
