pub mod message_bundle;
