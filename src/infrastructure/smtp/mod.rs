pub mod email_service;
pub mod mail_queue;
