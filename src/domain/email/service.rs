use std::sync::Arc;

use async_trait::async_trait;
use crate::{domain::email::model::{Email, EmailInfo}, utils::errors::ApiError};

/// Delivers rendered mail.
#[async_trait]
pub trait EmailService: Send + Sync {
    async fn send_email(&self, email: &Email) -> Result<(), ApiError>;
}

/// Accepts mail for later delivery. Returns once the message is queued;
/// delivery outcome is never reported back.
pub trait EmailDispatcher: Send + Sync {
    fn send_email_async(&self, email: EmailInfo) -> Result<(), ApiError>;
}

impl<T: EmailDispatcher + ?Sized> EmailDispatcher for Arc<T> {
    fn send_email_async(&self, email: EmailInfo) -> Result<(), ApiError> {
        (**self).send_email_async(email)
    }
}
